//! emx-sga CLI
//!
//! Convert text between Latin and the Standard Galactic Alphabet.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use emx_sga::{Alphabet, Mode, Transcoder};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "emx-sga")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Standard Galactic Alphabet transcoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert Latin text to glyphs
    Encode(ConvertArgs),

    /// Convert glyphs back to Latin text
    Decode(ConvertArgs),

    /// Decode if the input contains glyphs, encode otherwise
    Auto(ConvertArgs),

    /// Print the alphabet
    Table {
        /// Also print codepoints
        #[arg(short = 'u', long)]
        codepoints: bool,
    },
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Text to convert (default: --input or stdin)
    text: Vec<String>,

    /// Input file or directory
    #[arg(short = 'i', long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Output file, or directory when the input is a directory (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Encode(args) => convert(args, Mode::Encode)?,
        Commands::Decode(args) => convert(args, Mode::Decode)?,
        Commands::Auto(args) => convert(args, Mode::Auto)?,
        Commands::Table { codepoints } => print_table(codepoints),
    }

    Ok(())
}

fn convert(args: ConvertArgs, mode: Mode) -> Result<()> {
    let transcoder = Transcoder::new();

    if let Some(input) = args.input.as_deref().filter(|p| p.is_dir()) {
        let Some(output) = args.output.as_deref() else {
            bail!("Converting directory {} requires --output <DIR>", input.display());
        };
        return convert_tree(&transcoder, input, output, mode);
    }

    let from_args = !args.text.is_empty();
    let text = if let Some(input_path) = &args.input {
        fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read: {}", input_path.display()))?
    } else if from_args {
        args.text.join(" ")
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    };

    let (converted, direction) = transcoder.convert(&text, mode);
    info!("{:?}: {} bytes in, {} bytes out", direction, text.len(), converted.len());

    if let Some(output_path) = args.output {
        fs::write(&output_path, converted)
            .with_context(|| format!("Failed to write: {}", output_path.display()))?;
    } else if from_args {
        println!("{}", converted);
    } else {
        print!("{}", converted);
    }

    Ok(())
}

fn convert_tree(transcoder: &Transcoder, input: &Path, output: &Path, mode: Mode) -> Result<()> {
    let entries = walkdir::WalkDir::new(input)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect::<Vec<_>>();

    for entry in &entries {
        let path = entry.path();
        let relative_path = path
            .strip_prefix(input)
            .map_err(|_| anyhow::anyhow!("Failed to get relative path: {}", path.display()))?;
        let output_path = output.join(relative_path);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }

        let direction = transcoder.convert_file(path, &output_path, mode)?;
        info!("{:?}: {}", direction, relative_path.display());
    }

    debug!("Converted {} files into {}", entries.len(), output.display());
    Ok(())
}

fn print_table(codepoints: bool) {
    for (letter, glyph) in Alphabet::standard().glyphs() {
        if codepoints {
            let units: Vec<String> = glyph.chars().map(|c| format!("U+{:04X}", c as u32)).collect();
            println!("{}\t{}\t{}", letter, glyph, units.join(" "));
        } else {
            println!("{}\t{}", letter, glyph);
        }
    }
}
