use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, debug};
use utfconv::{ConvertOptions, DecoderOptions, Direction, EncoderOptions};

use crate::hex::{parse_bytes, parse_code_point};

#[derive(Parser, Debug)]
#[command(name = "utfconv")]
#[command(about = "Convert between UTF-32LE and UTF-8", long_about = None)]
pub struct Cli {
    /// Reject surrogates, overlong forms and values above U+10FFFF
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode one hex code point as UTF-8 and print the bytes
    Encode {
        /// Code point, e.g. 20AC, 0x20AC or U+20AC
        code_point: String,
    },
    /// Decode one UTF-8 sequence given as hex bytes
    Decode {
        /// Bytes, e.g. `E2 82 AC` or `E2` `82` `AC`
        #[arg(required = true, num_args = 1..)]
        bytes: Vec<String>,
    },
    /// Convert a whole file
    Convert {
        /// Input file
        input: PathBuf,
        /// Output file, overwritten if it exists
        output: PathBuf,
        /// Conversion direction: utf32-to-utf8 (u32-to-u8, utf32) or
        /// utf8-to-utf32 (u8-to-u32, utf8)
        #[arg(long, short)]
        direction: Direction,
    },
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        if self.strict {
            ConvertOptions::strict()
        } else {
            ConvertOptions::default()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let options = cli.options();
    debug!("Options: {options:?}");

    match cli.command {
        Commands::Encode { code_point } => {
            println!("{}", encode_line(&code_point, &options.encoder)?);
        }
        Commands::Decode { bytes } => {
            println!("{}", decode_line(&bytes, &options.decoder)?);
        }
        Commands::Convert {
            input,
            output,
            direction,
        } => {
            let stats = utfconv::convert_file_with(&input, &output, direction, &options)
                .with_context(|| {
                    format!("converting {} to {}", input.display(), output.display())
                })?;
            eprintln!(
                "Converted {} code points ({} -> {} bytes) into {}",
                stats.code_points,
                stats.bytes_read,
                stats.bytes_written,
                output.display()
            );
        }
    }

    Ok(())
}

fn encode_line(code_point: &str, options: &EncoderOptions) -> Result<String> {
    let value = parse_code_point(code_point)?;
    let sequence = utfconv::encode_with(value, options)
        .with_context(|| format!("encoding U+{value:04X}"))?;
    Ok(format!("{sequence:X}"))
}

fn decode_line<S: AsRef<str>>(bytes: &[S], options: &DecoderOptions) -> Result<String> {
    let buffer = parse_bytes(bytes)?;
    if buffer.is_empty() {
        bail!("no bytes to decode");
    }
    let (code_point, next) = utfconv::decode_with(&buffer, 0, options).context("decoding bytes")?;
    if next != buffer.len() {
        bail!(
            "{} trailing bytes after the first sequence",
            buffer.len() - next
        );
    }
    Ok(format!("U+{code_point:04X} ({next} bytes)"))
}
