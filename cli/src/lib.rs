//! Shared argument and I/O handling for the pandoc filter executables.
//!
//! pandoc runs a filter as `FILTER FORMAT` with the JSON tree on stdin and
//! expects the filtered tree on stdout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use panlatex::{JsonFormat, NodeFilter};

/// Arguments every filter executable accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Output format pandoc is producing (passed by `pandoc --filter`)
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,

    /// Read the document tree from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the document tree to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output indented JSON
    #[arg(long)]
    pub pretty: bool,
}

impl FilterArgs {
    /// Output format; empty when pandoc passed none, which no filter matches.
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or_default()
    }

    /// JSON layout for the output tree.
    pub fn json_format(&self) -> JsonFormat {
        if self.pretty {
            JsonFormat::Pretty
        } else {
            JsonFormat::Compact
        }
    }
}

/// Run `filter` over the input channel selected by `args`.
pub fn run<F: NodeFilter + ?Sized>(
    filter: &mut F,
    args: &FilterArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Filtering for format '{}'", args.format());

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    // Decode and filter before touching the output, so a failure leaves
    // an existing output file intact.
    let doc = panlatex::json::from_reader(reader)?;
    let doc = panlatex::apply_filter(doc, filter, args.format())?;

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    panlatex::json::write_document(&doc, writer, args.json_format())?;

    Ok(())
}

/// Initialize logging to stderr, controlled by `RUST_LOG`.
pub fn init_logging() {
    env_logger::init();
}

/// Report a fatal error on stderr and exit with status 1.
pub fn exit_with_error(err: &dyn std::error::Error) -> ! {
    eprintln!("{}: {}", "Error".red().bold(), err);
    std::process::exit(1);
}
