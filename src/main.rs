//! CLI entry point for level chunk mining

use clap::Parser;
use levelchunks::io::cli::{Cli, FileProcessor, init_logging};

fn main() -> levelchunks::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.output)?;
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
