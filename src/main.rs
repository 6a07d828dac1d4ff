//! CLI entry point for the maze photo solving pipeline

use clap::Parser;
use mazesnap::io::cli::{Cli, FileProcessor};
use mazesnap::io::configuration::LOG_FILE_NAME;

fn main() -> mazesnap::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

/// Route log records to an append-only file, falling back to stderr
///
/// Progress bars own the terminal during a run, so informational
/// messages go to the log file instead.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);

    if let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
    {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}
