use std::process;

use clap::Parser;
use opstep_debugger::cli::{self, Args};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr so they never interleave with REPL output.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    match cli::run(args) {
        Ok(summary) => {
            if let Some(reason) = summary.halted {
                println!("Execution halted: {reason}");
            }
            process::exit(summary.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
