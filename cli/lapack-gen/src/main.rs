//! lapack-gen CLI — prints safe wrappers for the routines of a LAPACK
//! binding crate.

mod generate;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "lapack-gen",
    version,
    about = "Generate safe LAPACK call wrappers from raw bindings"
)]
struct Cli {
    /// Root of the raw binding crate; bindings are read from <SYS>/src/lapack.rs
    #[arg(long, default_value = "lapack-sys")]
    sys: PathBuf,
    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = generate::run(&cli.sys) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
