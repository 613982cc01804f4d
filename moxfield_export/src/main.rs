//! Moxfield Export - MTG scanner CSV to deck list converter
//!
//! Converts a card scanner's CSV export into a Moxfield deck list file and
//! echoes the list to stdout.

use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Generate a Moxfield .txt deck list from an MTG scanner (Dragon Shield) CSV export
#[derive(Parser, Debug)]
#[command(name = "moxfield_export")]
#[command(version, about, long_about = None)]
struct Args {
    /// Scanner CSV export to read
    infile: PathBuf,

    /// Deck list file to create or overwrite
    outfile: PathBuf,
}

fn main() {
    // Initialize logging. Set RUST_LOG to control the level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut console = stdout.lock();
    if let Err(e) = moxfield_export::convert(&args.infile, &args.outfile, &mut console) {
        log::error!("Conversion failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
