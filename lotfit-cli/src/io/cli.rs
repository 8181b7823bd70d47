use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON array of listings
    #[arg(short, long, value_name = "FILE")]
    pub catalog_file: PathBuf,
    /// JSON array of vehicle requests ({"length", "quantity"})
    #[arg(short, long, value_name = "FILE")]
    pub request_file: PathBuf,
    /// Where to write the results, printed to stdout if absent
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
