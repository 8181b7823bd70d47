use anyhow::Result;
use clap::Parser as ClapParser;
use log::info;
use lotfit::io::read_catalog;
use lotfit_cli::io::cli::Cli;
use lotfit_cli::io::output::SearchOutput;
use lotfit_cli::{EPOCH, io};
use std::sync::LazyLock;
use std::time::Instant;
use thousands::Separable;

fn main() -> Result<()> {
    LazyLock::force(&EPOCH);
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let catalog = read_catalog(&args.catalog_file)?;
    let request = io::read_requests(&args.request_file)?;
    info!(
        "[MAIN] {} listing(s), {} vehicle request(s)",
        catalog.len().separate_with_commas(),
        request.len()
    );

    let start = Instant::now();
    let results = lotfit::io::search(&catalog, &request)?;
    let run_time = start.elapsed();

    info!(
        "[MAIN] {} matching location(s) found in {:.3}ms ({:.3}s since start)",
        results.len().separate_with_commas(),
        run_time.as_secs_f64() * 1000.0,
        EPOCH.elapsed().as_secs_f64()
    );

    let output = SearchOutput::new(request, results, run_time);

    match args.output_file {
        Some(path) => io::write_json(&output, &path),
        None => io::print_json(&output),
    }
}
