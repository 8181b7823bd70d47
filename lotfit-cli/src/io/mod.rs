use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log};
use lotfit::io::ext_repr::ExtVehicleRequest;
use serde::Serialize;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_requests(path: &Path) -> Result<Vec<ExtVehicleRequest>> {
    let file = File::open(path)
        .with_context(|| format!("could not open request file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse request file: {}", path.display()))
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    info!("results written to {:?}", path.canonicalize()?);
    Ok(())
}

pub fn print_json(value: &impl Serialize) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        // Results may go to stdout, keep the log out of their way
        .chain(std::io::stderr())
        .apply()?;
    log!(Level::Info, "time: {}", jiff::Timestamp::now());
    Ok(())
}
