use saw_tables::GeneratorConfig;

use flexi_logger::{Logger, opt_format};
use log::info;

use std::error::Error;

/// Write the saw tables to tables/saw_tables.c.
///
/// Takes an optional JSON config file as only argument. Without it, the
/// built-in defaults are used.
fn main() -> Result<(), Box<dyn Error>> {
    // Start as "RUST_LOG=debug make_saw_tables" to show per-table details
    let _logger = Logger::with_env_or_str("make_saw_tables=info, saw_tables=warn")
                            .format(opt_format)
                            .start()?;

    let config = match std::env::args().nth(1) {
        Some(filename) => GeneratorConfig::from_file(&filename)?,
        None => GeneratorConfig::default(),
    };

    let tables = saw_tables::generate_file(&config)?;
    let last = tables.num_tables - 1;
    info!("Wrote {} tables to [{}], factor {}, range of table 0: {}, range of table {}: {}",
        tables.num_tables,
        config.output.display(),
        tables.factor,
        tables.peak_to_peak(0)?,
        last,
        tables.peak_to_peak(last)?);
    Ok(())
}
