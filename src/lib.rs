//! Generator for band-limited saw wave lookup tables.
//!
//! Builds a set of single cycle saw waves with increasing harmonic content,
//! quantizes them to 8 bit and writes them as a C array for use in firmware
//! that can't afford to filter waves at runtime.
//!
//! ```
//! use saw_tables::{CEmitter, GeneratorConfig, SawTableSet};
//!
//! let config = GeneratorConfig { harmonic_limit: 4, num_samples: 32, ..GeneratorConfig::default() };
//! let tables = SawTableSet::generate(&config).unwrap();
//! let source = CEmitter::render(&tables.quantize().unwrap());
//! assert!(source.starts_with("// --- file generated by make_saw_table.py ---"));
//! ```

mod config;
mod emitter;
mod error;
mod lowpass;
mod normalizer;
mod quantizer;
mod saw_wave;
mod table_set;

pub use config::GeneratorConfig;
pub use emitter::CEmitter;
pub use error::TableError;
pub use lowpass::{Harmonic, LowpassFilter};
pub use normalizer::Normalizer;
pub use quantizer::Quantizer;
pub use saw_wave::SawWave;
pub use table_set::SawTableSet;

pub type Float = f64;

/// Generate the tables described by the config and write them to the
/// configured output file.
///
/// Returns the generated table set, e.g. for reporting.
pub fn generate_file(config: &GeneratorConfig) -> Result<SawTableSet, TableError> {
    let tables = SawTableSet::generate(config)?;
    let bytes = tables.quantize()?;
    CEmitter::write_file(&config.output, &bytes)?;
    Ok(tables)
}
