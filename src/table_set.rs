//! A set of saw wave tables with increasing harmonic content.
//!
//! Table i of the set holds one cycle of a saw wave that was low pass
//! filtered down to the lowest i + 1 harmonics. The first table is close to
//! a sine wave, the last one is the closest to the unfiltered saw. A player
//! picks the table matching the pitch of the note, so that no harmonic
//! exceeds the Nyquist frequency.
//!
//! All tables are normalized together, see [`Normalizer`](crate::Normalizer).

use super::Float;
use super::{GeneratorConfig, LowpassFilter, Normalizer, Quantizer, SawWave, TableError};

use log::{debug, info};
use scoped_threadpool::Pool;

#[derive(Debug)]
pub struct SawTableSet {
    pub num_tables: usize,      // Number of tables, one per harmonic count
    pub num_samples: usize,     // Length of a single table
    pub factor: Float,          // Normalization factor applied to all tables
    pub table: Vec<Vec<Float>>, // Normalized tables, ordered by harmonic count
}

impl SawTableSet {
    /// Generate the normalized tables described by the config.
    ///
    /// ```
    /// use saw_tables::{GeneratorConfig, SawTableSet};
    ///
    /// let config = GeneratorConfig { harmonic_limit: 8, num_samples: 64, ..GeneratorConfig::default() };
    /// let tables = SawTableSet::generate(&config).unwrap();
    /// assert_eq!(tables.num_tables, 7);
    /// assert_eq!(tables.get_table(0).len(), 64);
    /// ```
    pub fn generate(config: &GeneratorConfig) -> Result<SawTableSet, TableError> {
        config.validate()?;
        let num_tables = config.num_tables();
        let num_samples = config.num_samples;
        info!("Generating {} saw tables with {} samples", num_tables, num_samples);

        let mut table = SawTableSet::filter_tables(config);
        let factor = Normalizer::normalize(&mut table, config.ceiling)?;
        Ok(SawTableSet{num_tables, num_samples, factor, table})
    }

    /// Create the filtered, not yet normalized tables.
    ///
    /// Every table is calculated as a separate job on a thread pool. Each
    /// job writes into its own slot, so the result is ordered by harmonic
    /// count no matter which job finishes first.
    pub fn filter_tables(config: &GeneratorConfig) -> Vec<Vec<Float>> {
        let reference = SawWave::reference(config.num_samples);
        let filter = LowpassFilter::new(&reference);
        let mut table = vec![Vec::new(); config.num_tables()];

        let mut pool = Pool::new(config.num_threads);
        pool.scoped(|scope| {
            for (i, slot) in table.iter_mut().enumerate() {
                let filter = &filter;
                scope.execute(move || {
                    *slot = filter.apply(i + 1);
                });
            }
        });
        table
    }

    /// Return the table with the given index.
    pub fn get_table(&self, table_id: usize) -> &Vec<Float> {
        &self.table[table_id]
    }

    /// Quantize all tables to bytes.
    pub fn quantize(&self) -> Result<Vec<Vec<u8>>, TableError> {
        self.table.iter()
            .enumerate()
            .map(|(i, t)| Quantizer::quantize_table(i, t))
            .collect()
    }

    /// Return the difference between the largest and the smallest quantized
    /// value of a table.
    pub fn peak_to_peak(&self, table_id: usize) -> Result<u8, TableError> {
        let bytes = Quantizer::quantize_table(table_id, self.get_table(table_id))?;
        let min = bytes.iter().min().copied().unwrap_or(0);
        let max = bytes.iter().max().copied().unwrap_or(0);
        debug!("Table {}: min {}, max {}", table_id, min, max);
        Ok(max - min)
    }
}
