//! Scales a collection of tables to a common peak amplitude.
//!
//! All tables are scaled by the same factor, so the relative loudness
//! between tables with few and many harmonics is kept. The table with the
//! most extreme sample in the whole collection ends up touching the ceiling.

use super::Float;
use super::TableError;

use log::{debug, info};

pub struct Normalizer {
}

impl Normalizer {
    /// Return min and max values over all given tables.
    ///
    /// ```
    /// use saw_tables::Normalizer;
    ///
    /// let tables = vec![vec![0.1, -0.3], vec![0.2, 0.0]];
    /// assert_eq!(Normalizer::get_extremes(&tables), (-0.3, 0.2));
    /// ```
    pub fn get_extremes(tables: &[Vec<Float>]) -> (Float, Float) {
        let mut min = Float::INFINITY;
        let mut max = Float::NEG_INFINITY;
        for sample in tables.iter().flat_map(|t| t.iter()) {
            if *sample > max {
                max = *sample;
            }
            if *sample < min {
                min = *sample;
            }
        }
        (min, max)
    }

    /// Calculate the factor that puts the highest peak of all tables at the
    /// given ceiling.
    ///
    /// Fails if there is no non-zero sample to scale.
    pub fn calc_factor(tables: &[Vec<Float>], ceiling: Float) -> Result<Float, TableError> {
        let (min, max) = Normalizer::get_extremes(tables);
        let peak = if max > -min { max } else { -min };
        debug!("Extremes: min {}, max {}, peak {}", min, max, peak);
        if !(peak > 0.0) || !peak.is_finite() {
            return Err(TableError::SilentTables);
        }
        Ok(ceiling / peak)
    }

    /// Scale all tables in place and return the factor that was applied.
    ///
    /// ```
    /// use saw_tables::Normalizer;
    ///
    /// let mut tables = vec![vec![0.1, -0.3], vec![0.2, 0.0]];
    /// let factor = Normalizer::normalize(&mut tables, 0.6).unwrap();
    /// assert_eq!(factor, 2.0);
    /// assert_eq!(tables, vec![vec![0.2, -0.6], vec![0.4, 0.0]]);
    /// ```
    pub fn normalize(tables: &mut [Vec<Float>], ceiling: Float) -> Result<Float, TableError> {
        let factor = Normalizer::calc_factor(tables, ceiling)?;
        info!("Normalizing {} tables with factor {}", tables.len(), factor);
        for sample in tables.iter_mut().flat_map(|t| t.iter_mut()) {
            *sample *= factor;
        }
        Ok(factor)
    }
}
