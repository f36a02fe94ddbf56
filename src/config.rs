//! Settings for the table generator.
//!
//! The defaults are the values the firmware was built against: 59 tables
//! (harmonic limit 60) of 256 samples, scaled to a peak of 0.6 and written to
//! `tables/saw_tables.c`. A JSON file can override any subset of them.

use super::Float;
use super::TableError;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_HARMONIC_LIMIT: usize = 60;
pub const DEFAULT_NUM_SAMPLES: usize = 256;
pub const DEFAULT_CEILING: Float = 0.6;
pub const DEFAULT_OUTPUT: &str = "tables/saw_tables.c";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub harmonic_limit: usize, // Tables are generated for k = 1 .. harmonic_limit - 1
    pub num_samples: usize,    // Samples per table, one wave cycle
    pub ceiling: Float,        // Peak amplitude after normalization
    pub output: PathBuf,       // Destination of the generated source file
    pub num_threads: u32,      // Workers used for generating the tables
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            harmonic_limit: DEFAULT_HARMONIC_LIMIT,
            num_samples: DEFAULT_NUM_SAMPLES,
            ceiling: DEFAULT_CEILING,
            output: PathBuf::from(DEFAULT_OUTPUT),
            num_threads: 1,
        }
    }
}

impl GeneratorConfig {
    /// Read a config from a JSON file.
    ///
    /// Fields missing in the file keep their default values. The result is
    /// validated before it is returned.
    ///
    /// ``` no_run
    /// use saw_tables::GeneratorConfig;
    ///
    /// # fn main() -> Result<(), saw_tables::TableError> {
    /// let config = GeneratorConfig::from_file("saw_tables.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig, TableError> {
        let path = path.as_ref();
        info!("Reading config [{}]", path.display());
        let content = fs::read_to_string(path)?;
        GeneratorConfig::from_json(&content)
    }

    /// Parse a config from a JSON string.
    ///
    /// ```
    /// use saw_tables::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_json(r#"{"harmonic_limit": 8}"#).unwrap();
    /// assert_eq!(config.num_tables(), 7);
    /// assert_eq!(config.num_samples, 256);
    /// ```
    pub fn from_json(content: &str) -> Result<GeneratorConfig, TableError> {
        let config: GeneratorConfig = serde_json::from_str(content)?;
        config.validate()?;
        debug!("Using config {:?}", config);
        Ok(config)
    }

    /// Check that the settings describe a table set that can be built.
    ///
    /// The highest harmonic index must stay below half the table length, so
    /// the range of zeroed frequency bins is never empty.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.harmonic_limit < 2 {
            return Err(TableError::InvalidConfig(format!(
                "harmonic_limit must be at least 2, got {}", self.harmonic_limit)));
        }
        if self.num_samples == 0 {
            return Err(TableError::InvalidConfig("num_samples must not be 0".to_string()));
        }
        if self.harmonic_limit - 1 >= self.num_samples / 2 {
            return Err(TableError::InvalidConfig(format!(
                "harmonic_limit {} too large for {} samples per table",
                self.harmonic_limit, self.num_samples)));
        }
        if !self.ceiling.is_finite() || self.ceiling <= 0.0 || self.ceiling > 1.0 {
            return Err(TableError::InvalidConfig(format!(
                "ceiling must be in (0.0, 1.0], got {}", self.ceiling)));
        }
        if self.num_threads == 0 {
            return Err(TableError::InvalidConfig("num_threads must not be 0".to_string()));
        }
        Ok(())
    }

    /// Number of tables in the generated array.
    pub fn num_tables(&self) -> usize {
        self.harmonic_limit - 1
    }

    /// Highest valid table index, exported as MAX_TABLE.
    pub fn max_table(&self) -> usize {
        self.harmonic_limit - 2
    }
}
