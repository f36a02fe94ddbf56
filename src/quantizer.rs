//! Converts normalized samples to unsigned 8-bit values.
//!
//! A sample of -1.0 maps to 0, 0.0 to 128 (127.5 rounded to even) and 1.0 to
//! 255. Ties round to the nearest even value.

use super::Float;
use super::TableError;

use num::ToPrimitive;

pub struct Quantizer {
}

impl Quantizer {
    /// Map a single sample to the byte range, without range checking.
    ///
    /// ```
    /// use saw_tables::Quantizer;
    ///
    /// assert_eq!(Quantizer::scale(-1.0), 0.0);
    /// assert_eq!(Quantizer::scale(0.0), 128.0);
    /// assert_eq!(Quantizer::scale(1.0), 255.0);
    /// ```
    pub fn scale(sample: Float) -> Float {
        (255.0 * 0.5 * (sample + 1.0)).round_ties_even()
    }

    /// Quantize a single sample, returning None if it doesn't fit into a u8.
    pub fn quantize(sample: Float) -> Option<u8> {
        Quantizer::scale(sample).to_u8()
    }

    /// Quantize a whole table.
    ///
    /// `table_id` is only used for reporting a sample that falls out of
    /// range.
    ///
    /// ```
    /// use saw_tables::Quantizer;
    ///
    /// let bytes = Quantizer::quantize_table(0, &[-0.6, 0.0, 0.6]).unwrap();
    /// assert_eq!(bytes, vec![51, 128, 204]);
    /// ```
    pub fn quantize_table(table_id: usize, table: &[Float]) -> Result<Vec<u8>, TableError> {
        table.iter()
            .enumerate()
            .map(|(index, sample)| {
                Quantizer::quantize(*sample).ok_or(TableError::OutOfRange {
                    table: table_id,
                    index,
                    value: Quantizer::scale(*sample),
                })
            })
            .collect()
    }
}
