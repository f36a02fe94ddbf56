//! The unfiltered reference waveform.

use super::Float;

use log::debug;

pub struct SawWave {
}

impl SawWave {
    /// Create one cycle of an ideal sawtooth with the given number of samples.
    ///
    /// The wave ramps linearly from -0.5 up to just below 0.5, where it
    /// would reset to -0.5 at the start of the next cycle.
    ///
    /// ```
    /// use saw_tables::SawWave;
    ///
    /// let saw = SawWave::reference(4);
    /// assert_eq!(saw, vec![-0.5, -0.25, 0.0, 0.25]);
    /// ```
    pub fn reference(num_samples: usize) -> Vec<Float> {
        debug!("Creating reference saw wave with {} samples", num_samples);
        let num_samples_f = num_samples as Float;
        (0..num_samples)
            .map(|i| -0.5 + i as Float / num_samples_f)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_covers_half_open_range() {
        let saw = SawWave::reference(256);
        assert_eq!(saw.len(), 256);
        assert_eq!(saw[0], -0.5);
        assert_eq!(saw[255], 0.5 - 1.0 / 256.0);
    }

    #[test]
    fn ramp_is_strictly_increasing() {
        let saw = SawWave::reference(256);
        for pair in saw.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn ramp_is_centered() {
        let saw = SawWave::reference(256);
        let sum: Float = saw.iter().sum();
        // Mean is -0.5 / num_samples, since the ramp stops short of 0.5
        assert_eq!(sum, -0.5);
    }
}
