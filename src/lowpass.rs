//! Brick-wall low pass filter working in the frequency domain.
//!
//! The filter transforms a single wave cycle with an FFT, zeroes all
//! frequency bins above the requested harmonic (and their mirrored negative
//! frequency counterparts), and transforms the result back. There is no
//! windowing or tapering, so the filtered waves show the ringing of the
//! Gibbs phenomenon next to the sharp edge of the saw wave.

use super::Float;

use log::{debug, trace};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;
use rustfft::{Fft, FftPlanner};

use std::sync::Arc;

pub type Harmonic = Complex<Float>;

pub struct LowpassFilter {
    num_samples: usize,
    spectrum: Vec<Harmonic>,     // Spectrum of the reference wave, calculated once
    inverse: Arc<dyn Fft<Float>>,
}

impl LowpassFilter {
    /// Create a filter for the given reference wave.
    ///
    /// The spectrum of the reference is calculated here, so that every call
    /// to `apply` only needs to run the inverse transform.
    ///
    /// ```
    /// use saw_tables::{LowpassFilter, SawWave};
    ///
    /// let filter = LowpassFilter::new(&SawWave::reference(256));
    /// let smooth = filter.apply(1);
    /// assert_eq!(smooth.len(), 256);
    /// ```
    pub fn new(reference: &[Float]) -> LowpassFilter {
        let num_samples = reference.len();
        let mut planner = FftPlanner::new();
        let spectrum = LowpassFilter::calc_spectrum(&mut planner, reference);
        let inverse = planner.plan_fft_inverse(num_samples);
        debug!("New lowpass filter for {} samples", num_samples);
        LowpassFilter{num_samples, spectrum, inverse}
    }

    /// Number of samples in a single wave cycle.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Calculate the frequency spectrum of a wave.
    ///
    /// Returns the unnormalized complex FFT of the samples, with the same
    /// length as the input. Bin 0 holds the DC offset, bin i and bin
    /// (len - i) hold the positive and negative frequency of harmonic i.
    ///
    /// ```
    /// use saw_tables::LowpassFilter;
    ///
    /// let spectrum = LowpassFilter::spectrum(&[1.0, 1.0, 1.0, 1.0]);
    /// assert_eq!(spectrum[0].re, 4.0);
    /// ```
    pub fn spectrum(samples: &[Float]) -> Vec<Harmonic> {
        let mut planner = FftPlanner::new();
        LowpassFilter::calc_spectrum(&mut planner, samples)
    }

    fn calc_spectrum(planner: &mut FftPlanner<Float>, samples: &[Float]) -> Vec<Harmonic> {
        let fft = planner.plan_fft_forward(samples.len());
        let mut buffer: Vec<Harmonic> = samples.iter().map(|s| Complex::new(*s, 0.0)).collect();
        fft.process(&mut buffer);
        buffer
    }

    /// Filter the reference wave, keeping the DC offset and the lowest
    /// `num_harmonics` harmonics.
    ///
    /// All bins i with `num_harmonics + 1 <= i <= len - 1 - num_harmonics`
    /// are zeroed. The imaginary part of the result is numerically zero for
    /// a real input and is dropped.
    ///
    /// The number of harmonics should stay below half the table length. For
    /// larger values the zeroed range is empty and the reference is returned
    /// unchanged.
    pub fn apply(&self, num_harmonics: usize) -> Vec<Float> {
        let num_samples = self.num_samples;
        let mut buffer = self.spectrum.clone();
        let first = num_harmonics + 1;
        let last = num_samples.saturating_sub(num_harmonics);
        trace!("Harmonics {}: zeroing bins {}..{}", num_harmonics, first, last);
        for bin in first..last {
            buffer[bin] = Complex::zero();
        }
        self.inverse.process(&mut buffer);

        // The inverse FFT isn't normalized
        let scale = num_samples as Float;
        buffer.iter().map(|b| b.re / scale).collect()
    }

    /// Return the indices of all bins whose magnitude exceeds the tolerance.
    ///
    /// ```
    /// use saw_tables::LowpassFilter;
    ///
    /// let spectrum = LowpassFilter::spectrum(&[1.0, 1.0, 1.0, 1.0]);
    /// assert_eq!(LowpassFilter::retained_bins(&spectrum, 1e-9), vec![0]);
    /// ```
    pub fn retained_bins(spectrum: &[Harmonic], tolerance: Float) -> Vec<usize> {
        spectrum.iter()
            .enumerate()
            .filter(|(_, h)| h.norm() > tolerance)
            .map(|(i, _)| i)
            .collect()
    }
}
