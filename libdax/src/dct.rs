//! Type-II / type-III DCT over real blocks, computed with a complex FFT.
//!
//! Scaling follows the unnormalized convention:
//!
//! ```text
//! forward:  Y[k] = 2 * sum_n x[n] * cos(pi * (n + 0.5) * k / N)
//! inverse:  y[n] = (X[0] + 2 * sum_{k>0} X[k] * cos(pi * k * (n + 0.5) / N)) / (2N)
//! ```
//!
//! so `inverse(forward(x)) == x` up to floating-point error. Both directions
//! ride on a single size-N complex FFT via the even/odd reshuffle: the even
//! samples go in ascending order into the front half, the odd samples in
//! descending order into the back half, and a quarter-wave twiddle turns the
//! FFT output into DCT coefficients.

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::f64::consts::PI;
use std::sync::Arc;

/// Reusable DCT engine for a fixed block size. Plans and buffers are built
/// once; `forward`/`inverse` do no allocation.
pub struct BlockDct {
    n: usize,
    fft_forward: Arc<dyn Fft<f64>>,
    fft_inverse: Arc<dyn Fft<f64>>,
    /// e^(i * pi * k / 2N) for k in 0..N
    twiddle: Vec<Complex<f64>>,
    work: Vec<Complex<f64>>,
    scratch: Vec<Complex<f64>>,
}

impl BlockDct {
    pub fn new(block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be positive");

        let mut planner = FftPlanner::new();
        let fft_forward = planner.plan_fft_forward(block_size);
        let fft_inverse = planner.plan_fft_inverse(block_size);

        let twiddle = (0..block_size)
            .map(|k| {
                let angle = PI * k as f64 / (2.0 * block_size as f64);
                Complex::new(angle.cos(), angle.sin())
            })
            .collect();

        let scratch_len = fft_forward
            .get_inplace_scratch_len()
            .max(fft_inverse.get_inplace_scratch_len());

        BlockDct {
            n: block_size,
            fft_forward,
            fft_inverse,
            twiddle,
            work: vec![Complex::new(0.0, 0.0); block_size],
            scratch: vec![Complex::new(0.0, 0.0); scratch_len],
        }
    }

    pub fn block_size(&self) -> usize {
        self.n
    }

    /// Forward transform. `input` and `output` must both hold `N` samples.
    pub fn forward(&mut self, input: &[f64], output: &mut [f64]) {
        assert_eq!(input.len(), self.n);
        assert_eq!(output.len(), self.n);
        let n = self.n;

        // evens ascending into the front, odds descending into the back
        for i in 0..n.div_ceil(2) {
            self.work[i] = Complex::new(input[2 * i], 0.0);
        }
        for i in 0..n / 2 {
            self.work[n - 1 - i] = Complex::new(input[2 * i + 1], 0.0);
        }

        self.fft_forward
            .process_with_scratch(&mut self.work, &mut self.scratch);

        for k in 0..n {
            let v = self.work[k];
            let w = self.twiddle[k];
            // 2 * Re(e^(-i*pi*k/2N) * V[k])
            output[k] = 2.0 * (v.re * w.re + v.im * w.im);
        }
    }

    /// Inverse transform, including the `1/(2N)` normalization.
    pub fn inverse(&mut self, coeffs: &[f64], output: &mut [f64]) {
        assert_eq!(coeffs.len(), self.n);
        assert_eq!(output.len(), self.n);
        let n = self.n;

        self.work[0] = Complex::new(coeffs[0] * 0.5, 0.0);
        for k in 1..n {
            let re = coeffs[k] * 0.5;
            let im = -coeffs[n - k] * 0.5;
            let w = self.twiddle[k];
            self.work[k] = Complex::new(w.re * re - w.im * im, w.re * im + w.im * re);
        }

        self.fft_inverse
            .process_with_scratch(&mut self.work, &mut self.scratch);

        // undo the reshuffle; the FFT above is unnormalized, fold in 1/N here
        let scale = 1.0 / n as f64;
        for i in 0..n.div_ceil(2) {
            output[2 * i] = self.work[i].re * scale;
        }
        for i in 0..n / 2 {
            output[2 * i + 1] = self.work[n - 1 - i].re * scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_block_concentrates_in_dc() {
        let n = 8;
        let mut dct = BlockDct::new(n);
        let input = vec![1.0; n];
        let mut coeffs = vec![0.0; n];
        dct.forward(&input, &mut coeffs);

        // Y[0] = 2 * N for a unit constant
        assert!((coeffs[0] - 2.0 * n as f64).abs() < 1e-9);
        for &c in &coeffs[1..] {
            assert!(c.abs() < 1e-9);
        }
    }

    #[test]
    fn inverse_undoes_forward() {
        let n = 16;
        let mut dct = BlockDct::new(n);
        let input: Vec<f64> = (0..n).map(|i| ((i * 37 + 11) % 101) as f64 - 50.0).collect();
        let mut coeffs = vec![0.0; n];
        let mut recon = vec![0.0; n];
        dct.forward(&input, &mut coeffs);
        dct.inverse(&coeffs, &mut recon);
        for (a, b) in input.iter().zip(&recon) {
            assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn size_one_block_is_identity_up_to_scale() {
        let mut dct = BlockDct::new(1);
        let mut coeffs = vec![0.0];
        let mut recon = vec![0.0];
        dct.forward(&[3.5], &mut coeffs);
        assert!((coeffs[0] - 7.0).abs() < 1e-12);
        dct.inverse(&coeffs, &mut recon);
        assert!((recon[0] - 3.5).abs() < 1e-12);
    }
}
