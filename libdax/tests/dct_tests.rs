#[cfg(test)]
mod dct_tests {
    use libdax_audio::BlockDct;
    use std::f64::consts::PI;

    // Direct O(N^2) evaluation of the transform definitions, used as the
    // ground truth for the FFT-based implementation.
    fn naive_forward(input: &[f64]) -> Vec<f64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                2.0 * input
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| x * (PI * (i as f64 + 0.5) * k as f64 / n as f64).cos())
                    .sum::<f64>()
            })
            .collect()
    }

    fn naive_inverse(coeffs: &[f64]) -> Vec<f64> {
        let n = coeffs.len();
        (0..n)
            .map(|i| {
                let mut acc = coeffs[0];
                for (k, &c) in coeffs.iter().enumerate().skip(1) {
                    acc += 2.0 * c * (PI * k as f64 * (i as f64 + 0.5) / n as f64).cos();
                }
                acc / (2.0 * n as f64)
            })
            .collect()
    }

    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                100.0 * (0.031 * t).sin() + 40.0 * (0.173 * t).cos() + ((i * 7919) % 23) as f64
            })
            .collect()
    }

    #[test]
    fn test_forward_matches_direct_evaluation() {
        for n in [1usize, 2, 3, 5, 8, 16, 64, 100] {
            let input = test_signal(n);
            let mut dct = BlockDct::new(n);
            let mut coeffs = vec![0.0; n];
            dct.forward(&input, &mut coeffs);

            let expected = naive_forward(&input);
            for (k, (a, b)) in coeffs.iter().zip(&expected).enumerate() {
                assert!((a - b).abs() < 1e-6, "N={} k={}: {} vs {}", n, k, a, b);
            }
        }
    }

    #[test]
    fn test_inverse_matches_direct_evaluation() {
        for n in [1usize, 2, 3, 5, 8, 16, 64, 100] {
            let coeffs = test_signal(n);
            let mut dct = BlockDct::new(n);
            let mut output = vec![0.0; n];
            dct.inverse(&coeffs, &mut output);

            let expected = naive_inverse(&coeffs);
            for (i, (a, b)) in output.iter().zip(&expected).enumerate() {
                assert!((a - b).abs() < 1e-6, "N={} i={}: {} vs {}", n, i, a, b);
            }
        }
    }

    #[test]
    fn test_round_trip_is_identity() {
        for n in [2usize, 7, 32, 255, 1024] {
            let input = test_signal(n);
            let mut dct = BlockDct::new(n);
            let mut coeffs = vec![0.0; n];
            let mut recon = vec![0.0; n];
            dct.forward(&input, &mut coeffs);
            dct.inverse(&coeffs, &mut recon);

            for (i, (a, b)) in input.iter().zip(&recon).enumerate() {
                assert!((a - b).abs() < 1e-7, "N={} i={}: {} vs {}", n, i, a, b);
            }
        }
    }

    #[test]
    fn test_pure_cosine_maps_to_single_bin() {
        let n = 64;
        let k0 = 5;
        let amp = 30.0;
        let input: Vec<f64> = (0..n)
            .map(|i| amp * (PI * (i as f64 + 0.5) * k0 as f64 / n as f64).cos())
            .collect();

        let mut dct = BlockDct::new(n);
        let mut coeffs = vec![0.0; n];
        dct.forward(&input, &mut coeffs);

        // 2 * sum(cos^2) = N, so the bin reads amp * N
        assert!((coeffs[k0] - amp * n as f64).abs() < 1e-8);
        for (k, &c) in coeffs.iter().enumerate() {
            if k != k0 {
                assert!(c.abs() < 1e-8, "leakage at bin {}: {}", k, c);
            }
        }
    }

    #[test]
    fn test_engine_is_reusable_across_blocks() {
        let n = 32;
        let mut dct = BlockDct::new(n);
        let mut coeffs = vec![0.0; n];
        let mut recon = vec![0.0; n];

        for round in 0..4 {
            let input: Vec<f64> = (0..n).map(|i| ((i + round * 13) % 17) as f64 - 8.0).collect();
            dct.forward(&input, &mut coeffs);
            dct.inverse(&coeffs, &mut recon);
            for (a, b) in input.iter().zip(&recon) {
                assert!((a - b).abs() < 1e-9);
            }
        }
    }
}
