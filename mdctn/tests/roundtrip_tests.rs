//! Integration tests for the mdctn crate.
//!
//! These tests exercise the public API end to end: configuration, the forward
//! and inverse transforms, and error reporting.

use mdctn::{
    imdct, mdct, DctEngine, DctError, DctType, Error, Mdct, Norm, TransformConfig,
};

const NORMS: [&str; 3] = ["backward", "ortho", "forward"];

/// Deterministic pseudo-random samples in `0..255`.
fn test_signal(len: usize, seed: u64) -> Vec<i64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 255) as i64
        })
        .collect()
}

fn assert_reconstructed(restored: &[f64], original: &[i64], context: &str) {
    assert_eq!(restored.len(), original.len(), "{context}");
    for (i, (r, o)) in restored.iter().zip(original).enumerate() {
        let o = *o as f64;
        assert!(
            (r - o).abs() <= 1e-9 * (1.0 + o.abs()),
            "{context}: sample {i}: {r} != {o}"
        );
    }
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_roundtrip_all_configurations() {
    for window in (4..=40).step_by(4) {
        let hop = window / 2;
        for dct_type in 1..=4u8 {
            for norm in NORMS {
                for orthogonalize in [true, false] {
                    let config =
                        TransformConfig::new(window, dct_type, norm, Some(orthogonalize)).unwrap();
                    let mdct_proc = Mdct::new(config).unwrap();

                    for blocks in [1, 2, 3, 5, 8] {
                        let len = blocks * hop;
                        let x = test_signal(len, (window * 131 + blocks) as u64);
                        let y = mdct_proc.forward(&x).unwrap();
                        assert_eq!(y.len(), len);
                        let z = mdct_proc.inverse(&y).unwrap();

                        let context = format!(
                            "N={window} type={dct_type} norm={norm} orth={orthogonalize} len={len}"
                        );
                        assert_reconstructed(&z, &x, &context);
                    }
                }
            }
        }
    }
}

#[test]
fn test_roundtrip_free_functions() {
    let config = TransformConfig::new(32, 4, "ortho", None).unwrap();
    let x = test_signal(32 * 10, 7);
    let y = mdct(&x, &config).unwrap();
    let z = imdct(&y, &config).unwrap();
    assert_reconstructed(&z, &x, "free functions");
}

#[test]
fn test_roundtrip_large_window_single_block() {
    // One block at N = 16384; plan memory stays linear in N.
    let config = TransformConfig::new(16384, 4, "ortho", None).unwrap();
    let x = test_signal(8192, 11);
    let y = mdct(&x, &config).unwrap();
    assert_eq!(y.len(), x.len());
    let z = imdct(&y, &config).unwrap();
    assert_reconstructed(&z, &x, "N=16384");
}

#[test]
fn test_minimal_length_signal() {
    // Exactly one hop: the boundary wrap takes both ends from the same block.
    for window in [4, 8, 12, 16, 64] {
        for dct_type in 1..=4u8 {
            let config = TransformConfig::new(window, dct_type, "ortho", None).unwrap();
            let x = test_signal(window / 2, window as u64);
            let y = mdct(&x, &config).unwrap();
            assert_eq!(y.len(), window / 2);
            let z = imdct(&y, &config).unwrap();
            assert_reconstructed(&z, &x, &format!("minimal N={window} type={dct_type}"));
        }
    }
}

#[test]
fn test_integer_and_float_inputs_agree() {
    let config = TransformConfig::new(8, 2, "forward", None).unwrap();
    let ints: Vec<i16> = vec![3, -1, 4, 1, -5, 9, 2, -6];
    let floats: Vec<f32> = ints.iter().map(|&v| v as f32).collect();
    let bytes: Vec<u8> = vec![3, 1, 4, 1, 5, 9, 2, 6];

    assert_eq!(mdct(&ints, &config).unwrap(), mdct(&floats, &config).unwrap());

    let y = mdct(&bytes, &config).unwrap();
    let z = imdct(&y, &config).unwrap();
    let expected: Vec<i64> = bytes.iter().map(|&b| b as i64).collect();
    assert_reconstructed(&z, &expected, "u8 input");
}

#[test]
fn test_inverse_accepts_integer_coefficients() {
    let config = TransformConfig::new(4, 4, "ortho", None).unwrap();
    let from_ints = imdct(&[1i32, -2, 3, 0], &config).unwrap();
    let from_floats = imdct(&[1.0f64, -2.0, 3.0, 0.0], &config).unwrap();
    assert_eq!(from_ints, from_floats);
}

// ============================================================================
// Concrete Value Tests
// ============================================================================

#[test]
fn test_single_block_example() {
    let config = TransformConfig::new(4, 4, "ortho", None).unwrap();
    let mdct_proc = Mdct::new(config).unwrap();
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

    let coeffs = mdct_proc.forward_block(&x[0..4]).unwrap();
    assert!((coeffs[0] - -2.501_040_55).abs() < 1e-8);
    assert!((coeffs[1] - -0.494_768_81).abs() < 1e-8);

    let block = mdct_proc.inverse_block(&coeffs).unwrap();
    for (b, e) in block.iter().zip([-0.5, 0.5, 2.5, 2.5]) {
        assert!((b - e).abs() < 1e-12);
    }

    let z = mdct_proc.inverse(&mdct_proc.forward(&x).unwrap()).unwrap();
    for (r, e) in z.iter().zip(x) {
        assert!((r - e).abs() < 1e-12);
    }
}

#[test]
fn test_zero_signal_gives_zero_coefficients() {
    let config = TransformConfig::default();
    let y = mdct(&[0.0f64; 48], &config).unwrap();
    assert!(y.iter().all(|&c| c == 0.0));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_rejects_malformed_window() {
    assert_eq!(
        TransformConfig::new(5, 4, "ortho", None),
        Err(Error::InvalidWindow(5))
    );
    assert_eq!(
        TransformConfig::new(0, 4, "ortho", None),
        Err(Error::InvalidWindow(0))
    );
}

#[test]
fn test_rejects_malformed_length() {
    let config = TransformConfig::new(8, 4, "ortho", None).unwrap();
    let x = [0.0f64; 5];
    assert_eq!(
        mdct(&x, &config),
        Err(Error::InvalidLength { length: 5, hop: 4 })
    );
    assert_eq!(
        imdct(&x, &config),
        Err(Error::InvalidLength { length: 5, hop: 4 })
    );
}

#[test]
fn test_rejects_empty_input() {
    let config = TransformConfig::default();
    let empty: [f64; 0] = [];
    assert!(matches!(mdct(&empty, &config), Err(Error::InvalidLength { .. })));
    assert!(matches!(imdct(&empty, &config), Err(Error::InvalidLength { .. })));
}

#[test]
fn test_rejects_dct_type_and_norm() {
    assert_eq!(
        TransformConfig::new(8, 0, "ortho", None),
        Err(Error::InvalidDctType(0))
    );
    assert_eq!(
        TransformConfig::new(8, 4, "none", None),
        Err(Error::InvalidNorm("none".to_string()))
    );
}

#[test]
fn test_rejects_unsupported_data_type() {
    let err = mdctn::Signal::from_le_bytes_named(&[0u8; 16], "complex128").unwrap_err();
    assert_eq!(err, Error::UnsupportedDataType("complex128".to_string()));
}

// ============================================================================
// Engine Contract Tests
// ============================================================================

/// Engine that passes rows through unchanged.
struct IdentityEngine(usize);

impl DctEngine for IdentityEngine {
    fn len(&self) -> usize {
        self.0
    }

    fn forward(&self, input: &[f64], output: &mut [f64]) -> Result<(), DctError> {
        output.copy_from_slice(input);
        Ok(())
    }

    fn inverse(&self, input: &[f64], output: &mut [f64]) -> Result<(), DctError> {
        output.copy_from_slice(input);
        Ok(())
    }
}

#[test]
fn test_engine_is_empty() {
    assert!(IdentityEngine(0).is_empty());
    assert!(!IdentityEngine(4).is_empty());
}

#[test]
fn test_reconstruction_independent_of_engine() {
    // Any invertible row transform cancels aliasing; the identity isolates the
    // boundary wrap, folding and overlap-add from the DCT.
    for window in [4, 8, 12, 20] {
        let config = TransformConfig::new(window, 4, "ortho", None).unwrap();
        let mdct_proc = Mdct::with_engine(config, IdentityEngine(window / 2)).unwrap();
        for blocks in 1..5 {
            let x = test_signal(blocks * window / 2, blocks as u64);
            let z = mdct_proc.inverse(&mdct_proc.forward(&x).unwrap()).unwrap();
            assert_reconstructed(&z, &x, &format!("identity N={window}"));
        }
    }
}

#[test]
fn test_identity_engine_exposes_fold() {
    let config = TransformConfig::new(8, 4, "ortho", None).unwrap();
    let mdct_proc = Mdct::with_engine(config, IdentityEngine(4)).unwrap();
    let block: Vec<f64> = (0..8).map(|i| i as f64).collect();
    // Halved fold of a=[0,1] b=[2,3] c=[4,5] d=[6,7].
    assert_eq!(
        mdct_proc.forward_block(&block).unwrap(),
        vec![-5.5, -5.5, -1.5, -0.5]
    );
}

#[test]
fn test_config_accessors_exposed() {
    let config = TransformConfig::new(24, 3, "backward", None).unwrap();
    assert_eq!(config.hop(), 12);
    assert_eq!(config.quarter(), 6);
    assert_eq!(config.dct_type(), DctType::III);
    assert_eq!(config.norm(), Norm::Backward);
    assert!(!config.orthogonalize());
}
