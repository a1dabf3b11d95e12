/// Largest absolute value in `samples`, 0.0 for an empty slice.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |acc, v| acc.max(v.abs()))
}

/// Scales `samples` so the peak magnitude becomes exactly 1.0 and returns the
/// peak measured before scaling. An all-zero buffer is left untouched.
pub fn normalize(samples: &mut [f64]) -> f64 {
    let max_val = peak(samples);
    if max_val > 0.0 {
        for v in samples.iter_mut() {
            *v /= max_val;
        }
    }
    max_val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_to_unit_peak() {
        let mut buf = vec![0.25, -0.5, 0.1, 0.0];
        let before = normalize(&mut buf);
        assert_eq!(before, 0.5);
        assert_eq!(buf, vec![0.5, -1.0, 0.2, 0.0]);
        assert_eq!(peak(&buf), 1.0);
    }

    #[test]
    fn boosts_quiet_signals() {
        let mut buf: Vec<f64> = (0..512).map(|i| 0.003 * (i as f64 * 0.05).sin()).collect();
        normalize(&mut buf);
        assert_eq!(peak(&buf), 1.0);
    }

    #[test]
    fn all_zero_is_left_alone() {
        let mut buf = vec![0.0; 512];
        assert_eq!(normalize(&mut buf), 0.0);
        assert!(buf.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_buffer_is_fine() {
        let mut buf: Vec<f64> = Vec::new();
        assert_eq!(normalize(&mut buf), 0.0);
    }
}
