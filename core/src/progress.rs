//! Upload progress samples.

/// Raw byte counters reported by the transport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSample {
    pub bytes_sent: u64,
    /// `0` when the total is unknown
    pub bytes_total: u64,
}

impl ProgressSample {
    pub fn new(bytes_sent: u64, bytes_total: u64) -> Self {
        Self { bytes_sent, bytes_total }
    }

    pub fn percentage(&self) -> u8 {
        percentage(*self)
    }

    /// Status line shown while the upload is running.
    pub fn status_message(&self) -> String {
        format!("⏳ Uploaded {} bytes of {}", self.bytes_sent, self.bytes_total)
    }
}

/// `round(100 * sent / total)` clamped to `0..=100`, or `0` for an unknown total.
pub fn percentage(sample: ProgressSample) -> u8 {
    if sample.bytes_total == 0 {
        return 0;
    }
    let sent = u128::from(sample.bytes_sent.min(sample.bytes_total));
    let total = u128::from(sample.bytes_total);
    // Half rounds up
    let rounded = (sent * 200 + total) / (total * 2);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_percentages() {
        assert_eq!(percentage(ProgressSample::new(0, 1000)), 0);
        assert_eq!(percentage(ProgressSample::new(250, 1000)), 25);
        assert_eq!(percentage(ProgressSample::new(1000, 1000)), 100);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(percentage(ProgressSample::new(1, 3)), 33);
        assert_eq!(percentage(ProgressSample::new(2, 3)), 67);
        assert_eq!(percentage(ProgressSample::new(1, 200)), 1);
        assert_eq!(percentage(ProgressSample::new(1, 201)), 0);
    }

    #[test]
    fn test_unknown_total_is_zero() {
        assert_eq!(percentage(ProgressSample::new(500, 0)), 0);
    }

    #[test]
    fn test_clamped_to_hundred() {
        assert_eq!(percentage(ProgressSample::new(5000, 1000)), 100);
        assert_eq!(percentage(ProgressSample::new(u64::MAX, u64::MAX)), 100);
    }

    #[test]
    fn test_monotonic_for_non_decreasing_samples() {
        let total = 7_919;
        let mut last = 0;
        for sent in (0..=total).step_by(13) {
            let pct = percentage(ProgressSample::new(sent, total));
            assert!(pct >= last);
            assert!(pct <= 100);
            last = pct;
        }
    }

    #[test]
    fn test_status_message() {
        let sample = ProgressSample::new(1024, 4096);
        assert_eq!(sample.status_message(), "⏳ Uploaded 1024 bytes of 4096");
        assert_eq!(sample.percentage(), 25);
    }
}
