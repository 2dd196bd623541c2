//! Time helpers
//!
//! All timestamps in the system are Unix milliseconds ([`shared::Timestamp`]).

use shared::Timestamp;

/// Current wall-clock time in Unix milliseconds
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

/// Whole minutes elapsed from `earlier` to `now`, clamped at zero
///
/// Client clock skew can place `earlier` in the future; that reads as a
/// zero-minute wait, never a negative one.
pub fn minutes_since(earlier: Timestamp, now: Timestamp) -> i64 {
    (now - earlier).max(0) / 60_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_since_floors() {
        let start = 1_000_000;
        assert_eq!(minutes_since(start, start), 0);
        assert_eq!(minutes_since(start, start + 59_999), 0);
        assert_eq!(minutes_since(start, start + 60_000), 1);
        assert_eq!(minutes_since(start, start + 150_000), 2);
    }

    #[test]
    fn test_minutes_since_clamps_negative() {
        assert_eq!(minutes_since(2_000_000, 1_000_000), 0);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2020-01-01 as a floor; catches unit mistakes (seconds vs millis)
        assert!(now_millis() > 1_577_836_800_000);
    }
}
