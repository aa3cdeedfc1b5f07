use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Timestamp-derived identifier. The sequence suffix keeps ids minted in the same millisecond
/// apart.
pub(crate) fn timestamp_id(prefix: &str, now: DateTime<Utc>) -> String {
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed) % 10_000;
    format!("{prefix}-{}-{sequence:04}", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_minted_at_the_same_instant_differ() {
        let now = Utc::now();
        let first = timestamp_id("req", now);
        let second = timestamp_id("req", now);
        assert_ne!(first, second);
        assert!(first.starts_with(&format!("req-{}-", now.timestamp_millis())));
    }
}
