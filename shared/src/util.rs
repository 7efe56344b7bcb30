use chrono::{DateTime, Utc};

/// Whole minutes from `from` to `to`, floored at zero
pub fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_minutes().max(0)
}
