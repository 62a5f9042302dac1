use chrono::Utc;
use std::cell::Cell;

/// Timestamp-based record ids: milliseconds since the epoch, rendered in
/// decimal.
///
/// A new id is always greater than the clock reading, the last id this
/// generator issued, and the largest id already stored in the target
/// collection. The last bound is what keeps ids unique when several
/// generators write to the same store within one millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Cell<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id strictly above `existing_max`.
    pub fn next_after(&self, existing_max: i64) -> String {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.get() + 1).max(existing_max + 1);
        self.last.set(id);
        id.to_string()
    }
}

/// Largest numeric id among `ids`; ids that are not decimal integers are
/// ignored, and an empty collection gives 0.
pub fn max_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> i64 {
    ids.into_iter()
        .filter_map(|id| id.parse::<i64>().ok())
        .max()
        .unwrap_or(0)
}
