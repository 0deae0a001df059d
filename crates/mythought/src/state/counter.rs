//! Demo counter state

/// Aggregates kept alongside the counter
///
/// `min_value` starts at 0 and is only ever lowered, so it reports 0 even if
/// the counter never went below where it started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterStats {
    /// Increments and decrements that changed the counter
    pub total_clicks: u64,
    pub max_value: i64,
    pub min_value: i64,
    pub current_value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
    pub stats: CounterStats,
}

impl CounterState {
    /// Decrementing is refused at or below zero
    pub fn can_decrement(&self) -> bool {
        self.value > 0
    }
}
