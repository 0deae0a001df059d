/// Demo counter actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    /// Refused at zero by the counter middleware
    Decrement,
    /// Zero the counter, keeping click totals and min/max history
    Reset,
}
