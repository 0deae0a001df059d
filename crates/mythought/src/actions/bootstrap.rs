/// Bootstrap actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Store is assembled and restored state is in place
    Start,
}
