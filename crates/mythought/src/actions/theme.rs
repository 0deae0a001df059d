use mythought_theme::ThemeMode;

/// Theme actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Apply the given mode, even if it is already active
    Set(ThemeMode),
    /// Pick uniformly among the modes other than the current one
    SetRandom,
}
