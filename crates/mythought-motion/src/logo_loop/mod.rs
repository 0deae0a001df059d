//! Seamless infinite marquee
//!
//! The strip renders its items three times back to back. Once layout has
//! settled the strip is measured and divided by three to get the unit
//! extent `U`; the animation then translates the strip linearly across
//! exactly `U` cells and restarts. Because the content one unit further is
//! identical, the restart is invisible.
//!
//! Loop period is `U / speed`. A speed of zero (commonly the hover speed)
//! freezes the strip in place instead of dividing by zero.

mod animation;
mod state;
mod widget;

pub use animation::LoopAnimation;
pub use state::{LogoItem, LogoLoopConfig, LogoLoopState, LoopDirection, COPIES};
pub use widget::LogoLoop;
