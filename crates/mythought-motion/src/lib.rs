//! # mythought-motion
//!
//! Two self-contained animation utilities for ratatui applications.
//!
//! ## Design Principles
//!
//! Both utilities are driven purely by measurement and time. They never
//! read the system clock themselves: the orchestrating application passes
//! the current [`std::time::Instant`] into every call, which keeps them
//! deterministic under test.
//!
//! - [`logo_loop`]: a seamless infinite marquee. The item list is rendered
//!   three times back to back, one copy is measured, and the strip is
//!   translated by exactly one copy per loop so the restart is invisible.
//! - [`reveal`]: scroll choreography. Marked nodes of a [`reveal::PageNode`]
//!   document fade and slide in, staggered by index, as they cross a
//!   viewport threshold, and fade out again on scroll-back unless `once`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mythought_motion::logo_loop::{LogoItem, LogoLoop, LogoLoopConfig, LogoLoopState};
//!
//! let mut marquee = LogoLoopState::new(items, LogoLoopConfig::default(), now);
//!
//! // every frame
//! marquee.on_layout(marquee.measure(), now);
//! frame.render_widget(LogoLoop::new(&marquee, now), area);
//! ```

pub mod logo_loop;
pub mod reveal;

pub use logo_loop::{LogoItem, LogoLoop, LogoLoopConfig, LogoLoopState, LoopDirection};
pub use reveal::{
    PageNode, RevealHandle, RevealOptions, RevealStyle, ScrollChoreographer, Selector, Viewport,
};
