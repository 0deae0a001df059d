//! Scroll-triggered reveal choreography
//!
//! A [`ScrollChoreographer`] finds every node matching a [`Selector`]
//! inside a [`PageNode`] document (or a sub-tree of it) and animates each
//! one from a hidden state (transparent, pushed down) to its resting state
//! once the node's top edge crosses a line at `start` of the viewport
//! height. Matched nodes are staggered by their index. Unless the reveal
//! runs `once`, scrolling back above the line plays the animation in
//! reverse, and re-entering plays it again.
//!
//! Every call to [`ScrollChoreographer::reveal`] returns a [`RevealHandle`];
//! dropping the handle releases all triggers of that call.

mod choreographer;
mod page;
mod selector;

pub use choreographer::{RevealHandle, RevealOptions, RevealStyle, ScrollChoreographer, Viewport};
pub use page::PageNode;
pub use selector::Selector;
