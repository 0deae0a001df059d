//! # mythought
//!
//! Terminal showcase of the MyThought studio.
//!
//! State lives in a Redux-style [`store::Store`]: actions pass a middleware
//! chain (side effects, timers, the toast bridge), then a pure reducer, then
//! the subscribers (persistence). Animation is not store state; the
//! [`scene::Scene`] drives the marquee and the scroll reveal from time and
//! measurement alone.

pub mod actions;
pub mod content;
pub mod dispatcher;
pub mod middleware;
pub mod persistence;
pub mod reducers;
pub mod scene;
pub mod scheduler;
pub mod state;
pub mod store;
pub mod view_models;
pub mod views;
