//! Follow-up action queue
//!
//! Middleware never re-enters the store. Anything it wants to happen next
//! (a milestone notification, a toast request, an expired timer's removal)
//! is pushed onto this queue, and `Store::dispatch` drains it on the same
//! thread, oldest first, before returning. Each queued action starts again at
//! the head of the middleware chain.

use crate::actions::Action;
use std::sync::mpsc::{self, Receiver, Sender};

/// Producer half of the store's follow-up queue
#[derive(Clone)]
pub struct Dispatcher {
    queue: Sender<Action>,
}

impl Dispatcher {
    fn new(queue: Sender<Action>) -> Self {
        Self { queue }
    }

    /// A dispatcher together with the receiver the store drains
    pub fn queue() -> (Self, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }

    /// Enqueue `action` behind everything queued so far
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.queue.send(action) {
            log::error!("Dispatcher: follow-up action dropped, store is gone: {}", e);
        }
    }
}
