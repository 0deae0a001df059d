//! Notification Reducer

use crate::actions::NotificationAction;
use crate::state::NotificationState;

pub fn reduce(mut state: NotificationState, action: &NotificationAction) -> NotificationState {
    match action {
        NotificationAction::Add(notification) => {
            state.push(notification.clone());
        }
        NotificationAction::Remove(id) => {
            if !state.remove(id) {
                log::trace!("Notification {} already gone", id);
            }
        }
        NotificationAction::Clear => {
            state.clear();
        }
    }
    state
}
