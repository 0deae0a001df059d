//! Toast Reducer
//!
//! `Request` is resolved by the toast middleware into `Show`; only `Show`
//! and `Dismiss` change state.

use crate::actions::ToastAction;
use crate::state::ToastState;

pub fn reduce(mut state: ToastState, action: &ToastAction) -> ToastState {
    match action {
        ToastAction::Show(toast) => state.show(toast.clone()),
        ToastAction::Dismiss(id) => state.dismiss(*id),
        ToastAction::Request { .. } => {}
    }
    state
}
