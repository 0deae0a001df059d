//! Counter Reducer

use crate::actions::CounterAction;
use crate::state::CounterState;

pub fn reduce(mut state: CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => {
            let Some(new) = state.value.checked_add(1) else {
                return state;
            };
            state.value = new;
            state.stats.total_clicks = state.stats.total_clicks.saturating_add(1);
            state.stats.max_value = state.stats.max_value.max(new);
            state.stats.current_value = new;
        }
        CounterAction::Decrement => {
            if !state.can_decrement() {
                return state;
            }
            let new = state.value - 1;
            state.value = new;
            state.stats.total_clicks = state.stats.total_clicks.saturating_add(1);
            state.stats.min_value = state.stats.min_value.min(new);
            state.stats.current_value = new;
        }
        CounterAction::Reset => {
            state.value = 0;
            state.stats.current_value = 0;
        }
    }
    state
}
