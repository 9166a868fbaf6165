//! Reducer for the trainer pane.

use crate::ui::mvi::Reducer;

use super::intent::GreetingIntent;
use super::state::GreetingState;

pub struct GreetingReducer;

impl Reducer for GreetingReducer {
    type State = GreetingState;
    type Intent = GreetingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut name = state.name;
        match intent {
            GreetingIntent::TypeChar(ch) => name.push(ch),
            GreetingIntent::Backspace => {
                name.pop();
            }
            GreetingIntent::Clear => name.clear(),
        }
        GreetingState { name }
    }
}
