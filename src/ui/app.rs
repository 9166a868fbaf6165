use crate::pokeapi::{FetchError, Pokemon};
use crate::storage::{KvStore, PersistedField};
use crate::ui::greeting::{GreetingIntent, GreetingReducer, GreetingState, TRAINER_NAME_KEY};
use crate::ui::lookup::{LookupIntent, LookupReducer, LookupState};
use crate::ui::mvi::Reducer;

/// Which pane receives typed input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Trainer,
    Lookup,
}

/// A fetch the runtime should spawn, stamped with the generation that must
/// still be current for its result to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub name: String,
    pub generation: u64,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Trainer pane state (MVI pattern).
    greeting: GreetingState,
    /// Durable mirror of the trainer name (resource, managed outside MVI).
    trainer_field: PersistedField<String>,
    /// Lookup pane state (MVI pattern).
    lookup: LookupState,
    /// Text buffer of the lookup input line.
    lookup_input: String,
    /// Monotonic token stamped onto every submission. Only the completion
    /// carrying the latest token may commit a result to `lookup`.
    generation: u64,
}

impl App {
    pub fn new(store: KvStore) -> Self {
        let trainer_field = PersistedField::new(store, TRAINER_NAME_KEY, String::new);
        let greeting = GreetingState::with_name(trainer_field.get().clone());
        Self {
            should_quit: false,
            focus: Focus::Trainer,
            greeting,
            trainer_field,
            lookup: LookupState::default(),
            lookup_input: String::new(),
            generation: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Trainer => Focus::Lookup,
            Focus::Lookup => Focus::Trainer,
        };
    }

    pub fn greeting(&self) -> &GreetingState {
        &self.greeting
    }

    pub fn trainer_name(&self) -> &str {
        &self.greeting.name
    }

    pub fn lookup(&self) -> &LookupState {
        &self.lookup
    }

    pub fn lookup_input(&self) -> &str {
        &self.lookup_input
    }

    pub fn type_char(&mut self, ch: char) {
        match self.focus {
            Focus::Trainer => {
                dispatch_mvi!(self, greeting, GreetingReducer, GreetingIntent::TypeChar(ch));
                self.sync_trainer();
            }
            Focus::Lookup => self.lookup_input.push(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Trainer => {
                dispatch_mvi!(self, greeting, GreetingReducer, GreetingIntent::Backspace);
                self.sync_trainer();
            }
            Focus::Lookup => {
                self.lookup_input.pop();
            }
        }
    }

    pub fn clear_field(&mut self) {
        match self.focus {
            Focus::Trainer => {
                dispatch_mvi!(self, greeting, GreetingReducer, GreetingIntent::Clear);
                self.sync_trainer();
            }
            Focus::Lookup => self.lookup_input.clear(),
        }
    }

    /// Submit the lookup input.
    ///
    /// Bumps the generation unconditionally, so any in-flight fetch is
    /// invalidated even when the new input is empty and no fetch starts.
    pub fn submit_lookup(&mut self) -> Option<FetchRequest> {
        self.generation += 1;
        let generation = self.generation;
        let name = self.lookup_input.trim().to_string();
        dispatch_mvi!(
            self,
            lookup,
            LookupReducer,
            LookupIntent::Submit {
                name: name.clone(),
                generation,
            }
        );
        if name.is_empty() {
            None
        } else {
            Some(FetchRequest { name, generation })
        }
    }

    pub fn on_fetch_done(&mut self, generation: u64, result: Result<Pokemon, FetchError>) {
        let outcome = result.map_err(|err| err.user_message());
        dispatch_mvi!(
            self,
            lookup,
            LookupReducer,
            LookupIntent::Completed {
                generation,
                outcome,
            }
        );
    }

    pub fn on_tick(&mut self) {
        dispatch_mvi!(self, lookup, LookupReducer, LookupIntent::AnimationTick);
    }

    /// Mirror the reduced trainer name into the persisted field.
    fn sync_trainer(&mut self) {
        if self.trainer_field.get() != &self.greeting.name {
            self.trainer_field.set(self.greeting.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let store = KvStore::open(dir.path().join("store.json")).unwrap();
        App::new(store)
    }

    #[test]
    fn starts_focused_on_trainer_pane() {
        let dir = TempDir::new().unwrap();
        let app = app_in(&dir);
        assert_eq!(app.focus(), Focus::Trainer);
    }

    #[test]
    fn toggle_focus_cycles_panes() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.toggle_focus();
        assert_eq!(app.focus(), Focus::Lookup);
        app.toggle_focus();
        assert_eq!(app.focus(), Focus::Trainer);
    }

    #[test]
    fn typing_routes_to_focused_pane() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.type_char('A');
        assert_eq!(app.trainer_name(), "A");
        assert_eq!(app.lookup_input(), "");

        app.toggle_focus();
        app.type_char('m');
        app.type_char('e');
        app.type_char('w');
        assert_eq!(app.lookup_input(), "mew");
        assert_eq!(app.trainer_name(), "A");
    }

    #[test]
    fn submissions_carry_increasing_generations() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.toggle_focus();
        app.type_char('a');

        let first = app.submit_lookup().unwrap();
        let second = app.submit_lookup().unwrap();
        assert!(second.generation > first.generation);
    }

    #[test]
    fn empty_submission_starts_no_fetch() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.toggle_focus();
        assert_eq!(app.submit_lookup(), None);
        assert_eq!(*app.lookup(), LookupState::Idle);
    }
}
