//! Reducer for the lookup pane.

use crate::ui::mvi::Reducer;

use super::intent::LookupIntent;
use super::state::LookupState;

pub struct LookupReducer;

impl Reducer for LookupReducer {
    type State = LookupState;
    type Intent = LookupIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LookupIntent::Submit { name, generation } => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    LookupState::Idle
                } else {
                    LookupState::Pending {
                        name,
                        generation,
                        animation_tick: 0,
                    }
                }
            }

            LookupIntent::Completed {
                generation,
                outcome,
            } => match state {
                LookupState::Pending {
                    generation: current,
                    ..
                } if current == generation => match outcome {
                    Ok(pokemon) => LookupState::Resolved { pokemon },
                    Err(message) => LookupState::Rejected { message },
                },
                // Stale fetch or the pane already moved on; discard.
                other => other,
            },

            LookupIntent::AnimationTick => match state {
                LookupState::Pending {
                    name,
                    generation,
                    animation_tick,
                } => LookupState::Pending {
                    name,
                    generation,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokeapi::Pokemon;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            id: 25,
            name: name.to_string(),
            height: 4,
            weight: 60,
            types: Vec::new(),
            stats: Vec::new(),
        }
    }

    fn submit(state: LookupState, name: &str, generation: u64) -> LookupState {
        LookupReducer::reduce(
            state,
            LookupIntent::Submit {
                name: name.to_string(),
                generation,
            },
        )
    }

    #[test]
    fn empty_submit_resets_to_idle() {
        let state = LookupState::Resolved {
            pokemon: pokemon("pikachu"),
        };
        assert_eq!(submit(state, "", 2), LookupState::Idle);
    }

    #[test]
    fn blank_submit_resets_to_idle() {
        assert_eq!(submit(LookupState::Idle, "   ", 2), LookupState::Idle);
    }

    #[test]
    fn submit_enters_pending_with_generation() {
        let state = submit(LookupState::Idle, "pikachu", 1);
        assert_eq!(
            state,
            LookupState::Pending {
                name: "pikachu".into(),
                generation: 1,
                animation_tick: 0,
            }
        );
    }

    #[test]
    fn matching_completion_resolves() {
        let state = submit(LookupState::Idle, "pikachu", 1);
        let state = LookupReducer::reduce(
            state,
            LookupIntent::Completed {
                generation: 1,
                outcome: Ok(pokemon("pikachu")),
            },
        );
        assert_eq!(
            state,
            LookupState::Resolved {
                pokemon: pokemon("pikachu")
            }
        );
    }

    #[test]
    fn matching_failure_rejects() {
        let state = submit(LookupState::Idle, "pikachu", 1);
        let state = LookupReducer::reduce(
            state,
            LookupIntent::Completed {
                generation: 1,
                outcome: Err("No pokémon named 'pikachu'".into()),
            },
        );
        assert_eq!(state.error_message(), Some("No pokémon named 'pikachu'"));
    }

    #[test]
    fn stale_completion_is_ignored_after_resubmit() {
        // Fetch A (gen 1) is in flight, user submits B (gen 2).
        let state = submit(LookupState::Idle, "slowpoke", 1);
        let state = submit(state, "pikachu", 2);

        // A's slow response lands after B was submitted: must not clobber.
        let state = LookupReducer::reduce(
            state,
            LookupIntent::Completed {
                generation: 1,
                outcome: Ok(pokemon("slowpoke")),
            },
        );
        assert_eq!(state.pending_generation(), Some(2));

        // B's response is applied.
        let state = LookupReducer::reduce(
            state,
            LookupIntent::Completed {
                generation: 2,
                outcome: Ok(pokemon("pikachu")),
            },
        );
        assert_eq!(
            state,
            LookupState::Resolved {
                pokemon: pokemon("pikachu")
            }
        );
    }

    #[test]
    fn completion_after_reset_to_idle_is_discarded() {
        let state = submit(LookupState::Idle, "pikachu", 1);
        let state = submit(state, "", 2);
        let state = LookupReducer::reduce(
            state,
            LookupIntent::Completed {
                generation: 1,
                outcome: Ok(pokemon("pikachu")),
            },
        );
        assert_eq!(state, LookupState::Idle);
    }

    #[test]
    fn completion_does_not_disturb_resolved_state() {
        let state = LookupState::Resolved {
            pokemon: pokemon("pikachu"),
        };
        let next = LookupReducer::reduce(
            state.clone(),
            LookupIntent::Completed {
                generation: 9,
                outcome: Err("late".into()),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn animation_tick_only_advances_pending() {
        let state = submit(LookupState::Idle, "pikachu", 1);
        let state = LookupReducer::reduce(state, LookupIntent::AnimationTick);
        assert_eq!(
            state,
            LookupState::Pending {
                name: "pikachu".into(),
                generation: 1,
                animation_tick: 1,
            }
        );

        let idle = LookupReducer::reduce(LookupState::Idle, LookupIntent::AnimationTick);
        assert_eq!(idle, LookupState::Idle);
    }
}
