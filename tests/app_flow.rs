use pocketdex::pokeapi::{FetchError, Pokemon};
use pocketdex::storage::KvStore;
use pocketdex::ui::app::App;
use pocketdex::ui::lookup::LookupState;
use tempfile::TempDir;

fn open(dir: &TempDir) -> KvStore {
    KvStore::open(dir.path().join("store.json")).unwrap()
}

fn pokemon(id: u32, name: &str) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        height: 0,
        weight: 0,
        types: Vec::new(),
        stats: Vec::new(),
    }
}

#[test]
fn trainer_name_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut app = App::new(open(&dir));
        for ch in "Ash".chars() {
            app.type_char(ch);
        }
    }

    let app = App::new(open(&dir));
    assert_eq!(app.trainer_name(), "Ash");
}

#[test]
fn backspace_edits_are_persisted_too() {
    let dir = TempDir::new().unwrap();

    {
        let mut app = App::new(open(&dir));
        for ch in "Ashx".chars() {
            app.type_char(ch);
        }
        app.backspace();
    }

    let app = App::new(open(&dir));
    assert_eq!(app.trainer_name(), "Ash");
}

#[test]
fn fetch_done_with_current_generation_resolves_the_pane() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(open(&dir));
    app.toggle_focus();
    for ch in "mew".chars() {
        app.type_char(ch);
    }

    let request = app.submit_lookup().expect("non-empty submit starts a fetch");
    assert!(app.lookup().is_pending());

    app.on_fetch_done(request.generation, Ok(pokemon(151, "mew")));
    assert_eq!(
        *app.lookup(),
        LookupState::Resolved {
            pokemon: pokemon(151, "mew")
        }
    );
}

#[test]
fn fetch_error_surfaces_in_the_rejected_pane() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(open(&dir));
    app.toggle_focus();
    app.type_char('x');

    let request = app.submit_lookup().unwrap();
    app.on_fetch_done(
        request.generation,
        Err(FetchError::NotFound { name: "x".into() }),
    );
    assert_eq!(
        app.lookup().error_message(),
        Some("No pokémon named 'x'")
    );
}

#[test]
fn resubmitting_invalidates_the_previous_fetch() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(open(&dir));
    app.toggle_focus();

    app.type_char('a');
    let first = app.submit_lookup().unwrap();

    app.clear_field();
    app.type_char('b');
    let second = app.submit_lookup().unwrap();

    // First fetch resolves late; it must not be applied.
    app.on_fetch_done(first.generation, Ok(pokemon(1, "a")));
    assert_eq!(app.lookup().pending_generation(), Some(second.generation));

    app.on_fetch_done(second.generation, Ok(pokemon(2, "b")));
    assert_eq!(
        *app.lookup(),
        LookupState::Resolved {
            pokemon: pokemon(2, "b")
        }
    );
}
