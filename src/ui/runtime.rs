use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::cli::Cli;
use crate::pokeapi::fetch_pokemon;
use crate::storage::KvStore;
use crate::ui::app::{App, FetchRequest};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(KvStore::default_path);
    let store = KvStore::open(store_path)?;
    let mut app = App::new(store);

    let runtime = Runtime::new()?;
    let client = reqwest::Client::new();

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(cli.tick_ms.max(1));
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(request) = handle_key(&mut app, key) {
                    spawn_fetch(&runtime, &client, events.sender(), request);
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::FetchDone { generation, result }) => {
                app.on_fetch_done(generation, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Spawn one fetch task. Its result comes back over the event channel,
/// tagged with the request's generation; anything spawned for a superseded
/// generation is discarded by the reducer, and results arriving after the
/// loop has exited are dropped with the channel.
fn spawn_fetch(
    runtime: &Runtime,
    client: &reqwest::Client,
    tx: Sender<AppEvent>,
    request: FetchRequest,
) {
    let client = client.clone();
    runtime.spawn(async move {
        let result = fetch_pokemon(&client, &request.name).await;
        let _ = tx.send(AppEvent::FetchDone {
            generation: request.generation,
            result,
        });
    });
}
