use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::CatalogClient;
use crate::config::Config;
use crate::mutation::{self, CreateForm, EditForm};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// The UI event loop: draw, wait for the next event, update state.
/// Network work runs on the tokio handle and reports back through the
/// event channel, so this thread never blocks on the catalog service.
pub fn run(config: Config, handle: Handle) -> anyhow::Result<()> {
    let client = CatalogClient::new(&config.api)?;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    spawn_initial_fetches(&handle, &client, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                InputAction::None => {}
                InputAction::SubmitEdit(form) => {
                    app.set_busy(true);
                    spawn_edit(&handle, &client, events.sender(), form);
                }
                InputAction::SubmitCreate(form) => {
                    app.set_busy(true);
                    spawn_create(&handle, &client, events.sender(), form);
                }
            },
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::ProductsLoaded(result)) => app.on_products_loaded(result),
            Ok(AppEvent::CategoriesLoaded(categories)) => app.on_categories_loaded(categories),
            Ok(AppEvent::EditDone(result)) => app.on_edit_done(result),
            Ok(AppEvent::CreateDone(result)) => app.on_create_done(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Products and categories load independently; the first table render
/// waits on the products result only.
fn spawn_initial_fetches(handle: &Handle, client: &CatalogClient, tx: Sender<AppEvent>) {
    let products_client = client.clone();
    let products_tx = tx.clone();
    handle.spawn(async move {
        let result = products_client.list_products().await;
        let _ = products_tx.send(AppEvent::ProductsLoaded(result));
    });

    let categories_client = client.clone();
    handle.spawn(async move {
        let categories = categories_client.list_categories().await;
        let _ = tx.send(AppEvent::CategoriesLoaded(categories));
    });
}

fn spawn_edit(handle: &Handle, client: &CatalogClient, tx: Sender<AppEvent>, form: EditForm) {
    let client = client.clone();
    handle.spawn(async move {
        let result = mutation::submit_edit(&client, form).await;
        let _ = tx.send(AppEvent::EditDone(result));
    });
}

fn spawn_create(handle: &Handle, client: &CatalogClient, tx: Sender<AppEvent>, form: CreateForm) {
    let client = client.clone();
    handle.spawn(async move {
        let result = mutation::submit_create(&client, form).await;
        let _ = tx.send(AppEvent::CreateDone(result));
    });
}
