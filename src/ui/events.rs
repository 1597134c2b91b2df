use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::api::{ApiError, Category, Product};
use crate::mutation::MutationError;
use crate::view::TableIntent;

/// Everything the UI loop reacts to: terminal input plus results coming
/// back from the async side.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Startup product fetch finished. An error here is fatal for the
    /// table: the body shows an error banner instead.
    ProductsLoaded(Result<Vec<Product>, ApiError>),
    /// Startup category fetch finished. Failures have already degraded
    /// to an empty list by this point.
    CategoriesLoaded(Vec<Category>),
    EditDone(Result<TableIntent, MutationError>),
    CreateDone(Result<TableIntent, MutationError>),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It forwards key/resize events and emits a
    /// tick at `tick_rate`; it exits once the receiving side is gone.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                return;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                return;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => return,
                    },
                    Ok(false) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender handed to async tasks so their results arrive as events.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
