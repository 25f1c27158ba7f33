// src/gui/slot.rs
//
// Per-board GUI state. The single load runs on a worker thread that sends
// its outcome over a channel and only then asks for a repaint, so the
// frame it wakes always finds the result. The frame loop runs the
// continuation (first render or fallback notice) on the UI thread. Filter
// events re-render synchronously.

use std::{
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use eframe::egui;
use serde::de::DeserializeOwned;

use crate::{
    board::{self, Board},
    config::consts::LOAD_FAILED,
    error::LoadError,
    loader::{self, Source},
    render::{CardList, Container},
};

type Outcome<R> = Result<Vec<R>, LoadError>;

pub struct BoardSlot<B: Board> {
    source: Source,
    pending: Option<Receiver<Outcome<B::Record>>>,
    board: Option<B>,
    cards: CardList,
}

/// What `poll` saw this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polled {
    Idle,
    Loaded(usize),
    Failed,
}

impl<B: Board> BoardSlot<B> {
    pub fn new(source: Source) -> Self {
        Self { source, pending: None, board: None, cards: CardList::new() }
    }

    pub fn source(&self) -> &Source { &self.source }
    pub fn cards(&self) -> &CardList { &self.cards }
    pub fn is_loading(&self) -> bool { self.pending.is_some() }

    /// Kick off the one load for this board.
    pub fn start(&mut self, ctx: &egui::Context) {
        if self.pending.is_some() || self.board.is_some() {
            return;
        }
        let ctx = ctx.clone();
        logd!("Load: spawning worker for {}", self.source);
        self.pending = Some(spawn_load(self.source.clone(), move || ctx.request_repaint()));
    }

    pub fn poll(&mut self, view: B::View) -> Polled {
        let Some(rx) = &self.pending else { return Polled::Idle };
        let received = rx.try_recv();

        match received {
            Err(TryRecvError::Empty) => Polled::Idle,
            Ok(outcome) => {
                self.pending = None;
                self.board = board::present::<B>(outcome, view, &mut self.cards);
                match &self.board {
                    Some(b) => Polled::Loaded(b.records().len()),
                    None => Polled::Failed,
                }
            }
            // Sender dropped without a result: the worker panicked.
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                loge!("Load: worker for {} panicked", self.source);
                self.cards.notice(LOAD_FAILED);
                Polled::Failed
            }
        }
    }

    /// Re-run the render pass for a new view. No-op until loaded.
    pub fn rebuild(&mut self, view: B::View) {
        if let Some(b) = &self.board {
            b.render(view, &mut self.cards);
        }
    }
}

/// Runs its callback when dropped, including during a panic unwind.
struct OnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

/// Load `source` on a worker thread. `notify` runs once the outcome is in
/// the channel (or the sender is gone), never before.
fn spawn_load<R, F>(source: Source, notify: F) -> Receiver<Outcome<R>>
where
    R: DeserializeOwned + Send + 'static,
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _notify = OnDrop(Some(notify));
        // Declared after the guard so it drops first.
        let tx = tx;
        let outcome = loader::load::<R>(&source);
        // The UI may already be gone; nothing to report then.
        let _ = tx.send(outcome);
    });
    rx
}
