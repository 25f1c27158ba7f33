// src/board/mod.rs
//
// A board owns the records of one file and knows how to turn a view state
// into cards. `mount` is the whole page lifecycle: one load, then either
// the first render pass or the fallback notice.

mod predictions;
mod props;

pub use predictions::PredictionsBoard;
pub use props::PropsBoard;

use serde::de::DeserializeOwned;

use crate::{
    config::{consts::LOAD_FAILED, options::PageKind},
    error::LoadError,
    loader::{self, Source},
    render::{self, Card, Container},
};

pub trait Board: Sized + 'static {
    type Record: DeserializeOwned + Send + 'static;
    /// UI state the view depends on (filter selection etc.).
    type View: Copy + Default + std::fmt::Debug;

    const KIND: PageKind;
    const TITLE: &'static str;

    fn from_records(records: Vec<Self::Record>) -> Self;
    fn records(&self) -> &[Self::Record];

    /// Cards for `view`, in display order.
    fn cards(&self, view: Self::View) -> Vec<Card>;

    fn headers(&self) -> &'static [&'static str];

    /// One render pass into `target`.
    fn render(&self, view: Self::View, target: &mut dyn Container) {
        let cards = self.cards(view);
        logd!("Render: {} view={:?} cards={}/{}", Self::TITLE, view, cards.len(), self.records().len());
        render::replace(target, cards);
    }
}

/// Continuation of a load: render on success, fallback notice on failure.
pub fn present<B: Board>(
    outcome: Result<Vec<B::Record>, LoadError>,
    view: B::View,
    target: &mut dyn Container,
) -> Option<B> {
    match outcome {
        Ok(records) => {
            let board = B::from_records(records);
            board.render(view, target);
            Some(board)
        }
        Err(e) => {
            loge!("Load: {} failed: {}", B::TITLE, e);
            target.notice(LOAD_FAILED);
            None
        }
    }
}

/// Load `source` once and show it in `target`.
pub fn mount<B: Board>(source: &Source, view: B::View, target: &mut dyn Container) -> Option<B> {
    present::<B>(loader::load(source), view, target)
}
