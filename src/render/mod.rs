// src/render/mod.rs
//
// Render targets. A render pass clears the target and pushes one card per
// record, so a target only ever holds the latest pass (or a notice).

mod cards;
mod html;

pub use cards::{Card, PredictionCard, PropCard, ThresholdRow};
pub use html::HtmlPage;

/// Anything a render pass can draw into.
pub trait Container {
    /// Drop all cards and any notice.
    fn clear(&mut self);

    fn push(&mut self, card: Card);

    /// Replace the whole content area with a single message.
    fn notice(&mut self, message: &str);
}

/// One render pass: clear, then push every card in order.
pub fn replace<I>(target: &mut dyn Container, cards: I)
where
    I: IntoIterator<Item = Card>,
{
    target.clear();
    for card in cards {
        target.push(card);
    }
}

/// In-memory target. The GUI draws from it; tests inspect it.
#[derive(Clone, Debug, Default)]
pub struct CardList {
    cards: Vec<Card>,
    notice: Option<String>,
}

impl CardList {
    pub fn new() -> Self { Self::default() }

    pub fn cards(&self) -> &[Card] { &self.cards }
    pub fn notice_text(&self) -> Option<&str> { self.notice.as_deref() }

    pub fn len(&self) -> usize { self.cards.len() }
    pub fn is_empty(&self) -> bool { self.cards.is_empty() }
}

impl Container for CardList {
    fn clear(&mut self) {
        self.cards.clear();
        self.notice = None;
    }

    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn notice(&mut self, message: &str) {
        self.cards.clear();
        self.notice = Some(s!(message));
    }
}
