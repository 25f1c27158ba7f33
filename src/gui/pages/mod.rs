// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App, render::CardList};

pub mod predictions;
pub mod props;

/// A tab. Pages are stateless; their data lives in the App's board slots.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw page-specific controls above the cards.
    fn draw_controls(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// Cards (or the notice) from the latest render pass.
    fn cards<'a>(&self, app: &'a App) -> &'a CardList;

    /// Export column names.
    fn headers(&self) -> &'static [&'static str];

    fn is_loading(&self, app: &App) -> bool;

    /// Re-run the render pass with the current view state.
    fn rebuild(&self, app: &mut App);
}
