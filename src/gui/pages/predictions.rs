// src/gui/pages/predictions.rs
use eframe::egui;

use crate::{
    config::{consts::MIN_MODEL_ACCURACY, options::PageKind},
    gui::app::App,
    render::{CardList, PredictionCard},
};

use super::Page;

pub struct PredictionsPage;
pub static PAGE: PredictionsPage = PredictionsPage;

impl Page for PredictionsPage {
    fn title(&self) -> &'static str { "Predictions" }
    fn kind(&self) -> PageKind { PageKind::Predictions }

    fn draw_controls(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.label(
            egui::RichText::new(format!(
                "Models with accuracy above {:.0}%, most likely first",
                MIN_MODEL_ACCURACY * 100.0
            ))
            .weak(),
        );
    }

    fn cards<'a>(&self, app: &'a App) -> &'a CardList { app.predictions.cards() }

    fn headers(&self) -> &'static [&'static str] { &PredictionCard::HEADERS }

    fn is_loading(&self, app: &App) -> bool { app.predictions.is_loading() }

    fn rebuild(&self, app: &mut App) {
        app.predictions.rebuild(());
    }
}
