// src/gui/pages/props.rs
use eframe::egui;

use crate::{
    config::options::{BucketFilter, PageKind},
    gui::app::App,
    render::{CardList, PropCard},
};

use super::Page;

pub struct PropsPage;
pub static PAGE: PropsPage = PropsPage;

impl Page for PropsPage {
    fn title(&self) -> &'static str { "Prop Analysis" }
    fn kind(&self) -> PageKind { PageKind::Props }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        let before = app.state.gui.prop_filter;
        let mut filter = before;

        ui.horizontal(|ui| {
            ui.label("Probability:");
            for f in BucketFilter::ALL {
                ui.selectable_value(&mut filter, f, f.label());
            }
        });

        if filter != before {
            logf!("UI: Prop filter {} → {}", before, filter);
            app.state.gui.prop_filter = filter;
            self.rebuild(app);
            let n = app.props.cards().len();
            app.status(format!("Showing {n} prop(s) ({filter})"));
        }
    }

    fn cards<'a>(&self, app: &'a App) -> &'a CardList { app.props.cards() }

    fn headers(&self) -> &'static [&'static str] { &PropCard::HEADERS }

    fn is_loading(&self, app: &App) -> bool { app.props.is_loading() }

    fn rebuild(&self, app: &mut App) {
        let filter = app.state.gui.prop_filter;
        app.props.rebuild(filter);
    }
}
