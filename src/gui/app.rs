// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    board::{Board, PredictionsBoard, PropsBoard},
    config::{options::PageKind, state::AppState},
};

use super::{
    pages::Page,
    router,
    slot::{BoardSlot, Polled},
};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Prop Board",
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // one slot per board; each loads exactly once
    pub props: BoardSlot<PropsBoard>,
    pub predictions: BoardSlot<PredictionsBoard>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let mut props = BoardSlot::new(state.options.sources.props.clone());
        let mut predictions = BoardSlot::new(state.options.sources.predictions.clone());
        props.start(ctx);
        predictions.start(ctx);

        let kind = router::all_pages()[state.gui.current_page_index].kind();
        let out_path_text = state.options.export.out_path(kind).to_string_lossy().into_owned();

        logf!(
            "Init: props={} predictions={} page={:?}",
            props.source(),
            predictions.source(),
            kind
        );

        Self {
            state,
            props,
            predictions,
            out_path_text,
            out_path_dirty: false,
            status: s!("Loading…"),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Run the continuation of any load that finished since the last frame.
    fn poll_loads(&mut self) {
        let filter = self.state.gui.prop_filter;
        let polled = [
            (PropsBoard::TITLE, self.props.poll(filter)),
            (PredictionsBoard::TITLE, self.predictions.poll(())),
        ];
        for (title, p) in polled {
            match p {
                Polled::Idle => {}
                Polled::Loaded(n) => self.status(format!("{title}: loaded {n} record(s)")),
                Polled::Failed => self.status(format!("{title}: load failed")),
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw_controls(ui, self);

            ui.separator();

            crate::gui::components::action_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::card_grid::draw(ui, self);
        });
    }
}
