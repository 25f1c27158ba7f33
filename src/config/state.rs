// src/config/state.rs
use super::options::{AppOptions, BucketFilter};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Props page -> bucket dropdown
    pub prop_filter: BucketFilter,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 960,
            window_h: 720,
            current_page_index: 0,
            prop_filter: BucketFilter::All,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
