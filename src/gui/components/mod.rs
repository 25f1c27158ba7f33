// src/gui/components/mod.rs
pub mod action_bar;
pub mod card_grid;
pub mod tabs;
