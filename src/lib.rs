// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod board;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod filter;
pub mod gui;
pub mod loader;
pub mod model;
pub mod render;

pub use board::{mount, present, Board, PredictionsBoard, PropsBoard};
pub use error::LoadError;
pub use loader::Source;
