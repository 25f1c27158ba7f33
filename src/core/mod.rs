// src/core/mod.rs

pub mod classify;
pub mod format;
pub mod html;
pub mod net;

pub use classify::{Bucket, Confidence};
