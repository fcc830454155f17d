//! # Glyphfetch
//!
//! A terminal system banner: gathers host facts (OS, kernel, uptime, memory,
//! CPU, GPU, shell, package count) and renders them beside a stylized logo
//! built from large block text or an image downsampled to colored half-block
//! glyphs. Assumes a truecolor ANSI terminal with UTF-8 output.

pub mod banner;
pub mod canvas;
pub mod errors;
pub mod hostinfo;
pub mod layout;
pub mod logo;

pub use errors::{FetchError, Result};
