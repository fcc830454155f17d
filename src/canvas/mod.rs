//! Terminal glyph graphics: pixel buffers, ANSI color codes, and the
//! half-block renderer that turns one into the other.
//!
//! ```text
//!    ┌──────────────┐      ┌────────────────┐      ┌─────────────────┐
//!    │  PixelGrid   │ ───▶ │  halfblock::   │ ───▶ │  styled lines   │
//!    │  (RGB, 2D)   │      │  render  ▀▀▀   │      │  (SGR + reset)  │
//!    └──────────────┘      └────────────────┘      └─────────────────┘
//! ```

pub mod ansi;
pub mod halfblock;
pub mod pixmap;

pub use ansi::{strip_ansi_codes, visible_width};
pub use pixmap::{PixelGrid, Rgb};
