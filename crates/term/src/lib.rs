//! Terminal presentation - framebuffer, renderer, and pure scene views.
//!
//! Only [`renderer`] touches the terminal. Everything else builds content
//! into a [`FrameBuffer`], so the whole presentation layer is testable
//! without a tty.

pub mod fb;
pub mod pager;
pub mod renderer;
pub mod screens;
pub mod sheet;

pub use fb::{Cell, FrameBuffer, Tone};
pub use pager::ArchivePager;
pub use renderer::TerminalRenderer;
