//! Stampcard engine crate.
//!
//! This crate owns the card model, scene recording, and CPU raster pieces
//! used by the CLI front end.

pub mod card;
pub mod codec;
pub mod session;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod pixmap;
pub mod raster;
pub mod scene;
pub mod text;
