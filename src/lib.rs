#![doc = include_str!("../README.md")]

// Pipeline stages
pub mod composite;
pub mod edges;
pub mod pipeline;
pub mod pixelize;

// Buffers, parameters, errors
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;

// Tool plumbing
pub mod config;

mod padding;
mod parallel;

// --- High-level re-exports -------------------------------------------------

pub use crate::composite::composite;
pub use crate::diagnostics::ConversionReport;
pub use crate::edges::detect_edges;
pub use crate::error::{PixelArtError, Result};
pub use crate::params::PixelArtParams;
pub use crate::pipeline::{convert, convert_with_params, convert_with_report};
pub use crate::pixelize::pixelize;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{ImageRgbF32, ImageView, Mask};
    pub use crate::{convert, convert_with_params, PixelArtParams};
}
