//! MIDAS metadata extraction
//!
//! This module interprets the assembled BADC-CSV metadata through the closed
//! MIDAS label vocabulary, producing a two-level structure of global and
//! per-field metadata.
//!
//! ## Architecture
//!
//! - [`handlers`] - The [`LabelHandler`] capability and its per-label
//!   implementations
//! - [`registry`] - The closed label-to-handler lookup
//! - [`extractor`] - The extraction driver with batch unknown-label
//!   validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use midas_open_parser::app::services::{badc_csv, midas};
//!
//! # fn example() -> midas_open_parser::Result<()> {
//! let metadata = badc_csv::parse_metadata(std::path::Path::new("station.csv"))?;
//! let registry = midas::LabelRegistry::midas();
//! let structured = midas::extract(&metadata, &registry)?;
//!
//! println!("{} global labels", structured.global.len());
//! # Ok(())
//! # }
//! ```

pub mod extractor;
pub mod handlers;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::extract;
pub use handlers::LabelHandler;
pub use registry::LabelRegistry;
