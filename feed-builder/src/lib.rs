//! Turns fetched posts into the trending-titles section of a document.
//!
//! The steps run in order: [`aggregate`] the per-board results, [`rank`]
//! them by score, [`render`] the markdown list and [`patch`] it into the
//! target document.

pub mod aggregate;
pub mod patch;
pub mod rank;
pub mod render;

pub use aggregate::aggregate;
pub use patch::{patch, patch_region, update_document, END_MARKER, START_MARKER};
pub use rank::rank;
pub use render::{render, EMPTY_PLACEHOLDER};
