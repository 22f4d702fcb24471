//! Rewrites the trending-titles section of a markdown document in place.
//!
//! The section runs from [`START_MARKER`] to the first [`END_MARKER`] after
//! it. Everything between the two is discarded on each update, so a document
//! must not contain the end marker inside the section itself.

use chrono::{DateTime, Utc};
use pain_matrix_core::{PatchError, RenderedBlock};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const START_MARKER: &str = "## Today's Top 10 Trending Titles (Free Feed)";
pub const END_MARKER: &str = "---\n\n### About This Bot";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn region_pattern(start: &str, end: &str) -> Result<Regex, PatchError> {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(start),
        regex::escape(end)
    ))
    .map_err(|e| PatchError::InvalidMarkers {
        details: e.to_string(),
    })
}

/// Replaces the first `start`..`end` region of `document`.
///
/// Both marker lines are kept; what lies between them becomes `block`
/// followed by a `Last updated` line stamped with `timestamp`.
pub fn patch_region(
    document: &str,
    start: &str,
    end: &str,
    block: &RenderedBlock,
    timestamp: DateTime<Utc>,
) -> Result<String, PatchError> {
    let region = region_pattern(start, end)?;
    let found = region
        .find(document)
        .ok_or_else(|| PatchError::MarkersNotFound {
            start: start.to_string(),
            end: end.to_string(),
        })?;

    let replacement = format!(
        "{}\n\n{}\n*Last updated: {}*\n\n{}",
        start,
        block.as_str(),
        timestamp.format(TIMESTAMP_FORMAT),
        end
    );

    let mut patched =
        String::with_capacity(document.len() - found.as_str().len() + replacement.len());
    patched.push_str(&document[..found.start()]);
    patched.push_str(&replacement);
    patched.push_str(&document[found.end()..]);
    Ok(patched)
}

/// [`patch_region`] with the trending-titles markers.
pub fn patch(
    document: &str,
    block: &RenderedBlock,
    timestamp: DateTime<Utc>,
) -> Result<String, PatchError> {
    patch_region(document, START_MARKER, END_MARKER, block, timestamp)
}

pub fn try_update_document(
    path: &Path,
    block: &RenderedBlock,
    timestamp: DateTime<Utc>,
) -> Result<(), PatchError> {
    let display = path.display().to_string();
    let document = fs::read_to_string(path).map_err(|source| PatchError::Unreadable {
        path: display.clone(),
        source,
    })?;

    let patched = patch(&document, block, timestamp)?;

    fs::write(path, patched).map_err(|source| PatchError::Unwritable {
        path: display,
        source,
    })
}

/// Patches the document at `path` with the current time.
///
/// Returns `false` if the file could not be read or written, or has no
/// section to replace. The file is left untouched unless the section was found.
pub fn update_document(path: &Path, block: &RenderedBlock) -> bool {
    match try_update_document(path, block, Utc::now()) {
        Ok(()) => {
            info!("{} updated successfully!", path.display());
            true
        }
        Err(e) => {
            error!("Failed to update {}: {}", path.display(), e);
            false
        }
    }
}
