//! Marker pairs and span resolution for automated regions.
//!
//! Marker strings are opaque literals: no nesting or escaping logic. A
//! document is only considered managed when both markers are present, and a
//! marker literal occurring more than once is rejected outright instead of
//! silently taking the first match.

use crate::error::SyncError;

/// The literal delimiter strings bounding one automated region.
///
/// Built once per document and passed explicitly into the resolver and
/// merge engine; never stored as module state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: String,
    pub end: String,
}

impl MarkerPair {
    /// Markers for a single command's reference page. Embedding the command
    /// name makes collisions across commands structurally impossible.
    pub fn for_command(command: &str) -> Self {
        Self {
            start: format!("<!-- START AUTOMATED OUTPUT FOR {command} -->"),
            end: format!("<!-- END AUTOMATED OUTPUT FOR {command} -->"),
        }
    }

    /// Markers for the index page's command listing.
    pub fn command_list() -> Self {
        Self {
            start: "<!-- START AUTOMATED COMMAND LIST -->".to_string(),
            end: "<!-- END AUTOMATED COMMAND LIST -->".to_string(),
        }
    }
}

/// Byte span `[start, end)` of an automated region, covering the start
/// marker through the end marker inclusive. Boundaries always land exactly
/// on marker string boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpan {
    pub start: usize,
    pub end: usize,
}

/// Locate the automated region delimited by `markers` inside `text`.
///
/// Returns `Ok(None)` when either marker is absent (unmanaged document),
/// `Err` when a marker occurs more than once or the pair is out of order.
pub fn resolve(text: &str, markers: &MarkerPair) -> Result<Option<RegionSpan>, SyncError> {
    let Some(start_pos) = text.find(&markers.start) else {
        return Ok(None);
    };
    let Some(end_pos) = text.find(&markers.end) else {
        return Ok(None);
    };

    for marker in [&markers.start, &markers.end] {
        let count = text.matches(marker.as_str()).count();
        if count > 1 {
            return Err(SyncError::DuplicateMarker {
                marker: marker.clone(),
                count,
            });
        }
    }

    if end_pos < start_pos + markers.start.len() {
        return Err(SyncError::MarkerOrder);
    }

    Ok(Some(RegionSpan {
        start: start_pos,
        end: end_pos + markers.end.len(),
    }))
}
