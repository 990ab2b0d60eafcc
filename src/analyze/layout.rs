//! Layout resolution: page dimensions, container width, grid likelihood,
//! and recurring spacing magnitudes.

use crate::markup;
use crate::parsers;
use crate::schema::layout::{Layout, PageDimensions};
use crate::signals::RawStyleSignals;

pub const DEFAULT_PAGE_WIDTH: f64 = 1920.0;
pub const DEFAULT_PAGE_HEIGHT: f64 = 1080.0;

/// A container only counts as "contained" when it is narrower than the
/// page by more than this many pixels (unless it is the sole candidate).
const CONTAINER_WIDTH_TOLERANCE: f64 = 50.0;

/// More grid-pattern elements than this means a grid system is likely.
const GRID_ELEMENT_THRESHOLD: usize = 5;

const MAX_SPACING_UNITS: usize = 5;

/// Resolves the layout section from the signal bundle.
pub fn resolve(signals: &RawStyleSignals) -> Layout {
    let width = signals.page_width.unwrap_or(DEFAULT_PAGE_WIDTH);
    let height = signals.page_height.unwrap_or(DEFAULT_PAGE_HEIGHT);

    Layout {
        page_dimensions: PageDimensions {
            width: Some(width),
            height: Some(height),
        },
        container_width: resolve_container_width(&signals.container_widths, width),
        has_grid_system: signals.grid_element_count > GRID_ELEMENT_THRESHOLD,
        common_spacing_units: rank_spacing(&signals.spacing_samples),
    }
}

/// The widest candidate wins when it differs meaningfully from the page
/// width; a sole candidate is recorded unconditionally.
fn resolve_container_width(candidates: &[f64], page_width: f64) -> Option<f64> {
    let widest = candidates
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, width| match acc {
            Some(best) if best >= width => Some(best),
            _ => Some(width),
        })?;

    if widest > 0.0 && (widest - page_width).abs() > CONTAINER_WIDTH_TOLERANCE {
        Some(widest)
    } else if candidates.len() == 1 {
        Some(candidates[0])
    } else {
        None
    }
}

/// Keeps non-zero pixel samples, ranks them by frequency (stable, so
/// ties resolve to first observation), and returns the top five.
fn rank_spacing(samples: &[String]) -> Vec<String> {
    let valid = samples
        .iter()
        .map(String::as_str)
        .filter(|sample| parsers::px_value(sample).is_some_and(|v| v > 0.0));

    let mut counts = markup::count_first_seen(valid);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_SPACING_UNITS);
    counts.into_iter().map(|(value, _)| value).collect()
}
