//! Turns task spans into on-screen bar geometry

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::task::Task;
use crate::window::MonthWindow;

/// The fixed pixel measurements of the board grid.
///
/// These are passed around explicitly (there is no crate-wide configuration),
/// so two boards with different densities can live in the same process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMetrics {
    /// The width of one day column
    pub day_width_px: u32,
    /// The width of the name column on the left of the day grid
    pub label_column_width_px: u32,
}

impl Default for BoardMetrics {
    fn default() -> Self {
        Self {
            day_width_px: 40,
            label_column_width_px: 192,
        }
    }
}

/// Where a task bar goes, in pixels from the left edge of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_px: u32,
    pub width_px: u32,
}

/// Compute the bar for `task` inside `window`.
///
/// Returns `None` when there is nothing to draw: either the task lies
/// entirely outside the window, or its dates cannot be made sense of. The
/// latter is reported as a warning and the task skipped, since a broken
/// record must never take the whole board down.
///
/// A span reaching over the window's edges is clipped to them, so no bar
/// extends beyond the day grid.
pub fn place_task(task: &Task, window: &MonthWindow, metrics: &BoardMetrics) -> Option<BarGeometry> {
    let span = match task.span() {
        Err(err) => {
            log::warn!("Task {} ({:?}) cannot be placed: {}. Skipping it.", task.id(), task.title(), err);
            return None;
        },
        Ok(span) => span,
    };

    let shown = match span.clip_to(&window.span()) {
        None => {
            log::trace!("Task {} is outside of {}", task.id(), window.label());
            return None;
        },
        Some(shown) => shown,
    };

    // After clipping, the span starts inside the window: the offset cannot be
    // negative, and the inclusive duration is at least one day.
    let offset_days = dates::days_between(window.first(), shown.start()) as u32;
    let duration_days = shown.num_days() as u32;

    Some(BarGeometry {
        left_px: metrics.label_column_width_px + offset_days * metrics.day_width_px,
        width_px: duration_days * metrics.day_width_px,
    })
}
