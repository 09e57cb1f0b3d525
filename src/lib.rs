//! This crate provides the layout core of a Gantt-style planning board.
//!
//! The board shows one calendar month as a grid of day columns, one row per person
//! (staff members and clients alike), and one bar per task.
//!
//! Everything a rendering layer needs is computed here, from plain data the host
//! hands over on every render: the visible days in the [`window`] module, row
//! resolution in the [`rows`] module, bar placement in the [`layout`] module, and
//! form validation in the [`draft`] module.
//!
//! These pieces can be used stand-alone, or together through a [`PlanningBoard`](board::PlanningBoard). \
//! A `PlanningBoard` holds the month and form state the dashboard needs between renders,
//! and saves every submitted task into the [`TaskStore`](traits::TaskStore) it was built over. \
//! Persistence and the rendering itself stay in the host application.

pub mod traits;

pub mod dates;
pub mod window;
pub use window::MonthWindow;
mod task;
pub use task::{Task, TaskId};
pub mod palette;
pub use palette::ColorLabel;
pub mod layout;
pub use layout::{BarGeometry, BoardMetrics};
pub mod rows;
pub use rows::{Row, RowSet};
pub mod draft;
pub use draft::{DraftError, TaskDraft};
pub mod board;
pub use board::{BoardSnapshot, PlanningBoard, PositionedBar};

pub mod store;

pub mod utils;
