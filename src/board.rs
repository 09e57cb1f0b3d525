//! The planning board itself
//!
//! [`PlanningBoard`] ties the pieces together the way the dashboard uses
//! them. It remembers which month is on screen and which draft is being
//! edited, turns the host's data into one [`BoardSnapshot`] per render pass,
//! and hands validated tasks to the store.

use chrono::NaiveDate;

use crate::draft::{DraftError, TaskDraft};
use crate::layout::{self, BarGeometry, BoardMetrics};
use crate::rows::RowSet;
use crate::task::Task;
use crate::traits::{FullscreenSurface, TaskStore};
use crate::window::MonthWindow;

/// One task bar, fully placed: which row it sits on, and where it goes
#[derive(Clone, Debug)]
pub struct PositionedBar {
    row_index: usize,
    geometry: BarGeometry,
    task: Task,
}

impl PositionedBar {
    pub fn row_index(&self) -> usize      { self.row_index }
    pub fn geometry(&self) -> BarGeometry { self.geometry  }
    pub fn task(&self) -> &Task           { &self.task     }
}

/// Everything the rendering layer needs for one pass
#[derive(Clone, Debug)]
pub struct BoardSnapshot {
    window: MonthWindow,
    rows: RowSet,
    bars: Vec<PositionedBar>,
}

impl BoardSnapshot {
    /// The month this snapshot shows
    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    /// The rows of the board, top to bottom
    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    /// The placed bars, in the order their tasks were passed in
    pub fn bars(&self) -> &[PositionedBar] {
        &self.bars
    }

    #[cfg(any(test, feature = "integration_tests"))]
    pub fn has_same_observable_content_as(&self, other: &BoardSnapshot) -> bool {
        if self.window != other.window || self.rows != other.rows || self.bars.len() != other.bars.len() {
            return false;
        }
        self.bars.iter().zip(other.bars.iter()).all(|(mine, theirs)| {
            mine.row_index == theirs.row_index
                && mine.geometry == theirs.geometry
                && mine.task.has_same_observable_content_as(&theirs.task)
        })
    }
}

/// The controller of one planning board.
///
/// It is generic over the store its tasks are saved into, the same way the
/// hosting application is: tests run it against a
/// [`MemoryStore`](crate::store::MemoryStore), production hosts plug in their
/// own [`TaskStore`].
///
/// The board holds no task data of its own. The host passes its current
/// tasks and name lists into every [`snapshot`](Self::snapshot) call, and
/// nothing is cached in between, so a snapshot taken right after a save
/// already reflects the new state.
pub struct PlanningBoard<S: TaskStore> {
    store: S,
    window: MonthWindow,
    metrics: BoardMetrics,
    form: Option<TaskDraft>,
    fullscreen_surface: Option<Box<dyn FullscreenSurface>>,
    fullscreen: bool,
}

impl<S: TaskStore> PlanningBoard<S> {
    /// Create a board showing the month around `reference`, with the default
    /// grid measurements
    pub fn new(store: S, reference: NaiveDate) -> Self {
        Self::new_with_metrics(store, reference, BoardMetrics::default())
    }

    /// Create a board with custom grid measurements
    pub fn new_with_metrics(store: S, reference: NaiveDate, metrics: BoardMetrics) -> Self {
        Self {
            store,
            window: MonthWindow::containing(reference),
            metrics,
            form: None,
            fullscreen_surface: None,
            fullscreen: false,
        }
    }

    /// The store this board saves into
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The month currently shown
    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    /// The grid measurements this board lays bars out with
    pub fn metrics(&self) -> BoardMetrics {
        self.metrics
    }

    /// Show the month before the current one. Always possible.
    pub fn show_prev_month(&mut self) {
        self.window = self.window.prev();
        log::debug!("Showing {}", self.window.label());
    }

    /// Show the month after the current one. Always possible.
    pub fn show_next_month(&mut self) {
        self.window = self.window.next();
        log::debug!("Showing {}", self.window.label());
    }

    /// Open the task form: empty for a new task, prefilled when editing
    pub fn open_task_form(&mut self, existing: Option<&Task>) {
        self.form = Some(match existing {
            Some(task) => TaskDraft::for_task(task),
            None => TaskDraft::default(),
        });
    }

    /// The draft currently on the form, if it is open
    pub fn form(&self) -> Option<&TaskDraft> {
        self.form.as_ref()
    }

    /// Mutable access to the open draft, for the host to write field edits into
    pub fn form_mut(&mut self) -> Option<&mut TaskDraft> {
        self.form.as_mut()
    }

    /// Close the form without committing anything
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Commit a draft.
    ///
    /// On success, the normalized task goes to the store, the form closes,
    /// and the task is returned so the host can render it right away. On a
    /// validation error the form stays open with `draft` as its content, and
    /// the error is returned for the form to display.
    ///
    /// A store failure does not fail the submission. By that point the task
    /// is valid and the user is done with the form; retrying the write is
    /// the store's business, not the form's. The failure is logged and the
    /// form still closes.
    pub fn submit_form(&mut self, draft: TaskDraft) -> Result<Task, DraftError> {
        match draft.validate() {
            Err(err) => {
                self.form = Some(draft);
                Err(err)
            },
            Ok(task) => {
                self.form = None;
                if let Err(err) = self.store.save_task(task.clone()) {
                    log::warn!("Unable to save task {}: {}. It stays on the board for this session.", task.id(), err);
                }
                Ok(task)
            },
        }
    }

    /// Register the host handle that can actually switch fullscreen on and off
    pub fn attach_fullscreen_surface(&mut self, surface: Box<dyn FullscreenSurface>) {
        self.fullscreen_surface = Some(surface);
    }

    /// Whether the board currently wants to be fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Flip the fullscreen intent, and tell the host about it when it gave us
    /// a surface to talk to
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        match self.fullscreen_surface.as_mut() {
            None => log::debug!("No fullscreen surface attached, keeping the intent only"),
            Some(surface) => {
                if self.fullscreen {
                    surface.enter_fullscreen();
                } else {
                    surface.exit_fullscreen();
                }
            },
        }
    }

    /// Compute everything one render needs, in one pass.
    ///
    /// `tasks`, `staff` and `clients` are whatever the host holds at render
    /// time. Rows are resolved from all three (see [`RowSet::resolve`]), then
    /// every task is placed. Calling this twice with the same inputs yields
    /// the same board.
    pub fn snapshot(&self, tasks: &[Task], staff: &[String], clients: &[String]) -> BoardSnapshot {
        let rows = RowSet::resolve(staff, clients, tasks);
        self.snapshot_with_rows(tasks, rows)
    }

    /// Like [`snapshot`](Self::snapshot), but against a row set the host
    /// resolved itself, e.g. a board restricted to staff rows.
    ///
    /// Tasks whose person has no row in `rows` are not drawn. They are not
    /// lost either: the task data stays with the host, and the next snapshot
    /// whose row set contains the person shows them again.
    pub fn snapshot_with_rows(&self, tasks: &[Task], rows: RowSet) -> BoardSnapshot {
        let mut bars = Vec::new();

        for task in tasks {
            let geometry = match layout::place_task(task, &self.window, &self.metrics) {
                // Outside the month, or unrenderable (already reported)
                None => continue,
                Some(geometry) => geometry,
            };
            let row_index = match rows.index_of(task.person()) {
                None => {
                    log::warn!("Task {} is assigned to {:?}, who has no row on this board. Not drawing it.", task.id(), task.person());
                    continue;
                },
                Some(row_index) => row_index,
            };
            bars.push(PositionedBar {
                row_index,
                geometry,
                task: task.clone(),
            });
        }

        BoardSnapshot {
            window: self.window.clone(),
            rows,
            bars,
        }
    }
}
