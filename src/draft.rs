//! The task form: drafts, and how they become tasks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::{self, SpanError};
use crate::palette::ColorLabel;
use crate::task::{Task, TaskId};

/// Why a draft was refused.
///
/// All of these are shown on the form and fixed by the user. None of them is
/// fatal, and none of them reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("the task needs a title")]
    EmptyTitle,
    #[error("the task needs a person to be assigned to")]
    EmptyPerson,
    #[error("invalid calendar date: {0:?}")]
    InvalidDate(String),
    #[error("the task would start on {start}, after it ends on {end}")]
    DateOrderViolation { start: NaiveDate, end: NaiveDate },
}

/// What the task form edits: the raw field values, exactly as typed.
///
/// A draft only ever becomes a [`Task`] through [`validate`](TaskDraft::validate).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// The id of the task being edited, or `None` when creating a new one
    pub id: Option<TaskId>,
    pub title: String,
    pub person: String,
    /// The start day as typed (`YYYY-MM-DD`)
    pub start_date: String,
    /// The end day as typed (`YYYY-MM-DD`), inclusive
    pub end_date: String,
    pub color: ColorLabel,
    pub completed: bool,
}

impl TaskDraft {
    /// A draft prefilled with an existing task, for editing it
    pub fn for_task(task: &Task) -> Self {
        Self {
            id: Some(task.id().clone()),
            title: task.title().to_string(),
            person: task.person().to_string(),
            start_date: task.start_date().to_string(),
            end_date: task.end_date().to_string(),
            color: task.color(),
            completed: task.completed(),
        }
    }

    /// Check this draft and build the task it describes.
    ///
    /// On success, the task comes out normalized: title and person trimmed,
    /// dates re-formatted to the canonical `YYYY-MM-DD` form, and the id kept
    /// when editing or freshly minted (as a placeholder the store will
    /// replace) when creating. Re-validating the fields of a task that
    /// already passed validation succeeds and changes nothing.
    pub fn validate(&self) -> Result<Task, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let person = self.person.trim();
        if person.is_empty() {
            return Err(DraftError::EmptyPerson);
        }

        let start = dates::parse_day(&self.start_date).map_err(into_draft_error)?;
        let end = dates::parse_day(&self.end_date).map_err(into_draft_error)?;
        if start > end {
            return Err(DraftError::DateOrderViolation { start, end });
        }

        let id = match &self.id {
            Some(id) => id.clone(),
            None => TaskId::placeholder(),
        };

        Ok(Task::new_with_parameters(
            id,
            title.to_string(),
            person.to_string(),
            dates::format_day(start),
            dates::format_day(end),
            self.color,
            self.completed,
        ))
    }
}

fn into_draft_error(err: SpanError) -> DraftError {
    match err {
        SpanError::Unparseable(text) => DraftError::InvalidDate(text),
        SpanError::Reversed { start, end } => DraftError::DateOrderViolation { start, end },
    }
}
