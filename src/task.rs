//! Tasks, the things the board draws as bars

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::dates::{self, DaySpan, SpanError};
use crate::palette::ColorLabel;

/// A unique identifier of a task, across the board and its backing store.
///
/// The store assigns the permanent id the first time a task is saved. Until
/// then, a task carries a client-generated placeholder, which is enough for
/// the board to key its bars on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random placeholder TaskId
    pub fn placeholder() -> Self {
        Self { content: Uuid::new_v4().to_hyphenated().to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(Self { content })
    }
}

/// A task on the planning board: one bar, on one person's row.
///
/// Tasks are immutable here. New tasks and edits both go through a
/// [`TaskDraft`](crate::draft::TaskDraft), so that every task is validated
/// before it reaches the board or the store.
///
/// Field names serialize in camelCase, matching the JSON records the hosting
/// dashboard already keeps. Dates stay in their stored text form; they are
/// parsed in exactly one place, [`Task::span`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The task identifier (store-assigned, or a placeholder before the first save)
    id: TaskId,

    /// The displayed title
    title: String,
    /// The person the task is assigned to. Its bar lands on the row of the same name.
    person: String,

    /// The first day of the task, as stored (`YYYY-MM-DD`)
    start_date: String,
    /// The last day of the task, inclusive, as stored (`YYYY-MM-DD`)
    end_date: String,

    /// The display color of the bar. Missing in older records, hence the default.
    #[serde(default)]
    color: ColorLabel,
    /// Whether the task is done. Missing in older records, hence the default.
    #[serde(default)]
    completed: bool,
}


impl Task {
    /// Create a new Task instance, that may be in the store already
    pub fn new_with_parameters(id: TaskId, title: String, person: String,
                               start_date: String, end_date: String,
                               color: ColorLabel, completed: bool,
                            ) -> Self
    {
        Self {
            id,
            title,
            person,
            start_date,
            end_date,
            color,
            completed,
        }
    }

    pub fn id(&self) -> &TaskId       { &self.id         }
    pub fn title(&self) -> &str       { &self.title      }
    pub fn person(&self) -> &str      { &self.person     }
    pub fn start_date(&self) -> &str  { &self.start_date }
    pub fn end_date(&self) -> &str    { &self.end_date   }
    pub fn color(&self) -> ColorLabel { self.color       }
    pub fn completed(&self) -> bool   { self.completed   }

    /// The task's days, as a well-ordered span.
    ///
    /// This is the only place task dates get parsed. Records with mangled
    /// dates do come out of shared stores now and then; they surface here as
    /// a recoverable error, never as a panic.
    pub fn span(&self) -> Result<DaySpan, SpanError> {
        let start = dates::parse_day(&self.start_date)?;
        let end = dates::parse_day(&self.end_date)?;
        DaySpan::new(start, end)
    }

    /// A copy of this task under another id.
    /// Stores use this when they replace a placeholder id with a permanent one.
    pub fn with_id(&self, id: TaskId) -> Task {
        let mut task = self.clone();
        task.id = id;
        task
    }

    #[cfg(any(test, feature = "integration_tests"))]
    pub fn has_same_observable_content_as(&self, other: &Task) -> bool {
           self.id == other.id
        && self.title == other.title
        && self.person == other.person
        && self.start_date == other.start_date
        && self.end_date == other.end_date
        && self.color == other.color
        && self.completed == other.completed
    }
}
