//! The person rows of the board

use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::task::Task;

bitflags! {
    /// Which of the board's name lists a row was built from
    #[derive(Serialize, Deserialize)]
    pub struct RowOrigins: u8 {
        /// The name appears in the staff list
        const STAFF = 1;
        /// The name appears in the client list
        const CLIENT = 2;
        /// At least one task is assigned to the name
        const ASSIGNEE = 4;
    }
}

/// One horizontal row of the board, owned by one person
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    person: String,
    origins: RowOrigins,
}

impl Row {
    /// The name this row belongs to
    pub fn person(&self) -> &str {
        &self.person
    }

    /// Where this row's name came from
    pub fn origins(&self) -> RowOrigins {
        self.origins
    }
}

/// The ordered set of rows currently on the board.
///
/// Rows are the union of staff names, client names and task assignees,
/// de-duplicated and sorted. The sort is plain ordinal order on the names, so
/// that row order does not depend on the process locale. A task is drawn on
/// the row whose person matches its assignee exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    /// Build the row set for a render pass.
    ///
    /// The same name may appear in several inputs (a staff member with tasks,
    /// say). It still gets a single row, which remembers all of its origins.
    pub fn resolve(staff: &[String], clients: &[String], tasks: &[Task]) -> Self {
        let mut origins: BTreeMap<String, RowOrigins> = BTreeMap::new();

        for name in staff {
            *origins.entry(name.clone()).or_insert_with(RowOrigins::empty) |= RowOrigins::STAFF;
        }
        for name in clients {
            *origins.entry(name.clone()).or_insert_with(RowOrigins::empty) |= RowOrigins::CLIENT;
        }
        for task in tasks {
            *origins.entry(task.person().to_string()).or_insert_with(RowOrigins::empty) |= RowOrigins::ASSIGNEE;
        }

        // BTreeMap iterates its keys in ordinal order already
        let rows = origins.into_iter()
            .map(|(person, origins)| Row { person, origins })
            .collect();

        Self { rows }
    }

    /// The rows, in display order (top to bottom)
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row index for `person`, or `None` when no row carries that name.
    ///
    /// A task whose person has no row is simply not drawn; see
    /// [`PlanningBoard::snapshot_with_rows`](crate::board::PlanningBoard::snapshot_with_rows).
    pub fn index_of(&self, person: &str) -> Option<usize> {
        self.rows
            .binary_search_by(|row| row.person.as_str().cmp(person))
            .ok()
    }
}
