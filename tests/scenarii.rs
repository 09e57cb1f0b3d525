//! Multiple scenarios that are performed to check the board lays tasks out correctly

use chrono::NaiveDate;

use wall_planner::ColorLabel;
use wall_planner::Task;
use wall_planner::TaskId;

/// Where a task's bar is expected to land
pub enum ExpectedPlacement {
    /// The bar shows up on `person`'s row, at these pixel coordinates
    Visible { person: &'static str, left_px: u32, width_px: u32 },
    /// The task produces no bar this month
    Hidden,
}

pub struct TaskScenario {
    pub task: Task,
    pub expected: ExpectedPlacement,
}

/// A whole board to lay out, and what must come out of it.
///
/// Every scenario runs with the default grid metrics (40px days after a
/// 192px name column).
pub struct BoardScenario {
    pub name: &'static str,
    /// Any day inside the month the board should show
    pub reference: NaiveDate,
    pub staff: Vec<String>,
    pub clients: Vec<String>,
    pub scenarii: Vec<TaskScenario>,
    /// The people expected to own a row, in display order
    pub expected_rows: Vec<&'static str>,
}

impl BoardScenario {
    pub fn tasks(&self) -> Vec<Task> {
        self.scenarii.iter().map(|scenario| scenario.task.clone()).collect()
    }
}

fn task(id: &str, title: &str, person: &str, start_date: &str, end_date: &str) -> Task {
    Task::new_with_parameters(
        TaskId::from(id),
        title.to_string(),
        person.to_string(),
        start_date.to_string(),
        end_date.to_string(),
        ColorLabel::Sky,
        false,
    )
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// A regular May 2024 board:
/// * staff: Alice, Bob; clients: Contoso
/// * Alice   │.........██████...................│  10th to 12th
/// * Bob     │███...............................│  1st
/// * Contoso │...................█████████████.│  20th to 31st
pub fn scenarii_basic() -> BoardScenario {
    BoardScenario {
        name: "basic",
        reference: NaiveDate::from_ymd(2024, 5, 15),
        staff: names(&["Alice", "Bob"]),
        clients: names(&["Contoso"]),
        scenarii: vec![
            TaskScenario {
                task: task("task-a", "Draft the brief", "Alice", "2024-05-10", "2024-05-12"),
                expected: ExpectedPlacement::Visible { person: "Alice", left_px: 552, width_px: 120 },
            },
            TaskScenario {
                task: task("task-b", "Kickoff", "Bob", "2024-05-01", "2024-05-01"),
                expected: ExpectedPlacement::Visible { person: "Bob", left_px: 192, width_px: 40 },
            },
            TaskScenario {
                task: task("task-c", "Review round", "Contoso", "2024-05-20", "2024-05-31"),
                expected: ExpectedPlacement::Visible { person: "Contoso", left_px: 192 + 19 * 40, width_px: 12 * 40 },
            },
        ],
        expected_rows: vec!["Alice", "Bob", "Contoso"],
    }
}

/// Tasks reaching over the edges of May 2024 get clipped to it:
/// * "Carry-over" runs April 28th to May 3rd, only its May days are drawn
/// * "Handover" runs May 30th to June 4th, only its May days are drawn
pub fn scenarii_clipped() -> BoardScenario {
    BoardScenario {
        name: "clipped",
        reference: NaiveDate::from_ymd(2024, 5, 1),
        staff: names(&["Alice", "Bob"]),
        clients: Vec::new(),
        scenarii: vec![
            TaskScenario {
                task: task("task-a", "Carry-over", "Alice", "2024-04-28", "2024-05-03"),
                expected: ExpectedPlacement::Visible { person: "Alice", left_px: 192, width_px: 120 },
            },
            TaskScenario {
                task: task("task-b", "Handover", "Bob", "2024-05-30", "2024-06-04"),
                expected: ExpectedPlacement::Visible { person: "Bob", left_px: 192 + 29 * 40, width_px: 2 * 40 },
            },
        ],
        expected_rows: vec!["Alice", "Bob"],
    }
}

/// Tasks from other months are not drawn at all, but their assignees still
/// own a row: row resolution does not depend on the visible month.
pub fn scenarii_other_months() -> BoardScenario {
    BoardScenario {
        name: "other months",
        reference: NaiveDate::from_ymd(2024, 5, 31),
        staff: Vec::new(),
        clients: Vec::new(),
        scenarii: vec![
            TaskScenario {
                task: task("task-a", "Last month", "Alice", "2024-04-20", "2024-04-25"),
                expected: ExpectedPlacement::Hidden,
            },
            TaskScenario {
                task: task("task-b", "Next quarter", "Bob", "2024-08-01", "2024-08-15"),
                expected: ExpectedPlacement::Hidden,
            },
            TaskScenario {
                task: task("task-c", "Still here", "Claire", "2024-05-06", "2024-05-08"),
                expected: ExpectedPlacement::Visible { person: "Claire", left_px: 192 + 5 * 40, width_px: 3 * 40 },
            },
        ],
        expected_rows: vec!["Alice", "Bob", "Claire"],
    }
}

/// Records with mangled dates (they do happen in shared stores) must not
/// take the board down: their bars are skipped, the rest is laid out as usual.
pub fn scenarii_broken_records() -> BoardScenario {
    BoardScenario {
        name: "broken records",
        reference: NaiveDate::from_ymd(2024, 5, 15),
        staff: names(&["Alice"]),
        clients: Vec::new(),
        scenarii: vec![
            TaskScenario {
                task: task("task-a", "No dates yet", "Alice", "", ""),
                expected: ExpectedPlacement::Hidden,
            },
            TaskScenario {
                task: task("task-b", "Typo", "Bob", "2024-O5-10", "2024-05-12"),
                expected: ExpectedPlacement::Hidden,
            },
            TaskScenario {
                task: task("task-c", "Reversed", "Claire", "2024-05-12", "2024-05-10"),
                expected: ExpectedPlacement::Hidden,
            },
            TaskScenario {
                task: task("task-d", "Fine", "Alice", "2024-05-02", "2024-05-04"),
                expected: ExpectedPlacement::Visible { person: "Alice", left_px: 192 + 40, width_px: 3 * 40 },
            },
        ],
        expected_rows: vec!["Alice", "Bob", "Claire"],
    }
}

/// One name can be a staff member, a client and an assignee at once; it still
/// owns a single row, and every one of its tasks lands there.
pub fn scenarii_shared_names() -> BoardScenario {
    BoardScenario {
        name: "shared names",
        reference: NaiveDate::from_ymd(2024, 5, 15),
        staff: names(&["Alice", "Bob"]),
        clients: names(&["Alice"]),
        scenarii: vec![
            TaskScenario {
                task: task("task-a", "Morning slot", "Alice", "2024-05-02", "2024-05-03"),
                expected: ExpectedPlacement::Visible { person: "Alice", left_px: 192 + 40, width_px: 2 * 40 },
            },
            TaskScenario {
                task: task("task-b", "Afternoon slot", "Alice", "2024-05-06", "2024-05-06"),
                expected: ExpectedPlacement::Visible { person: "Alice", left_px: 192 + 5 * 40, width_px: 40 },
            },
        ],
        expected_rows: vec!["Alice", "Bob"],
    }
}
