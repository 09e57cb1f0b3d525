///! Some utility functions

use crate::board::BoardSnapshot;
use crate::task::Task;

/// A debug utility that pretty-prints a board snapshot, row by row
pub fn print_snapshot(snapshot: &BoardSnapshot) {
    println!("BOARD {} ({} days, {} rows)",
        snapshot.window().label(), snapshot.window().num_days(), snapshot.rows().len());

    for (row_index, row) in snapshot.rows().rows().iter().enumerate() {
        println!("ROW {}", row.person());
        for bar in snapshot.bars().iter().filter(|bar| bar.row_index() == row_index) {
            print_bar(bar.task(), bar.geometry().left_px, bar.geometry().width_px);
        }
    }
}

fn print_bar(task: &Task, left_px: u32, width_px: u32) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} {}\t{} to {}\tat {}px for {}px",
        completion, task.title(), task.start_date(), task.end_date(), left_px, width_px);
}

/// A debug utility that pretty-prints the contents of a store
pub fn print_tasks(tasks: &[Task]) {
    for task in tasks {
        let completion = if task.completed() { "✓" } else { " " };
        println!("    {} {}\t({})\t{}", completion, task.title(), task.person(), task.id());
    }
}

/// Asks the user to press enter, so that one can sit and watch what happened
pub fn pause() {
    let mut s = String::new();
    println!("Press enter to continue...");
    let _ = std::io::stdin().read_line(&mut s);
}
