//! This is an example of how wall-planner can be used

use chrono::NaiveDate;

use wall_planner::store::MemoryStore;
use wall_planner::utils::pause;
use wall_planner::utils::print_snapshot;
use wall_planner::utils::print_tasks;
use wall_planner::PlanningBoard;
use wall_planner::TaskDraft;

fn main() {
    env_logger::init();

    println!("This example walks through a month of planning: creating tasks through");
    println!("the form, laying them out on the board, and moving across months.");
    println!("You can set the RUST_LOG environment variable to display more info about what the board does.");
    println!("");
    pause();

    let staff = vec!["Alice".to_string(), "Bob".to_string()];
    let clients = vec!["Contoso".to_string()];

    let mut board = PlanningBoard::new(MemoryStore::new(), NaiveDate::from_ymd(2024, 5, 1));

    create_some_tasks(&mut board);

    println!("---- The store, after a few submissions -----");
    print_tasks(board.store().tasks());

    println!("\n---- The {} board -----", board.window().label());
    let snapshot = board.snapshot(board.store().tasks(), &staff, &clients);
    print_snapshot(&snapshot);

    println!("\nMoving to the next month...");
    board.show_next_month();
    let snapshot = board.snapshot(board.store().tasks(), &staff, &clients);
    print_snapshot(&snapshot);

    println!("\nSubmitting a task with reversed dates, to show what the form reports:");
    board.open_task_form(None);
    {
        let draft = board.form_mut().unwrap(/* the form was opened right above */);
        draft.title = "Time travel".to_string();
        draft.person = "Alice".to_string();
        draft.start_date = "2024-05-20".to_string();
        draft.end_date = "2024-05-10".to_string();
    }
    let draft = board.form().unwrap().clone();
    match board.submit_form(draft) {
        Ok(_) => println!("  ...this should not have been accepted!"),
        Err(err) => println!("  the form says: \"{}\"", err),
    }
}

fn create_some_tasks(board: &mut PlanningBoard<MemoryStore>) {
    let planned: &[(&str, &str, &str, &str)] = &[
        ("Draft the brief", "Alice", "2024-05-10", "2024-05-12"),
        ("Kickoff", "Bob", "2024-05-01", "2024-05-01"),
        ("Review round", "Contoso", "2024-05-20", "2024-05-31"),
        ("Carry-over from April", "Alice", "2024-04-28", "2024-05-03"),
    ];

    for &(title, person, start_date, end_date) in planned {
        let mut draft = TaskDraft::default();
        draft.title = title.to_string();
        draft.person = person.to_string();
        draft.start_date = start_date.to_string();
        draft.end_date = end_date.to_string();
        board.submit_form(draft).unwrap();
    }
}
