//! This is an example of how saved tasks can be handed over to an async host

use chrono::NaiveDate;

use wall_planner::store::ChannelStore;
use wall_planner::PlanningBoard;
use wall_planner::TaskDraft;

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("This example plugs the board into an async host: every submitted task is");
    println!("handed over on a channel, and a tokio task persists it in the background.");
    println!("The board itself never waits for that to happen.");
    println!("");

    let (store, mut receiver) = ChannelStore::new();

    let persister = tokio::spawn(async move {
        let mut count: u32 = 0;
        while let Some(task) = receiver.recv().await {
            // A real host would write to its database here
            println!("[host] persisting {:?} ({} to {})", task.title(), task.start_date(), task.end_date());
            count += 1;
        }
        count
    });

    let mut board = PlanningBoard::new(store, NaiveDate::from_ymd(2024, 5, 1));

    submit(&mut board, "Draft the brief", "Alice", "2024-05-10", "2024-05-12");
    submit(&mut board, "Kickoff", "Bob", "2024-05-01", "2024-05-01");
    submit(&mut board, "Review round", "Contoso", "2024-05-20", "2024-05-31");

    println!("Invalid drafts are stopped by the form, before the host can ever see them:");
    let mut draft = TaskDraft::default();
    draft.person = "Alice".to_string();
    draft.start_date = "2024-05-10".to_string();
    draft.end_date = "2024-05-12".to_string();
    match board.submit_form(draft) {
        Ok(_) => println!("  ...this should not have been accepted!"),
        Err(err) => println!("  the form says: \"{}\"", err),
    }

    // Dropping the board closes the channel, which lets the persister finish
    drop(board);
    let count = persister.await.unwrap();
    println!("The host persisted {} tasks.", count);
}

fn submit(board: &mut PlanningBoard<ChannelStore>, title: &str, person: &str, start_date: &str, end_date: &str) {
    let mut draft = TaskDraft::default();
    draft.title = title.to_string();
    draft.person = person.to_string();
    draft.start_date = start_date.to_string();
    draft.end_date = end_date.to_string();
    board.submit_form(draft).unwrap();
}
