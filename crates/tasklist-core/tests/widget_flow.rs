use tasklist_core::board::{Stats, TaskBoard};
use tasklist_core::task::TaskId;
use tasklist_core::transition::Phase;

fn task_id_by_text(board: &TaskBoard, text: &str) -> TaskId {
    board
        .tasks()
        .iter()
        .find(|task| task.text == text)
        .map(|task| task.id)
        .expect("task present")
}

fn assert_derived_state(board: &TaskBoard) {
    let done = board.tasks().iter().filter(|task| task.done).count();
    assert_eq!(board.stats(), Stats { done, total: board.len() });
    assert_eq!(board.is_empty(), board.len() == 0);
    let live = board
        .rows()
        .iter()
        .filter(|row| row.phase != Phase::Leaving)
        .count();
    assert_eq!(live, board.len());
}

#[test]
fn add_toggle_delete_scenarios() {
    let mut board = TaskBoard::new();
    assert_eq!(board.stats(), Stats { done: 0, total: 0 });
    assert!(board.is_empty());

    board.add("Buy milk").expect("add buy milk");
    assert_eq!(board.len(), 1);
    assert_eq!(board.tasks()[0].text, "Buy milk");
    assert!(!board.tasks()[0].done);
    assert_eq!(board.stats(), Stats { done: 0, total: 1 });
    assert!(!board.is_empty());

    board.add("Walk dog").expect("add walk dog");
    let milk = task_id_by_text(&board, "Buy milk");
    assert!(board.toggle(milk, true));
    assert_eq!(board.stats(), Stats { done: 1, total: 2 });
    assert_derived_state(&board);

    let dog = task_id_by_text(&board, "Walk dog");
    assert!(board.delete(dog));
    assert_eq!(board.len(), 1);
    assert_eq!(board.stats(), Stats { done: 1, total: 1 });
    assert_derived_state(&board);

    let before = board.clone();
    assert_eq!(board.add(""), None);
    assert_eq!(board, before);

    assert!(board.delete(milk));
    assert!(board.is_empty());
    assert_eq!(board.stats(), Stats { done: 0, total: 0 });
    assert_derived_state(&board);
}

#[test]
fn add_sequence_keeps_only_non_blank_inputs_in_order() {
    let inputs = ["one", "  ", "two", "", "\tthree\n", " \n "];
    let mut board = TaskBoard::new();
    for raw in inputs {
        board.add(raw);
        assert_derived_state(&board);
    }

    let texts: Vec<&str> = board.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn toggle_round_trip_restores_done() {
    let mut board = TaskBoard::new();
    let id = board.add("water plants").expect("added");
    let before = board.get(id).map(|task| task.done);

    board.toggle(id, true);
    board.toggle(id, false);

    assert_eq!(board.get(id).map(|task| task.done), before);
    assert_eq!(board.len(), 1);
}

#[test]
fn transitions_follow_timers() {
    let mut board = TaskBoard::new();
    let id = board.add("animate me").expect("added");
    assert_eq!(board.rows()[0].phase, Phase::Entering);

    assert!(board.settle(id));
    assert_eq!(board.rows()[0].phase, Phase::Idle);

    assert!(board.delete(id));
    assert_eq!(board.rows()[0].phase, Phase::Leaving);
    assert!(board.is_empty());

    assert!(board.purge(id));
    assert!(board.rows().is_empty());
    assert!(!board.settle(id));
    assert!(!board.purge(id));
}

#[test]
fn markup_like_text_is_stored_verbatim() {
    let mut board = TaskBoard::new();
    let raw = "<img src=x onerror=alert(1)>";
    let id = board.add(raw).expect("added");
    assert_eq!(board.get(id).map(|task| task.text.as_str()), Some(raw));
}
