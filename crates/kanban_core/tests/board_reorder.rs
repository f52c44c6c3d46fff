use kanban_core::{Board, ColumnId, DropOutcome, Task};

fn task(id: &str) -> Task {
    Task::with_id(id, id.to_uppercase())
}

fn ids(board: &Board, column: ColumnId) -> Vec<String> {
    board
        .column(column)
        .iter()
        .map(|task| task.id.clone())
        .collect()
}

fn sample_board() -> Board {
    Board::new(
        vec![task("a"), task("b"), task("c"), task("d")],
        vec![task("e"), task("f")],
        vec![task("g")],
    )
}

#[test]
fn same_column_reorder_is_a_move_not_a_swap() {
    let mut board = sample_board();

    let outcome = board.apply_drop("a", Some("c"));

    assert_eq!(
        outcome,
        DropOutcome::Reordered {
            column: ColumnId::Todo,
            from: 0,
            to: 2,
        }
    );
    assert_eq!(ids(&board, ColumnId::Todo), vec!["b", "c", "a", "d"]);
}

#[test]
fn same_index_drop_leaves_board_unchanged() {
    let mut board = sample_board();
    let before = board.clone();

    assert_eq!(board.apply_drop("b", Some("b")), DropOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn drop_outside_any_target_is_a_noop() {
    let mut board = sample_board();
    let before = board.clone();

    assert_eq!(board.apply_drop("a", None), DropOutcome::Cancelled);
    assert_eq!(board, before);
}

#[test]
fn cross_column_drop_inserts_before_over_task() {
    let mut board = sample_board();

    let outcome = board.apply_drop("b", Some("f"));

    assert_eq!(
        outcome,
        DropOutcome::Moved {
            from: ColumnId::Todo,
            to: ColumnId::InProgress,
            index: 1,
        }
    );
    assert_eq!(ids(&board, ColumnId::Todo), vec!["a", "c", "d"]);
    assert_eq!(ids(&board, ColumnId::InProgress), vec!["e", "b", "f"]);
    assert_eq!(ids(&board, ColumnId::Done), vec!["g"]);
}

#[test]
fn drop_on_column_area_appends_to_end() {
    let mut board = sample_board();

    let outcome = board.apply_drop("a", Some("done"));

    assert_eq!(
        outcome,
        DropOutcome::Moved {
            from: ColumnId::Todo,
            to: ColumnId::Done,
            index: 1,
        }
    );
    assert_eq!(ids(&board, ColumnId::Done), vec!["g", "a"]);
}

#[test]
fn drop_on_empty_column_area_places_task_first() {
    let mut board = Board::new(vec![task("a")], vec![], vec![]);

    board.apply_drop("a", Some("inprogress"));

    assert!(board.column(ColumnId::Todo).is_empty());
    assert_eq!(ids(&board, ColumnId::InProgress), vec!["a"]);
}

#[test]
fn drop_on_own_column_area_is_unresolved() {
    let mut board = sample_board();
    let before = board.clone();

    assert_eq!(board.apply_drop("a", Some("todo")), DropOutcome::Unresolved);
    assert_eq!(board, before);
}

#[test]
fn stale_ids_are_unresolved_noops() {
    let mut board = sample_board();
    let before = board.clone();

    assert_eq!(
        board.apply_drop("deleted-mid-drag", Some("a")),
        DropOutcome::Unresolved
    );
    assert_eq!(board.apply_drop("a", Some("gone")), DropOutcome::Unresolved);
    assert_eq!(board.apply_drop("todo", Some("e")), DropOutcome::Unresolved);
    assert_eq!(board, before);
}

#[test]
fn find_container_resolves_columns_and_tasks() {
    let board = sample_board();

    assert_eq!(board.find_container("inprogress"), Some(ColumnId::InProgress));
    assert_eq!(board.find_container("f"), Some(ColumnId::InProgress));
    assert_eq!(board.find_container("g"), Some(ColumnId::Done));
    assert_eq!(board.find_container("missing"), None);
}

#[test]
fn add_task_trims_title_and_appends_to_todo() {
    let mut board = sample_board();

    let id = board.add_task("  Buy milk  ").unwrap();

    let todo = board.column(ColumnId::Todo);
    assert_eq!(todo.len(), 5);
    assert_eq!(todo[4].id, id);
    assert_eq!(todo[4].title, "Buy milk");
    assert_eq!(ids(&board, ColumnId::InProgress), vec!["e", "f"]);
}

#[test]
fn add_task_with_blank_title_is_a_noop() {
    let mut board = sample_board();
    let before = board.clone();

    assert_eq!(board.add_task(""), None);
    assert_eq!(board.add_task(" \t\n "), None);
    assert_eq!(board, before);
}

#[test]
fn delete_task_removes_from_owning_column_only() {
    let mut board = sample_board();

    assert!(board.delete_task("f"));
    assert_eq!(ids(&board, ColumnId::InProgress), vec!["e"]);
    assert_eq!(board.task_count(), 6);

    let before = board.clone();
    assert!(!board.delete_task("nope"));
    assert_eq!(board, before);
}
