//! Undo/redo engine properties exercised through the public store API.

use lattice::{DocumentPayload, GridStore, MatchSite, TableSnapshot};

fn open(store: &mut GridStore) -> TableSnapshot {
    store
        .open_document(DocumentPayload {
            headers: vec!["name".into(), "score".into(), "when".into()],
            rows: vec![
                vec!["alice".into(), "5".into(), "2025-01-01".into()],
                vec!["bob".into(), "10".into(), "2025-06-01".into()],
                vec!["carol".into(), "15".into(), "2025-12-31".into()],
            ],
            ..Default::default()
        })
        .unwrap();
    store.active_session().unwrap().snapshot.clone()
}

#[test]
fn edits_followed_by_equal_undos_restore_the_original() {
    let mut store = GridStore::new();
    let original = open(&mut store);

    // Distinct targets so nothing coalesces
    assert!(store.edit_cell(0, 0, "x"));
    assert!(store.edit_header(1, "points"));
    assert!(store.add_row());
    assert!(store.remove_column(2));
    assert!(store.move_rows(0, 0, 3));

    for _ in 0..5 {
        assert!(store.undo());
    }
    assert_eq!(store.active_session().unwrap().snapshot, original);
    assert!(!store.can_undo());
}

#[test]
fn redo_after_undo_restores_pre_undo_snapshot() {
    let mut store = GridStore::new();
    open(&mut store);

    store.edit_cell(1, 1, "99");
    let edited = store.active_session().unwrap().snapshot.clone();

    assert!(store.undo());
    assert_ne!(store.active_session().unwrap().snapshot, edited);
    assert!(store.redo());
    assert_eq!(store.active_session().unwrap().snapshot, edited);
}

#[test]
fn new_mutation_clears_redo() {
    let mut store = GridStore::new();
    open(&mut store);

    store.edit_cell(0, 0, "x");
    store.undo();
    assert!(store.can_redo());
    store.add_row();
    assert!(!store.can_redo());
}

#[test]
fn rapid_same_cell_edits_coalesce_to_one_entry() {
    let mut store = GridStore::new();
    let original = open(&mut store);

    // Same coalescing key, far inside the 2s window
    store.edit_cell(0, 0, "a");
    store.edit_cell(0, 0, "ab");
    store.edit_cell(0, 0, "abc");

    let session = store.active_session().unwrap();
    assert_eq!(session.history.undo_count(), 1);
    assert_eq!(session.snapshot.get(0, 0), "abc");

    // One undo reverts the whole burst to the pre-burst value
    assert!(store.undo());
    assert_eq!(store.active_session().unwrap().snapshot, original);
}

#[test]
fn edits_to_different_cells_do_not_coalesce() {
    let mut store = GridStore::new();
    open(&mut store);

    store.edit_cell(0, 0, "a");
    store.edit_cell(0, 1, "b");
    assert_eq!(store.active_session().unwrap().history.undo_count(), 2);
}

#[test]
fn batched_mutations_undo_as_one() {
    let mut store = GridStore::new();
    let original = open(&mut store);

    store.begin_batch("Paste Block");
    store.edit_cell(0, 0, "p1");
    store.edit_cell(1, 0, "p2");
    store.insert_row_at(1);
    store.commit_batch();

    let session = store.active_session().unwrap();
    assert_eq!(session.history.undo_count(), 1);
    assert_eq!(session.history.undo_label(), Some("Paste Block"));

    assert!(store.undo());
    assert_eq!(store.active_session().unwrap().snapshot, original);
    assert!(store.redo());
    assert_eq!(store.active_session().unwrap().snapshot.get(0, 0), "p1");
}

#[test]
fn batch_without_mutations_leaves_history_empty() {
    let mut store = GridStore::new();
    open(&mut store);

    store.begin_batch("Nothing Happened");
    store.commit_batch();
    assert!(!store.can_undo());
}

#[test]
fn move_rows_noop_destinations() {
    let mut store = GridStore::new();
    let original = open(&mut store);

    assert!(!store.move_rows(2, 2, 2));
    assert!(!store.move_rows(2, 2, 3));
    assert_eq!(store.active_session().unwrap().snapshot, original);
    assert!(!store.can_undo());
}

#[test]
fn move_columns_keeps_header_data_pairing() {
    let mut store = GridStore::new();
    open(&mut store);

    assert!(store.move_columns(0, 0, 2));
    let snap = &store.active_session().unwrap().snapshot;
    assert_eq!(snap.headers[1], "name");
    for row in &snap.rows {
        assert!(["alice", "bob", "carol"].contains(&row[1].as_str()));
    }
}

#[test]
fn replace_all_empty_match_list_leaves_history_unchanged() {
    let mut store = GridStore::new();
    open(&mut store);

    assert!(!store.replace_all(&[], "alice", "bob"));
    assert!(!store.can_undo());
}

#[test]
fn replace_all_is_one_undo_step() {
    let mut store = GridStore::new();
    let original = open(&mut store);

    let matches = [
        MatchSite::Cell { row: 0, col: 0 },
        MatchSite::Cell { row: 2, col: 0 },
        MatchSite::Header { col: 0 },
    ];
    assert!(store.replace_all(&matches, "A", "_"));

    let session = store.active_session().unwrap();
    assert_eq!(session.snapshot.get(0, 0), "_lice");
    assert_eq!(session.snapshot.get(2, 0), "c_rol");
    assert_eq!(session.snapshot.header(0), "n_me");
    assert_eq!(session.history.undo_count(), 1);

    assert!(store.undo());
    assert_eq!(store.active_session().unwrap().snapshot, original);
}
