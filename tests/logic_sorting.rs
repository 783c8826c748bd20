// Tests for procedure sorting logic.
use dossier::model::filter::sort_procedures;
use dossier::model::{FilterState, Procedure, SortOrder};
use dossier::store::ProcedureStore;
use std::collections::HashMap;

fn procedure(reference: &str, date_raw: &str) -> Procedure {
    let mut p = Procedure::new(reference, &format!("Procedure {}", reference));
    p.date_raw = date_raw.to_string();
    p
}

#[test]
fn test_descending_is_the_default_and_newest_wins() {
    let mut list = vec![
        procedure("A", "2020-01-01"),
        procedure("B", "2021-05-01"),
        procedure("C", "2019-12-31"),
    ];

    sort_procedures(&mut list, SortOrder::default());

    // "2021-05-01" must come before "2020-01-01" when newest-first.
    let refs: Vec<&str> = list.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["B", "A", "C"]);
}

#[test]
fn test_ascending_reverses_the_view() {
    let mut list = vec![
        procedure("A", "2020-01-01"),
        procedure("B", "2021-05-01"),
        procedure("C", "2019-12-31"),
    ];

    sort_procedures(&mut list, SortOrder::Asc);

    let refs: Vec<&str> = list.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["C", "A", "B"]);
}

#[test]
fn test_comparison_is_lexicographic_on_the_raw_string() {
    // ISO keys compare chronologically as plain strings; no date parsing
    // happens at sort time.
    let mut list = vec![
        procedure("A", "2024-10-02"),
        procedure("B", "2024-09-30"),
        procedure("C", "2024-10-15"),
    ];

    sort_procedures(&mut list, SortOrder::Desc);

    let refs: Vec<&str> = list.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["C", "A", "B"]);
}

#[test]
fn test_equal_dates_keep_their_relative_order() {
    let mut list = vec![
        procedure("first", "2025-01-01"),
        procedure("second", "2025-01-01"),
        procedure("third", "2025-01-01"),
    ];

    sort_procedures(&mut list, SortOrder::Desc);
    let refs: Vec<&str> = list.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["first", "second", "third"]);

    sort_procedures(&mut list, SortOrder::Asc);
    let refs: Vec<&str> = list.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["first", "second", "third"]);
}

#[test]
fn test_unknown_dates_sink_in_the_default_view() {
    let mut list = vec![
        procedure("undated", ""),
        procedure("dated", "2023-03-03"),
    ];

    sort_procedures(&mut list, SortOrder::Desc);
    assert_eq!(list[0].reference, "dated");
    assert_eq!(list[1].reference, "undated");

    // Ascending puts the empty key first instead.
    sort_procedures(&mut list, SortOrder::Asc);
    assert_eq!(list[0].reference, "undated");
}

#[test]
fn test_store_keeps_snapshot_order_while_views_are_sorted() {
    let mut store = ProcedureStore::new();
    store.load(
        vec![
            procedure("A", "2020-01-01"),
            procedure("B", "2021-05-01"),
            procedure("C", "2019-12-31"),
        ],
        &HashMap::new(),
    );

    let view = store.visible(&FilterState::default());
    let view_refs: Vec<&str> = view.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(view_refs, vec!["B", "A", "C"]);

    // Sorting the view never reorders the backing collection, so rows that
    // are currently hidden keep their place for later recomputes.
    let all_refs: Vec<&str> = store.all().iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(all_refs, vec!["A", "B", "C"]);
}

#[test]
fn test_hidden_rows_are_untouched_by_sorting() {
    let mut store = ProcedureStore::new();
    let mut hidden = procedure("hidden", "2022-06-06");
    hidden.year = "2022".to_string();
    let mut shown_old = procedure("old", "2020-01-01");
    shown_old.year = "2020".to_string();
    let mut shown_new = procedure("new", "2021-05-01");
    shown_new.year = "2021".to_string();
    store.load(vec![shown_old, hidden, shown_new], &HashMap::new());

    let mut filters = FilterState::default();
    filters.years.insert("2020".to_string());
    filters.years.insert("2021".to_string());

    let view = store.visible(&filters);
    let view_refs: Vec<&str> = view.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(view_refs, vec!["new", "old"]);

    // Dropping the year filter brings the hidden row back in snapshot
    // position relative to the others.
    let all_refs: Vec<&str> = store.all().iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(all_refs, vec!["old", "hidden", "new"]);
}
