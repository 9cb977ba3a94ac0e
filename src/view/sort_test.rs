use proptest::prelude::*;

use crate::models::{Exam, ExamField, UserField, mock_exams, mock_users};
use crate::view::sort::*;
use crate::view::test_support::{RowField, arb_rows, row};
use crate::view::{Record, SortOrder};

fn exam(id: i64, title: &str, duration: u32) -> Exam {
    Exam {
        id,
        title: title.to_string(),
        duration,
        ..mock_exams()[0].clone()
    }
}

fn ids<T: Record>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    items.iter().map(id).collect()
}

#[test]
fn no_key_keeps_input_order() {
    let users = mock_users();
    let sorted = sort_by_field(users.iter(), None, SortOrder::Desc);
    assert_eq!(ids(&sorted, |u| u.id), vec![1, 2, 3, 4, 5]);
}

#[test]
fn input_is_not_mutated() {
    let users = mock_users();
    let before = users.clone();
    let _ = sort_by_field(users.iter(), Some(UserField::Username), SortOrder::Asc);
    assert_eq!(users, before);
}

#[test]
fn strings_sort_case_insensitively() {
    let rows = vec![row(1, "beta", 0), row(2, "Alpha", 0), row(3, "alpha2", 0)];
    let sorted = sort_by_field(rows.iter(), Some(RowField::Name), SortOrder::Asc);
    assert_eq!(ids(&sorted, |r| r.id), vec![2, 3, 1]);
}

#[test]
fn numbers_sort_numerically() {
    let exams = mock_exams();
    let sorted = sort_by_field(exams.iter(), Some(ExamField::Duration), SortOrder::Asc);
    let durations: Vec<u32> = sorted.iter().map(|e| e.duration).collect();
    assert_eq!(durations, vec![45, 60, 90, 100, 120]);
}

#[test]
fn duration_toggle_flips_order_and_keeps_ties_stable() {
    let exams = vec![
        exam(1, "A", 90),
        exam(2, "B", 60),
        exam(3, "C", 120),
        exam(4, "D", 60),
    ];
    let mut state = SortState::unsorted();

    state.toggle(ExamField::Duration);
    assert_eq!(state.order(), SortOrder::Asc);
    let asc = state.apply(exams.iter());
    assert_eq!(ids(&asc, |e| e.id), vec![2, 4, 1, 3]);

    state.toggle(ExamField::Duration);
    assert_eq!(state.order(), SortOrder::Desc);
    let desc = state.apply(exams.iter());
    // the two 60-minute exams keep their input order
    assert_eq!(ids(&desc, |e| e.id), vec![3, 1, 2, 4]);
}

#[test]
fn new_key_resets_to_ascending() {
    let mut state = SortState::new(Some(UserField::Username), SortOrder::Desc);
    state.toggle(UserField::Email);
    assert_eq!(state.key(), Some(UserField::Email));
    assert_eq!(state.order(), SortOrder::Asc);
}

#[test]
fn reset_restores_screen_defaults() {
    let mut state = SortState::new(Some(UserField::Username), SortOrder::Desc);
    state.toggle(UserField::Role);
    state.toggle(UserField::Role);
    state.reset();
    assert_eq!(state.key(), Some(UserField::Username));
    assert_eq!(state.order(), SortOrder::Desc);
}

#[test]
fn nulls_sort_last_descending() {
    let mut rows = vec![row(1, "a", 0), row(2, "b", 0)];
    rows[1].email = Some("x@y".to_string());
    let sorted = sort_by_field(rows.iter(), Some(RowField::Email), SortOrder::Desc);
    assert_eq!(ids(&sorted, |r| r.id), vec![2, 1]);
}

proptest! {
    #[test]
    fn sort_is_stable_in_both_directions(rows in arb_rows(40), descending in any::<bool>()) {
        let order = if descending { SortOrder::Desc } else { SortOrder::Asc };
        let sorted = sort_by_field(rows.iter(), Some(RowField::Score), order);

        prop_assert_eq!(sorted.len(), rows.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.score == b.score {
                // ids equal input positions
                prop_assert!(a.id < b.id);
            } else if descending {
                prop_assert!(a.score > b.score);
            } else {
                prop_assert!(a.score < b.score);
            }
        }
    }

    #[test]
    fn toggling_same_key_twice_is_identity(rows in arb_rows(30)) {
        let mut once = SortState::unsorted();
        once.toggle(RowField::Name);

        let mut thrice = SortState::unsorted();
        thrice.toggle(RowField::Name);
        thrice.toggle(RowField::Name);
        thrice.toggle(RowField::Name);

        let a: Vec<i64> = once.apply(rows.iter()).iter().map(|r| r.id).collect();
        let b: Vec<i64> = thrice.apply(rows.iter()).iter().map(|r| r.id).collect();
        prop_assert_eq!(a, b);
    }
}
