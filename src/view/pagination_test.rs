use proptest::prelude::*;

use crate::view::ViewError;
use crate::view::pagination::*;
use crate::view::test_support::rows;

fn synced(page_size: usize, total_items: usize) -> Paginator {
    let mut paginator = Paginator::new(page_size).unwrap();
    paginator.set_total_items(total_items);
    paginator
}

#[test]
fn zero_page_size_is_rejected() {
    assert_eq!(Paginator::new(0), Err(ViewError::InvalidPageSize));
    assert!(paginate(&[1, 2, 3], 1, 0).is_err());
}

#[test]
fn twenty_three_records_make_three_pages() {
    let items = rows(23);
    let mut paginator = Paginator::new(10).unwrap();

    let mut sizes = Vec::new();
    sizes.push(paginator.slice(&items).len());
    while paginator.next_page() {
        sizes.push(paginator.slice(&items).len());
    }

    assert_eq!(sizes, vec![10, 10, 3]);
    assert_eq!(paginator.total_pages(), 3);
}

#[test]
fn out_of_range_jump_is_rejected() {
    let mut paginator = synced(10, 23);
    assert!(paginator.go_to_page(3));
    assert!(!paginator.go_to_page(5));
    assert_eq!(paginator.page(), 3);
    assert!(!paginator.go_to_page(0));
    assert_eq!(paginator.page(), 3);
}

#[test]
fn has_next_only_before_the_last_page() {
    let mut paginator = synced(10, 23);
    assert!(paginator.has_next());
    assert!(!paginator.has_prev());

    paginator.go_to_page(2);
    assert!(paginator.has_next());
    assert!(paginator.has_prev());

    paginator.go_to_page(3);
    assert!(!paginator.has_next());
    assert!(!paginator.next_page());
    assert_eq!(paginator.page(), 3);
}

#[test]
fn prev_page_stops_at_one() {
    let mut paginator = synced(5, 12);
    assert!(!paginator.prev_page());
    assert_eq!(paginator.page(), 1);
    paginator.go_to_page(3);
    assert!(paginator.prev_page());
    assert_eq!(paginator.page(), 2);
}

#[test]
fn empty_collection_has_one_empty_page() {
    let mut paginator = Paginator::new(10).unwrap();
    let empty: Vec<u8> = Vec::new();

    assert!(paginator.slice(&empty).is_empty());
    assert_eq!(paginator.total_pages(), 1);
    assert_eq!(paginator.page(), 1);
    assert!(!paginator.has_next());
    assert!(!paginator.has_prev());
    assert_eq!(paginator.summary(), "Showing 0 - 0 of 0");
}

#[test]
fn shrinking_collection_clamps_current_page() {
    let mut paginator = synced(10, 45);
    paginator.go_to_page(5);

    paginator.set_total_items(12);
    assert_eq!(paginator.page(), 2);
    assert_eq!(paginator.range(), 10..12);

    paginator.set_total_items(0);
    assert_eq!(paginator.page(), 1);
    assert_eq!(paginator.range(), 0..0);
}

#[test]
fn growing_collection_keeps_current_page() {
    let mut paginator = synced(10, 25);
    paginator.go_to_page(3);
    paginator.set_total_items(100);
    assert_eq!(paginator.page(), 3);
}

#[test]
fn summary_reports_item_positions() {
    let mut paginator = synced(10, 23);
    assert_eq!(paginator.summary(), "Showing 1 - 10 of 23");
    paginator.go_to_page(3);
    assert_eq!(paginator.summary(), "Showing 21 - 23 of 23");
}

#[test]
fn page_window_slides_within_bounds() {
    let mut paginator = synced(10, 100);
    assert_eq!(paginator.page_window(5), vec![1, 2, 3, 4, 5]);

    paginator.go_to_page(3);
    assert_eq!(paginator.page_window(5), vec![1, 2, 3, 4, 5]);

    paginator.go_to_page(6);
    assert_eq!(paginator.page_window(5), vec![4, 5, 6, 7, 8]);

    paginator.go_to_page(10);
    assert_eq!(paginator.page_window(5), vec![6, 7, 8, 9, 10]);
}

#[test]
fn page_window_is_capped_by_total_pages() {
    let paginator = synced(10, 23);
    assert_eq!(paginator.page_window(5), vec![1, 2, 3]);
    assert!(paginator.page_window(0).is_empty());
}

#[test]
fn paginate_clamps_requested_page() {
    let items = rows(23);
    let page = paginate(&items, 9, 10).unwrap();

    assert_eq!(page.page, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 23);
    assert_eq!(page.items.len(), 3);
    assert!(!page.has_next());
    assert!(page.has_prev());
    assert_eq!(page.summary(), "Showing 21 - 23 of 23");

    let first = paginate(&items, 0, 10).unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(first.items[0].id, 0);
}

#[test]
fn page_serializes_without_page_size() {
    let encoded = serde_json::to_value(paginate(&[10, 20, 30], 2, 2).unwrap()).unwrap();

    assert_eq!(
        encoded,
        serde_json::json!({
            "items": [30],
            "page": 2,
            "total_pages": 2,
            "total_items": 3,
        })
    );
}

#[test]
fn clamped_page_persists_when_collection_regrows() {
    // Mirrors the reactive flow: derive the visible paginator, then store it back.
    let mut state = Paginator::new(10).unwrap().resized(50);
    assert!(state.go_to_page(5));

    let mut pages = Vec::new();
    for total in [12, 50, 7, 50] {
        let visible = state.resized(total);
        pages.push(visible.page());
        state = visible;
    }

    assert_eq!(pages, vec![2, 2, 1, 1]);
}

#[test]
fn resized_leaves_original_untouched() {
    let mut original = synced(10, 50);
    original.go_to_page(4);

    let shrunk = original.resized(5);

    assert_eq!(shrunk.page(), 1);
    assert_eq!(shrunk.total_items(), 5);
    assert_eq!(original.page(), 4);
    assert_eq!(original.total_items(), 50);
}

#[test]
fn hand_built_page_zero_summary_does_not_underflow() {
    let page: Page<u8> = Page {
        items: Vec::new(),
        page: 0,
        total_pages: 1,
        total_items: 0,
        page_size: 10,
    };
    assert_eq!(page.summary(), "Showing 0 - 0 of 0");
}

proptest! {
    #[test]
    fn concatenated_pages_reproduce_collection(len in 0usize..120, page_size in 1usize..15) {
        let items: Vec<usize> = (0..len).collect();
        let mut paginator = Paginator::new(page_size).unwrap();

        let mut seen: Vec<usize> = paginator.slice(&items).to_vec();
        while paginator.next_page() {
            seen.extend_from_slice(paginator.slice(&items));
        }

        prop_assert_eq!(&seen, &items);
        prop_assert_eq!(paginator.total_pages(), len.div_ceil(page_size).max(1));
    }

    #[test]
    fn page_is_always_in_range_after_resize(
        start in 0usize..200,
        shrunk in 0usize..200,
        page_size in 1usize..20,
        target in 1usize..30,
    ) {
        let mut paginator = synced(page_size, start);
        paginator.go_to_page(target);
        paginator.set_total_items(shrunk);

        prop_assert!(paginator.page() >= 1);
        prop_assert!(paginator.page() <= paginator.total_pages());
        prop_assert!(paginator.range().end <= shrunk);
    }
}
