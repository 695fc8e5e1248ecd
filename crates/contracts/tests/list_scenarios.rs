use contracts::domain::a001_customer::{aggregate::FILTER_KEYS, Customer};
use contracts::enums::CustomerType;
use contracts::shared::list::{splice_remove, ListViewState, PageToken};

fn customers(n: usize) -> Vec<Customer> {
    (1..=n)
        .map(|i| Customer {
            id: format!("c-{i}"),
            name: format!("Khách hàng {i:02}"),
            email: Some(format!("kh{i}@example.vn")),
            phone: None,
            address: None,
            customer_type: if i % 3 == 0 {
                CustomerType::Business
            } else {
                CustomerType::Individual
            },
            is_active: i % 5 != 0,
            created_at: format!("2024-01-{i:02}T00:00:00Z"),
        })
        .collect()
}

#[test]
fn twenty_three_records_in_pages_of_ten() {
    let items = customers(23);
    let mut state = ListViewState::new(FILTER_KEYS, "name", 10);

    let first = state.project(&items, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 10);

    state.go_to_page(3, first.total_pages);
    let last = state.project(&items, 5);
    assert_eq!(last.current_page, 3);
    assert_eq!(last.items.len(), 3);
    assert_eq!(last.range(), Some((21, 23)));
    assert_eq!(last.items[0].id, "c-21");

    state.set_items_per_page(5);
    assert_eq!(state.current_page(), 1);
    let resized = state.project(&items, 5);
    assert_eq!(resized.total_pages, 5);
    assert_eq!(
        resized.window,
        (1..=5).map(PageToken::Page).collect::<Vec<_>>()
    );
}

#[test]
fn filter_narrows_and_resets_page() {
    let items = customers(23);
    let mut state = ListViewState::new(FILTER_KEYS, "name", 5);
    state.go_to_page(4, 5);

    state.set_filter("type", "business");
    assert_eq!(state.current_page(), 1);
    let snapshot = state.project(&items, 5);
    // 3, 6, ..., 21
    assert_eq!(snapshot.total_items, 7);
    assert_eq!(snapshot.total_pages, 2);

    state.set_filter("status", "inactive");
    let snapshot = state.project(&items, 5);
    // 15 is the only business customer divisible by 5
    assert_eq!(snapshot.total_items, 1);
    assert!(!snapshot.show_pagination());

    state.set_search_term("không tồn tại");
    let snapshot = state.project(&items, 5);
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.total_pages, 0);
}

#[test]
fn deleting_the_last_row_of_the_last_page_moves_back() {
    let mut items = customers(11);
    let mut state = ListViewState::new(FILTER_KEYS, "name", 10);
    state.go_to_page(2, 2);
    assert_eq!(state.project(&items, 5).items.len(), 1);

    assert!(splice_remove(&mut items, "c-11"));
    let snapshot = state.project(&items, 5);
    state.sync_total(snapshot.total_pages);
    assert_eq!(state.current_page(), 1);
    assert_eq!(snapshot.items.len(), 10);
}

#[test]
fn large_list_window() {
    let items = customers(200);
    let mut state = ListViewState::new(FILTER_KEYS, "name", 10);
    state.go_to_page(10, 20);
    let snapshot = state.project(&items, 5);
    let pages: Vec<Option<usize>> = snapshot.window.iter().map(PageToken::page).collect();
    assert_eq!(
        pages,
        vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(20)]
    );
}
