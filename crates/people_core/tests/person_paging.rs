use people_core::db::open_db_in_memory;
use people_core::{
    PageRequest, PersonDraft, PersonRepository, SortDirection, SortField,
    SqlitePersonRepository,
};
use rusqlite::Connection;

fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqlitePersonRepository::try_new(&conn).unwrap();
        for (name, age, email) in [
            ("Ann", 30, "ann@x.com"),
            ("Bob", 22, "bob@x.com"),
            ("Cleo", 41, "cleo@y.org"),
            ("Dan", 35, "dan@y.org"),
            ("Eve", 28, "eve@z.net"),
        ] {
            repo.create(&PersonDraft::new(name, age, email)).unwrap();
        }
    }
    conn
}

fn names(people: &[people_core::Person]) -> Vec<&str> {
    people.iter().map(|person| person.name.as_str()).collect()
}

#[test]
fn list_orders_by_resolved_field_and_direction() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let by_age_asc = repo
        .list(&PageRequest::new(1, 10, Some("age"), Some("asc")))
        .unwrap();
    assert_eq!(names(&by_age_asc), ["Bob", "Eve", "Ann", "Dan", "Cleo"]);

    let by_name_desc = repo
        .list(&PageRequest::new(1, 10, Some("name"), Some("desc")))
        .unwrap();
    assert_eq!(names(&by_name_desc), ["Eve", "Dan", "Cleo", "Bob", "Ann"]);
}

#[test]
fn unknown_sort_field_falls_back_to_id_order() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let fallback = repo
        .list(&PageRequest::new(1, 10, Some("shoe_size"), Some("asc")))
        .unwrap();
    let by_id = repo
        .list(&PageRequest::new(1, 10, Some("id"), Some("asc")))
        .unwrap();

    assert_eq!(fallback, by_id);
    assert_eq!(names(&by_id), ["Ann", "Bob", "Cleo", "Dan", "Eve"]);
}

#[test]
fn absent_direction_is_ascending_and_garbage_is_descending() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let default_dir = repo
        .list(&PageRequest::new(1, 10, Some("age"), None))
        .unwrap();
    assert_eq!(names(&default_dir), ["Bob", "Eve", "Ann", "Dan", "Cleo"]);

    let garbage_dir = repo
        .list(&PageRequest::new(1, 10, Some("age"), Some("upwards")))
        .unwrap();
    assert_eq!(names(&garbage_dir), ["Cleo", "Dan", "Ann", "Eve", "Bob"]);
}

#[test]
fn list_slices_pages_by_size_and_offset() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let page_one = repo
        .list(&PageRequest::new(1, 2, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&page_one), ["Ann", "Bob"]);

    let page_two = repo
        .list(&PageRequest::new(2, 2, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&page_two), ["Cleo", "Dan"]);

    let page_three = repo
        .list(&PageRequest::new(3, 2, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&page_three), ["Eve"]);
}

#[test]
fn page_past_the_data_is_empty_not_an_error() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let far_page = repo
        .list(&PageRequest::new(99, 10, None, None))
        .unwrap();
    assert!(far_page.is_empty());
}

#[test]
fn count_equals_records_summed_over_all_pages() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let total = repo.count().unwrap();
    let mut seen = 0u64;
    let mut page = 1;
    loop {
        let chunk = repo.list(&PageRequest::new(page, 2, None, None)).unwrap();
        if chunk.is_empty() {
            break;
        }
        seen += chunk.len() as u64;
        page += 1;
    }

    assert_eq!(total, 5);
    assert_eq!(seen, total);
}

#[test]
fn default_page_request_is_first_page_of_ten_by_id_ascending() {
    let page = PageRequest::default();
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 10);
    assert_eq!(page.sort_field, SortField::Id);
    assert_eq!(page.sort_direction, SortDirection::Ascending);
    assert_eq!(page.offset(), 0);
}
