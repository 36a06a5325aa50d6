use people_core::db::open_db_in_memory;
use people_core::{PageRequest, PersonDraft, PersonRepository, PersonService, SqlitePersonRepository};
use rusqlite::Connection;

fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqlitePersonRepository::try_new(&conn).unwrap();
        for (name, age, email) in [
            ("Ann", 30, "ann@x.com"),
            ("Bob", 22, "bob@x.com"),
            ("Cleo", 41, "cleo@y.org"),
            ("Dana", 35, "dana@y.org"),
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
fn search_matches_name_case_insensitively() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let hits = repo
        .search("AN", &PageRequest::new(1, 10, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&hits), ["Ann", "Dana"]);
}

#[test]
fn search_matches_email_substring() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let hits = repo
        .search("y.org", &PageRequest::new(1, 10, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&hits), ["Cleo", "Dana"]);
}

#[test]
fn search_matches_age_as_decimal_text_not_a_numeric_range() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    // "2" matches 22 textually; 30/41/35 do not contain the digit 2.
    let hits = repo
        .search("2", &PageRequest::new(1, 10, Some("age"), Some("asc")))
        .unwrap();
    assert_eq!(names(&hits), ["Bob"]);

    // "3" matches 30 and 35 textually even though Bob's 22 < 30.
    let hits = repo
        .search("3", &PageRequest::new(1, 10, Some("age"), Some("asc")))
        .unwrap();
    assert_eq!(names(&hits), ["Ann", "Dana"]);
}

#[test]
fn non_digit_term_never_matches_age() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    // Only name/email can match a letter; every seeded name or email
    // containing "a" shows up, ages contribute nothing.
    let hits = repo
        .search("a", &PageRequest::new(1, 10, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&hits), ["Ann", "Dana"]);
}

#[test]
fn search_applies_the_same_paging_contract_as_list() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    // Every seeded email ends in .com or .org, so "o" matches all four.
    let page_one = repo
        .search("o", &PageRequest::new(1, 2, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&page_one), ["Ann", "Bob"]);

    let page_two = repo
        .search("o", &PageRequest::new(2, 2, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(names(&page_two), ["Cleo", "Dana"]);

    let far_page = repo
        .search("o", &PageRequest::new(9, 2, Some("name"), Some("asc")))
        .unwrap();
    assert!(far_page.is_empty());
}

#[test]
fn search_count_equals_unpaged_search_length() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    for term in ["a", "2", "y.org", "no-such-person"] {
        let all = repo
            .search(term, &PageRequest::new(1, u32::MAX, None, None))
            .unwrap();
        assert_eq!(
            repo.search_count(term).unwrap(),
            all.len() as u64,
            "count mismatch for term `{term}`"
        );
    }
}

#[test]
fn service_routes_blank_terms_to_plain_listing() {
    let conn = seeded_connection();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let service = PersonService::new(repo);

    let page = PageRequest::new(1, 10, Some("name"), Some("asc"));

    let unfiltered = service.fetch_page(None, &page).unwrap();
    assert_eq!(unfiltered.total, 4);
    assert_eq!(unfiltered.items.len(), 4);

    let blank = service.fetch_page(Some("   "), &page).unwrap();
    assert_eq!(blank, unfiltered);

    let filtered = service.fetch_page(Some("y.org"), &page).unwrap();
    assert_eq!(filtered.total, 2);
    assert_eq!(names(&filtered.items), ["Cleo", "Dana"]);
}

#[test]
fn end_to_end_scenario_from_two_known_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    let ann = repo.create(&PersonDraft::new("Ann", 30, "ann@x.com")).unwrap();
    repo.create(&PersonDraft::new("Bob", 22, "bob@x.com")).unwrap();

    let hits = repo
        .search("an", &PageRequest::new(1, 10, Some("name"), Some("asc")))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, ann);
    assert_eq!(hits[0].name, "Ann");

    assert_eq!(repo.search_count("an").unwrap(), 1);
}
