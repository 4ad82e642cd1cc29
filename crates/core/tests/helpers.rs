use std::collections::BTreeMap;

use app_core::{
    constants::ColorName,
    path::{self, QueryParam, QueryValue},
    utils::{
        self,
        date::{self, DateFormat, TimeUnit},
    },
};

#[test]
fn query_for_search_screen() {
    let filters = BTreeMap::from([
        ("status".to_owned(), Some(QueryValue::from("active"))),
        ("page".to_owned(), Some(QueryValue::from(0i64))),
        ("keyword".to_owned(), Some(QueryValue::from(""))),
        ("ids".to_owned(), Some(QueryValue::from(path::join_values(&[3, 7], ",")))),
    ]);
    assert_eq!(path::query_from_map(&filters), "?ids=3%2C7&page=0&status=active");

    let none = [QueryParam::new("q", None::<QueryValue>)];
    assert_eq!(path::query_from_params(&none), "");
}

#[test]
fn signup_form_validation() {
    assert!(utils::is_valid_email("new.user@example.org"));
    assert!(utils::is_valid_phone("+1 555-123-4567"));
    assert!(utils::is_empty(Some("   ")));
    assert!(!utils::is_empty(Some("Ada")));
}

#[test]
fn avatar_colors_are_stable() {
    assert_eq!(utils::generate_color("John Doe"), utils::generate_color("John Doe"));
    assert_ne!(utils::generate_color("John Doe"), utils::generate_color("Jane Doe"));
    assert_eq!(ColorName::Primary.hex(), "#6366f1");
}

#[test]
fn token_expiry_window() {
    let issued = date::parse_date("2024-05-01 08:00", "%Y-%m-%d %H:%M").unwrap();
    let expires = date::add_time(&issued, 30, TimeUnit::Days).unwrap();

    assert_eq!(date::format_date(&expires, DateFormat::DateIso), "2024-05-31");
    let reminder = date::add_time(&issued, 1, TimeUnit::Weeks).unwrap();
    assert!(date::is_between(&reminder, &issued, &expires));
    assert_eq!(date::diff(&expires, &issued, TimeUnit::Hours), 720);
    assert_eq!(date::format_relative(&issued, &expires), "a month ago");
}
