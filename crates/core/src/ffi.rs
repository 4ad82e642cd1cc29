//! Exports of the pure helpers for the Swift and Kotlin bindings.
//!
//! Rust callers should use [crate::utils] and [crate::path] directly, these
//! wrappers only adapt argument types to what crosses the FFI boundary.

use std::collections::HashMap;

use crate::{
    constants::ColorName,
    path::{self, QueryParam, QueryValue},
    utils,
};

#[uniffi::export]
pub fn validate_email(email: String) -> bool {
    utils::is_valid_email(&email)
}

#[uniffi::export]
pub fn validate_phone(phone: String) -> bool {
    utils::is_valid_phone(&phone)
}

#[uniffi::export]
pub fn is_blank(value: Option<String>) -> bool {
    utils::is_empty(value.as_deref())
}

#[uniffi::export]
pub fn color_for_text(text: String) -> String {
    utils::generate_color(&text)
}

#[uniffi::export]
pub fn palette_hex(color: ColorName) -> String {
    color.hex().to_owned()
}

#[uniffi::export]
pub fn query_string(params: Vec<QueryParam>) -> String {
    path::query_from_params(&params)
}

/// Keys are sorted, so the result does not depend on map iteration order.
#[uniffi::export]
pub fn query_string_from_map(params: HashMap<String, Option<QueryValue>>) -> String {
    path::query_from_map(&params.into_iter().collect())
}

#[uniffi::export]
pub fn join_list(values: Vec<String>, separator: String) -> String {
    path::join_values(&values, &separator)
}

#[uniffi::export]
pub fn split_list(input: String, separator: String) -> Vec<String> {
    path::split_values(&input, &separator)
}
