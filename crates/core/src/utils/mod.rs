pub mod color;
pub mod date;
pub mod validation;

pub use color::generate_color;
pub use validation::{is_empty, is_valid_email, is_valid_phone};
