pub mod common;
pub mod literal;

pub use literal::{parse_literal, Literal, ParseError};
