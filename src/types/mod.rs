pub mod character;
pub mod query;

pub use character::{Character, FilterCharacter};
pub use query::{schema, Query, Schema};
