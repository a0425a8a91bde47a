use crate::data::Characters;
use std::sync::Arc;

///
/// Context for Juniper
///
/// Holds the character collection shared, read-only, by every query.
///
#[derive(Clone, Debug)]
pub struct Context {
    characters: Arc<Characters>,
}

impl juniper::Context for Context {}

impl Context {
    pub fn new<C: Into<Arc<Characters>>>(characters: C) -> Self {
        Self {
            characters: characters.into(),
        }
    }

    pub fn characters(&self) -> &Characters {
        &self.characters
    }
}
