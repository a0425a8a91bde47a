use crate::context::Context;
use crate::data::Characters;
use crate::filter::{CharacterFilter, FilterSpec};
use crate::types::{Character, FilterCharacter};
use juniper::EmptyMutation;
use log::{debug, info};

pub struct Query;

#[juniper::object(Context = Context)]
impl Query {
    ///
    /// Get all characters, narrowed down by `filter` when one is given
    ///
    fn characters(context: &Context, filter: Option<FilterCharacter>) -> Vec<Character> {
        resolve_characters(context.characters(), filter)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Returns the whole collection when no filter was supplied, the filtered subset otherwise.
///
/// A supplied but empty filter object still goes through the filter and keeps every character.
pub fn resolve_characters(
    characters: &Characters,
    filter: Option<FilterCharacter>,
) -> Vec<&Character> {
    match filter {
        Some(filter) => {
            let spec = FilterSpec::from(filter);
            info!("Filtering characters with filter: {}", spec);
            let found = CharacterFilter::new(characters.as_slice()).apply(&spec);
            debug!("{} of {} characters matched", found.len(), characters.len());
            found
        }
        None => characters.iter().collect(),
    }
}

pub type Schema = juniper::RootNode<'static, Query, EmptyMutation<Context>>;

pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new())
}
