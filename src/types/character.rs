use crate::context::Context;
use juniper::ID;
use serde_derive::{Deserialize, Serialize};

///
/// A character record of the Rick and Morty universe
///
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Character {
    /// unique identification of character in the collection
    pub id: String,
    pub name: String,
    /// `Alive`, `Dead`, `unknown` or any other value found in the data
    pub status: String,
    pub species: String,
    /// free text, often empty
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
}

#[cfg(test)]
impl Character {
    pub(crate) fn new<S: Into<String>>(id: S, name: S, status: S) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: status.into(),
            species: String::new(),
            kind: String::new(),
            gender: String::new(),
        }
    }
}

///
/// GraphQL type for a character
///
/// Every field is nullable in the schema even though the records always carry a value.
///
#[juniper::object(Context = Context)]
impl Character {
    fn id(&self) -> Option<ID> {
        Some(ID::from(self.id.clone()))
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn species(&self) -> Option<&str> {
        Some(self.species.as_str())
    }

    #[graphql(name = "type")]
    fn kind(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn gender(&self) -> Option<&str> {
        Some(self.gender.as_str())
    }
}

///
/// GraphQL input type narrowing down the `characters` list
///
#[derive(juniper::GraphQLInputObject, Clone, Default, Debug, PartialEq)]
pub struct FilterCharacter {
    /// substring of the character name, takes precedence over `names`
    pub name: Option<String>,
    /// substrings of the character name, any of them may match
    pub names: Option<Vec<Option<String>>>,
    /// exact status of the character
    pub status: Option<String>,
}
