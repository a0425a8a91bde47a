use std::fmt;

use crate::types::{Character, FilterCharacter};

/// Criterion on the character name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameFilter {
    /// The name contains the given substring.
    Contains(String),
    /// The name contains at least one of the given substrings.
    ContainsAny(Vec<String>),
}

impl NameFilter {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::Contains(needle) => name.contains(needle.as_str()),
            NameFilter::ContainsAny(needles) => {
                needles.iter().any(|needle| name.contains(needle.as_str()))
            }
        }
    }
}

///
/// Typed filter criteria for one query
///
/// Each present criterion becomes a [`Stage`]. `name` always wins over `names`: once a
/// single name is set, a list of names is ignored.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    name: Option<NameFilter>,
    status: Option<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(NameFilter::Contains(name.into()));
        self
    }

    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(NameFilter::Contains(_)) = self.name {
            return self;
        }
        self.name = Some(NameFilter::ContainsAny(
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Stages in the order they are applied.
    pub fn stages(&self) -> Vec<Stage<'_>> {
        let mut stages = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            stages.push(Stage::Name(name));
        }
        if let Some(status) = &self.status {
            stages.push(Stage::Status(status));
        }
        stages
    }
}

impl From<FilterCharacter> for FilterSpec {
    fn from(filter: FilterCharacter) -> Self {
        let FilterCharacter {
            name,
            names,
            status,
        } = filter;
        let mut spec = FilterSpec::new();
        if let Some(name) = name {
            spec = spec.name(name);
        } else if let Some(names) = names {
            // null entries cannot match anything
            spec = spec.names(names.into_iter().flatten());
        }
        if let Some(status) = status {
            spec = spec.status(status);
        }
        spec
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match &self.name {
            Some(NameFilter::Contains(name)) => parts.push(format!("name={:?}", name)),
            Some(NameFilter::ContainsAny(names)) => parts.push(format!("names={:?}", names)),
            None => {}
        }
        if let Some(status) = &self.status {
            parts.push(format!("status={:?}", status));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// One AND-composed step of the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage<'a> {
    Name(&'a NameFilter),
    Status(&'a str),
}

impl<'a> Stage<'a> {
    pub fn admits(&self, character: &Character) -> bool {
        match self {
            Stage::Name(name) => name.matches(&character.name),
            Stage::Status(status) => character.status == *status,
        }
    }
}

///
/// Applies a [`FilterSpec`] to a borrowed character list
///
/// A character is kept only when every stage admits it, in the order of the list.
///
#[derive(Clone, Copy, Debug)]
pub struct CharacterFilter<'a> {
    characters: &'a [Character],
}

impl<'a> CharacterFilter<'a> {
    pub fn new(characters: &'a [Character]) -> Self {
        Self { characters }
    }

    /// Matching characters in collection order, each at most once.
    pub fn apply(&self, spec: &FilterSpec) -> Vec<&'a Character> {
        let stages = spec.stages();
        self.characters
            .iter()
            .filter(|character| stages.iter().all(|stage| stage.admits(character)))
            .collect()
    }
}
