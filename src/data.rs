use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::slice;

use failure::Fail;
use log::debug;

use crate::types::Character;

const SAMPLE_CHARACTERS: &str = include_str!("../data/characters.json");

#[derive(Debug, Fail)]
pub enum DataError {
    #[fail(display = "Could not read character data from {}", _0)]
    Read(String, #[cause] io::Error),
    #[fail(display = "Invalid character data: {}", _0)]
    Parse(#[cause] serde_json::Error),
    #[fail(display = "Duplicate character id {}", _0)]
    DuplicateId(String),
    #[fail(display = "Character {} has an empty name", _0)]
    EmptyName(String),
}

///
/// The immutable character collection served by the schema
///
/// Ordered, read-only, ids unique.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Characters {
    records: Vec<Character>,
}

impl Characters {
    /// Checks that ids are unique and names non-empty before taking the records.
    pub fn new(records: Vec<Character>) -> Result<Self, DataError> {
        validate(&records)?;
        Ok(Self { records })
    }

    /// The twenty characters bundled with the crate
    pub fn sample() -> Result<Self, DataError> {
        Self::from_json(SAMPLE_CHARACTERS)
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let records: Vec<Character> = serde_json::from_str(json).map_err(DataError::Parse)?;
        Self::new(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|err| DataError::Read(path.display().to_string(), err))?;
        let characters = Self::from_json(&json)?;
        debug!(
            "loaded {} characters from {}",
            characters.len(),
            path.display()
        );
        Ok(characters)
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, Character> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(records: &[Character]) -> Result<(), DataError> {
    let mut ids = HashSet::with_capacity(records.len());
    for record in records {
        if !ids.insert(record.id.as_str()) {
            return Err(DataError::DuplicateId(record.id.to_owned()));
        }
        if record.name.is_empty() {
            return Err(DataError::EmptyName(record.id.to_owned()));
        }
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Characters {
    type Item = &'a Character;
    type IntoIter = slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
