use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::card::CardRecord;

// The category fixtures shipped with the app. Identifiers are knowingly
// messy (duplicates and an empty one); the card contract renders them
// as-is, so they stay that way here.
const SAMPLE_CATALOG: &str = include_str!("../fixtures/categories.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub records: Vec<CardRecord>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        let catalog = serde_json::from_reader(BufReader::new(file))?;

        Ok(catalog)
    }

    pub fn sample() -> Self {
        serde_json::from_str(SAMPLE_CATALOG).expect("expected valid embedded catalog")
    }
}

impl FromStr for Catalog {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}
