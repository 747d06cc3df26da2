//! The domino catalog and its JSON format.
//!
//! A catalog file is a JSON array of
//! `{"number": n, "left": {"suit": s, "crowns": c}, "right": {...}}`
//! records, with suits as the six lowercase terrain names. Records are
//! deserialised as plain data and then converted, so an unknown suit is a
//! [`CatalogError::Suit`] rather than a silently defaulted tile.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use kingdom_core::{Domino, Suit, Tile};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;

const STANDARD_JSON: &str = include_str!("../data/standard.json");

#[derive(Serialize, Deserialize)]
struct TileRecord {
    suit: String,
    crowns: u8,
}

#[derive(Serialize, Deserialize)]
struct DominoRecord {
    number: u32,
    left: TileRecord,
    right: TileRecord,
}

impl TileRecord {
    fn to_tile(&self, number: u32) -> Result<Tile, CatalogError> {
        let suit: Suit = self
            .suit
            .parse()
            .map_err(|source| CatalogError::Suit { number, source })?;
        Ok(Tile::new(suit, self.crowns))
    }
}

impl From<Tile> for TileRecord {
    fn from(t: Tile) -> Self {
        Self {
            suit: t.suit.name().to_string(),
            crowns: t.crowns,
        }
    }
}

/// An ordered set of dominoes with unique numbers.
///
/// # Examples
///
/// ```
/// use kingdom_draft::Catalog;
///
/// let json = r#"[
///     {"number": 1, "left": {"suit": "wheat", "crowns": 0},
///                   "right": {"suit": "wheat", "crowns": 0}},
///     {"number": 2, "left": {"suit": "forest", "crowns": 1},
///                   "right": {"suit": "water", "crowns": 0}}
/// ]"#;
/// let catalog = Catalog::from_json_str(json).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(2).unwrap().crowns(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    dominoes: Vec<Domino>,
}

impl Catalog {
    /// Wrap a list of dominoes, rejecting duplicate numbers.
    pub fn from_dominoes(dominoes: Vec<Domino>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(dominoes.len());
        for d in &dominoes {
            if !seen.insert(d.number) {
                return Err(CatalogError::DuplicateNumber { number: d.number });
            }
        }
        Ok(Self { dominoes })
    }

    /// The 48-domino set of the published game.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_json_str(STANDARD_JSON)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<DominoRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Parse a catalog from a reader yielding JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let records: Vec<DominoRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Load a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.as_ref().display(),
            dominoes = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn from_records(records: Vec<DominoRecord>) -> Result<Self, CatalogError> {
        let dominoes = records
            .iter()
            .map(|r| {
                Ok(Domino::new(
                    r.number,
                    r.left.to_tile(r.number)?,
                    r.right.to_tile(r.number)?,
                ))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Self::from_dominoes(dominoes)
    }

    /// Serialise back to the catalog JSON format, pretty-printed.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let records: Vec<DominoRecord> = self
            .dominoes
            .iter()
            .map(|d| DominoRecord {
                number: d.number,
                left: d.left.into(),
                right: d.right.into(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// All dominoes in catalog order.
    pub fn dominoes(&self) -> &[Domino] {
        &self.dominoes
    }

    /// The domino numbered `number`, if present.
    pub fn get(&self, number: u32) -> Option<&Domino> {
        self.dominoes.iter().find(|d| d.number == number)
    }

    /// Number of dominoes.
    pub fn len(&self) -> usize {
        self.dominoes.len()
    }

    /// True when the catalog holds no dominoes.
    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    /// Iterate dominoes in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Domino> {
        self.dominoes.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Domino;
    type IntoIter = std::slice::Iter<'a, Domino>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_has_48_numbered_dominoes() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.len(), 48);
        assert!(catalog.iter().zip(1..).all(|(d, n)| d.number == n));
        let crowns: u32 = catalog.iter().map(Domino::crowns).sum();
        assert_eq!(crowns, 39);
        assert_eq!(
            catalog.get(48),
            Some(&Domino::new(
                48,
                Tile::new(Suit::Wheat, 0),
                Tile::new(Suit::Mine, 3)
            ))
        );
    }

    #[test]
    fn standard_set_only_uses_terrain() {
        let catalog = Catalog::standard().unwrap();
        assert!(catalog
            .iter()
            .all(|d| d.left.suit.is_terrain() && d.right.suit.is_terrain()));
    }

    #[test]
    fn unknown_suit_fails_loudly() {
        let json = r#"[{"number": 5, "left": {"suit": "lava", "crowns": 0},
                                     "right": {"suit": "grass", "crowns": 0}}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Suit { number: 5, .. })
        ));
    }

    #[test]
    fn castle_is_not_a_catalog_suit() {
        let json = r#"[{"number": 1, "left": {"suit": "castle", "crowns": 0},
                                     "right": {"suit": "grass", "crowns": 0}}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Suit { .. })
        ));
    }

    #[test]
    fn negative_crowns_are_rejected() {
        let json = r#"[{"number": 1, "left": {"suit": "mine", "crowns": -1},
                                     "right": {"suit": "grass", "crowns": 0}}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn duplicate_numbers_are_rejected() {
        let tile = Tile::new(Suit::Grass, 0);
        let d = Domino::new(3, tile, tile);
        assert!(matches!(
            Catalog::from_dominoes(vec![d, d]),
            Err(CatalogError::DuplicateNumber { number: 3 })
        ));
    }

    #[test]
    fn json_output_reloads_to_same_catalog() {
        let catalog = Catalog::standard().unwrap();
        let json = catalog.to_json().unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
        assert!(json.contains("\"suit\": \"wheat\""));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Catalog::from_path("/nonexistent/kingdom/catalog.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
