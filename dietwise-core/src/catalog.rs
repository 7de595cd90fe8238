//! Validated, ordered collections of diet records.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::DietRecord;

/// Errors returned by [`DietCatalog::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records share an identifier.
    #[error("diet id '{id}' appears more than once in the catalog")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A record has a blank identifier.
    #[error("diet at position {index} has an empty id")]
    EmptyId {
        /// Zero-based position of the record.
        index: usize,
    },
}

/// Diet records with globally unique identifiers, kept in authoring order.
///
/// With the `serde` feature the catalog (de)serialises as a plain array of
/// records; deserialisation runs the same identifier validation as
/// [`DietCatalog::new`].
///
/// # Examples
/// ```
/// use dietwise_core::{DietCatalog, DietRecord, LocalizedText};
///
/// # fn main() -> Result<(), dietwise_core::CatalogError> {
/// let catalog = DietCatalog::new(vec![
///     DietRecord::new("keto", LocalizedText::default(), LocalizedText::default()),
///     DietRecord::new("vegan", LocalizedText::default(), LocalizedText::default()),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("vegan").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<DietRecord>", into = "Vec<DietRecord>")
)]
pub struct DietCatalog {
    records: Vec<DietRecord>,
}

impl DietCatalog {
    /// Validate identifiers and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyId`] for a blank identifier and
    /// [`CatalogError::DuplicateId`] for the first repeated one.
    pub fn new(records: Vec<DietRecord>) -> Result<Self, CatalogError> {
        validate_ids(&records)?;
        Ok(Self { records })
    }

    /// Look up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DietRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records behind the paywall, in catalog order.
    pub fn premium(&self) -> impl Iterator<Item = &DietRecord> {
        self.records.iter().filter(|record| record.is_premium)
    }

    /// Freely available records, in catalog order.
    pub fn free(&self) -> impl Iterator<Item = &DietRecord> {
        self.records.iter().filter(|record| !record.is_premium)
    }

    /// Iterate over every record in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, DietRecord> {
        self.records.iter()
    }

    /// Borrow the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[DietRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the catalog and return the records.
    #[must_use]
    pub fn into_inner(self) -> Vec<DietRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a DietCatalog {
    type Item = &'a DietRecord;
    type IntoIter = std::slice::Iter<'a, DietRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<DietRecord>> for DietCatalog {
    type Error = CatalogError;

    fn try_from(records: Vec<DietRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<DietCatalog> for Vec<DietRecord> {
    fn from(catalog: DietCatalog) -> Self {
        catalog.records
    }
}

fn validate_ids(records: &[DietRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}
