//! Catalog of required document types.
//!
//! The catalog is defined by configuration, rarely mutated, and shared
//! read-only by every computation. Entry ids are stable string keys that
//! submitted documents reference.

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, Result};

/// Catalog entry describing one kind of paperwork a student must submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredDocumentType {
    /// Stable string key referenced by submissions.
    pub id: String,
    #[serde(alias = "displayName")]
    pub display_name: String,
    pub description: String,
    /// Whether the entry counts toward the mandatory-only completeness reading.
    pub mandatory: bool,
}

/// Ordered collection of required document types with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RequiredDocumentType>", into = "Vec<RequiredDocumentType>")]
pub struct DocumentCatalog {
    entries: Vec<RequiredDocumentType>,
}

impl DocumentCatalog {
    /// Build a catalog, rejecting duplicate entry ids.
    pub fn new(entries: Vec<RequiredDocumentType>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.clone()) {
                return Err(IntakeError::DuplicateCatalogId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The default enrollment paperwork set.
    pub fn default_enrollment() -> Self {
        let entries = vec![
            entry(
                "birth_certificate",
                "Birth Certificate",
                "Certified copy of the birth certificate",
            ),
            entry(
                "national_id",
                "National ID",
                "Government-issued population registry identifier",
            ),
            entry(
                "proof_of_address",
                "Proof of Address",
                "Utility bill no older than three months",
            ),
            entry(
                "secondary_school_certificate",
                "Secondary School Certificate",
                "Official certificate of secondary studies",
            ),
            entry(
                "photographs",
                "Photographs",
                "Four color passport-size photographs",
            ),
            entry(
                "medical_certificate",
                "Medical Certificate",
                "Medical certificate no older than six months",
            ),
        ];
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequiredDocumentType> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&RequiredDocumentType> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl TryFrom<Vec<RequiredDocumentType>> for DocumentCatalog {
    type Error = IntakeError;

    fn try_from(entries: Vec<RequiredDocumentType>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<DocumentCatalog> for Vec<RequiredDocumentType> {
    fn from(catalog: DocumentCatalog) -> Self {
        catalog.entries
    }
}

impl<'a> IntoIterator for &'a DocumentCatalog {
    type Item = &'a RequiredDocumentType;
    type IntoIter = std::slice::Iter<'a, RequiredDocumentType>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn entry(id: &str, display_name: &str, description: &str) -> RequiredDocumentType {
    RequiredDocumentType {
        id: id.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        mandatory: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let result = DocumentCatalog::new(vec![
            entry("birth_certificate", "Birth Certificate", ""),
            entry("birth_certificate", "Birth Certificate (copy)", ""),
        ]);
        assert!(matches!(
            result,
            Err(IntakeError::DuplicateCatalogId(id)) if id == "birth_certificate"
        ));
    }

    #[test]
    fn default_enrollment_has_six_mandatory_entries() {
        let catalog = DocumentCatalog::default_enrollment();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|entry| entry.mandatory));
        assert!(catalog.contains("national_id"));
    }

    #[test]
    fn deserialization_validates_ids() {
        let json = r#"[
            {"id": "a", "display_name": "A", "description": "", "mandatory": true},
            {"id": "a", "display_name": "A again", "description": "", "mandatory": false}
        ]"#;
        let result: std::result::Result<DocumentCatalog, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
