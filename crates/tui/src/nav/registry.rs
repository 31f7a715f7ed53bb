use std::collections::{HashMap, HashSet};

use folio_content::anchors;
use folio_types::NavItem;
use folio_util::test_ids::normalize_label;
use thiserror::Error;

/// Sections listed in the header, in display order.
pub const PORTFOLIO_SECTIONS: &[NavItem] = &[
    NavItem::new("About", anchors::ABOUT),
    NavItem::new("Experience", anchors::EXPERIENCE),
    NavItem::new("Skills", anchors::SKILLS),
    NavItem::new("Education", anchors::EDUCATION),
    NavItem::new("Contact", anchors::CONTACT),
];

/// Reasons a list of nav items cannot form a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("nav item {index} has an empty label")]
    EmptyLabel { index: usize },
    #[error("nav item '{label}' has an empty anchor id")]
    EmptyAnchor { label: String },
    #[error("duplicate nav label '{0}'")]
    DuplicateLabel(String),
    #[error("duplicate nav anchor '{0}'")]
    DuplicateAnchor(String),
    #[error("labels '{first}' and '{second}' both normalize to '{normalized}'")]
    IdentifierCollision {
        first: String,
        second: String,
        normalized: String,
    },
}

/// Static, read-only ordered list of navigable sections.
///
/// Supplies the controller and the nav bar with the canonical label → anchor
/// mapping. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    items: Vec<NavItem>,
}

impl SectionRegistry {
    /// Builds a registry after checking labels, anchors, and derived
    /// identifiers for emptiness and uniqueness.
    pub fn new(items: Vec<NavItem>) -> Result<Self, RegistryError> {
        let mut labels: HashSet<&str> = HashSet::with_capacity(items.len());
        let mut anchors: HashSet<&str> = HashSet::with_capacity(items.len());
        let mut identifiers: HashMap<String, &str> = HashMap::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(RegistryError::EmptyLabel { index });
            }
            if item.anchor_id.trim().is_empty() {
                return Err(RegistryError::EmptyAnchor {
                    label: item.label.to_string(),
                });
            }
            if !labels.insert(item.label) {
                return Err(RegistryError::DuplicateLabel(item.label.to_string()));
            }
            if !anchors.insert(item.anchor_id) {
                return Err(RegistryError::DuplicateAnchor(item.anchor_id.to_string()));
            }
            let normalized = normalize_label(item.label);
            if let Some(first) = identifiers.insert(normalized.clone(), item.label) {
                return Err(RegistryError::IdentifierCollision {
                    first: first.to_string(),
                    second: item.label.to_string(),
                    normalized,
                });
            }
        }
        Ok(Self { items })
    }

    /// The sections of the résumé page.
    pub fn portfolio() -> Self {
        Self {
            items: PORTFOLIO_SECTIONS.to_vec(),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavItem> {
        self.items.get(index)
    }

    pub fn find_by_anchor(&self, anchor_id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.anchor_id == anchor_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavItem> {
        self.items.iter()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_sections_pass_validation() {
        let validated = SectionRegistry::new(PORTFOLIO_SECTIONS.to_vec()).expect("portfolio registry is valid");
        assert_eq!(validated, SectionRegistry::portfolio());
        let labels: Vec<_> = validated.iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["About", "Experience", "Skills", "Education", "Contact"]);
    }

    #[test]
    fn lookup_by_anchor_and_index() {
        let registry = SectionRegistry::portfolio();
        assert_eq!(registry.find_by_anchor("skills").map(|item| item.label), Some("Skills"));
        assert_eq!(registry.get(1).map(|item| item.anchor_id), Some("experience"));
        assert!(registry.get(registry.len()).is_none());
        assert!(registry.find_by_anchor("projects").is_none());
    }

    #[test]
    fn rejects_duplicates_and_empties() {
        assert_eq!(
            SectionRegistry::new(vec![NavItem::new(" ", "a")]),
            Err(RegistryError::EmptyLabel { index: 0 })
        );
        assert_eq!(
            SectionRegistry::new(vec![NavItem::new("A", "")]),
            Err(RegistryError::EmptyAnchor { label: "A".into() })
        );
        assert_eq!(
            SectionRegistry::new(vec![NavItem::new("A", "a"), NavItem::new("A", "b")]),
            Err(RegistryError::DuplicateLabel("A".into()))
        );
        assert_eq!(
            SectionRegistry::new(vec![NavItem::new("A", "a"), NavItem::new("B", "a")]),
            Err(RegistryError::DuplicateAnchor("a".into()))
        );
    }

    #[test]
    fn rejects_labels_whose_identifiers_collide() {
        let result = SectionRegistry::new(vec![
            NavItem::new("Contact Us", "contact"),
            NavItem::new("contact-us", "contact-alt"),
        ]);
        assert_eq!(
            result,
            Err(RegistryError::IdentifierCollision {
                first: "Contact Us".into(),
                second: "contact-us".into(),
                normalized: "contact-us".into(),
            })
        );
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = SectionRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
    }
}
