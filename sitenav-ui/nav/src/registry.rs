use std::collections::HashSet;

use thiserror::Error;

use crate::model::NavItem;

/// Reasons a list of items cannot form a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("navigation item id must not be empty")]
    EmptyId,
    #[error("navigation item id `{0}` is used more than once")]
    DuplicateId(String),
    #[error("navigation items `{first}` and `{second}` are both dropdowns")]
    MultipleDropdowns { first: String, second: String },
    #[error("navigation item `{0}` is not pinnable but not pinned either")]
    UnpinnedLocked(String),
}

/// Ordered, validated catalog of sidebar entries.
///
/// The default registry is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavRegistry {
    items: Vec<NavItem>,
}

impl NavRegistry {
    /// Validate `items` and wrap them, keeping their order.
    pub fn new(items: Vec<NavItem>) -> Result<Self, RegistryError> {
        validate(&items)?;
        Ok(Self { items })
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

    /// Look up a top-level entry by id.
    pub fn get(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The "more" entry, if the catalog has one.
    pub fn dropdown(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.is_dropdown())
    }

    /// Whether `id` names a top-level entry the user may pin or unpin.
    pub fn is_user_pinnable(&self, id: &str) -> bool {
        self.get(id).is_some_and(NavItem::is_user_pinnable)
    }
}

fn validate(items: &[NavItem]) -> Result<(), RegistryError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut dropdown: Option<&str> = None;

    for item in items {
        claim_id(&mut seen, item.id())?;
        for child in item.children() {
            claim_id(&mut seen, child.id())?;
        }

        if !item.is_pinnable() && !item.is_pinned() {
            return Err(RegistryError::UnpinnedLocked(item.id().to_string()));
        }

        if item.is_dropdown() {
            if let Some(first) = dropdown {
                return Err(RegistryError::MultipleDropdowns {
                    first: first.to_string(),
                    second: item.id().to_string(),
                });
            }
            dropdown = Some(item.id());
        }
    }

    Ok(())
}

fn claim_id<'a>(
    seen: &mut HashSet<&'a str>,
    id: &'a str,
) -> Result<(), RegistryError> {
    if id.is_empty() {
        return Err(RegistryError::EmptyId);
    }
    if !seen.insert(id) {
        return Err(RegistryError::DuplicateId(id.to_string()));
    }
    Ok(())
}
