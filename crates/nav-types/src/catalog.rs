use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Identifier shared by categories and items.
pub type EntityId = u32;

/// The two kinds of catalog entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Item,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Item => write!(f, "item"),
        }
    }
}

/// A named group of links.
///
/// `order` is an opaque sort key chosen by the client; it is neither unique
/// nor contiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub order: i32,
}

/// A single link on the dashboard.
///
/// `category_id` may point at a category that no longer exists when the
/// document was edited by hand or imported; such references are kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub url: String,
    pub category_id: Option<EntityId>,
    pub order: i32,
    pub avatar_url: String,
    pub summary: String,
}

impl Item {
    /// Returns `true` if this item is attached to the given category.
    pub fn belongs_to(&self, category: EntityId) -> bool {
        self.category_id == Some(category)
    }
}

/// Client-supplied fields for creating or updating a category.
///
/// Any `id` in the request body is ignored; the store assigns ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDraft {
    pub name: String,
    pub order: i32,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self { name: name.into(), order }
    }

    /// The name must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.name.trim().is_empty() {
            return Err(TypeError::Required("name"));
        }
        Ok(())
    }

    /// Materialize the draft under the given id.
    pub fn into_category(self, id: EntityId) -> Category {
        Category {
            id,
            name: self.name,
            order: self.order,
        }
    }
}

/// Client-supplied fields for creating or updating an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDraft {
    pub name: String,
    pub url: String,
    pub category_id: Option<EntityId>,
    pub order: i32,
    pub avatar_url: String,
    pub summary: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn in_category(mut self, category: EntityId) -> Self {
        self.category_id = Some(category);
        self
    }

    /// Both `name` and `url` must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.name.trim().is_empty() || self.url.trim().is_empty() {
            return Err(TypeError::Required("name and url"));
        }
        Ok(())
    }

    pub fn into_item(self, id: EntityId) -> Item {
        Item {
            id,
            name: self.name,
            url: self.url,
            category_id: self.category_id,
            order: self.order,
            avatar_url: self.avatar_url,
            summary: self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_name_rejected() {
        assert_eq!(
            CategoryDraft::new("  \t", 0).validate(),
            Err(TypeError::Required("name"))
        );
        assert!(CategoryDraft::new(" Work ", 0).validate().is_ok());
    }

    #[test]
    fn item_needs_name_and_url() {
        assert!(ItemDraft::new("Site", "https://x").validate().is_ok());
        assert_eq!(
            ItemDraft::new("Site", " ").validate(),
            Err(TypeError::Required("name and url"))
        );
        assert_eq!(
            ItemDraft::new("", "https://x").validate(),
            Err(TypeError::Required("name and url"))
        );
    }

    #[test]
    fn draft_ignores_client_id() {
        let draft: CategoryDraft =
            serde_json::from_str(r#"{"id": 99, "name": "Work", "order": 3}"#).unwrap();
        let cat = draft.into_category(7);
        assert_eq!(cat.id, 7);
        assert_eq!(cat.order, 3);
    }

    #[test]
    fn item_fields_default_when_missing() {
        let draft: ItemDraft = serde_json::from_str(r#"{"name": "a", "url": "b"}"#).unwrap();
        assert_eq!(draft.category_id, None);
        assert_eq!(draft.order, 0);
        assert!(draft.avatar_url.is_empty());
        assert!(draft.summary.is_empty());
    }

    #[test]
    fn item_serializes_absent_category_as_null() {
        let item = ItemDraft::new("a", "b").into_item(2);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json["category_id"].is_null());
        assert_eq!(json["id"], 2);
    }

    #[test]
    fn belongs_to_checks_category() {
        let item = ItemDraft::new("a", "b").in_category(4).into_item(5);
        assert!(item.belongs_to(4));
        assert!(!item.belongs_to(5));
    }

    #[test]
    fn entity_kind_display() {
        assert_eq!(EntityKind::Category.to_string(), "category");
        assert_eq!(EntityKind::Item.to_string(), "item");
    }
}
