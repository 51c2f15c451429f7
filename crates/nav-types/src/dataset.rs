use serde::{Deserialize, Deserializer, Serialize};

use crate::admin::{AdminAuth, AdminView};
use crate::catalog::{Category, EntityId, Item};

/// The full persisted state of a dashboard.
///
/// Every field is optional when decoding; a freshly decoded dataset must go
/// through [`Dataset::normalize`] before it is trusted, since the document
/// may predate a field or have been edited by hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Next id to hand out. Shared by categories and items.
    pub next_id: EntityId,
    #[serde(deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    pub admin: AdminAuth,
}

/// Documents written by older servers encode an empty collection as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Dataset {
    /// An empty dataset owned by `admin`, allocating from id 1.
    pub fn empty(admin: AdminAuth) -> Self {
        Self {
            next_id: 1,
            categories: Vec::new(),
            items: Vec::new(),
            admin,
        }
    }

    /// Largest id currently present in either collection.
    pub fn max_id(&self) -> Option<EntityId> {
        let cats = self.categories.iter().map(|c| c.id);
        let items = self.items.iter().map(|i| i.id);
        cats.chain(items).max()
    }

    /// Restore the dataset invariants after decoding.
    ///
    /// `next_id` becomes at least 1 and strictly greater than every id
    /// present. An incomplete admin identity is replaced by `fallback`.
    pub fn normalize(&mut self, fallback: impl FnOnce() -> AdminAuth) {
        let floor = self
            .max_id()
            .map_or(1, |max| max.saturating_add(1));
        self.next_id = self.next_id.max(floor).max(1);
        if !self.admin.is_complete() {
            self.admin = fallback();
        }
    }

    /// Take the next id from the shared allocator.
    ///
    /// Returns `None` once the id space is exhausted; ids are never reused.
    pub fn allocate_id(&mut self) -> Option<EntityId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(id)
    }

    pub fn category_index(&self, id: EntityId) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    pub fn item_index(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Clear `category_id` on every item attached to `category`.
    ///
    /// Returns how many items were detached.
    pub fn detach_category(&mut self, category: EntityId) -> usize {
        let mut detached = 0;
        for item in self.items.iter_mut().filter(|i| i.belongs_to(category)) {
            item.category_id = None;
            detached += 1;
        }
        detached
    }

    /// Items whose `category_id` names a category that does not exist.
    pub fn dangling_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| match item.category_id {
            Some(cat) => self.category_index(cat).is_none(),
            None => false,
        })
    }

    /// The dataset with the password digest stripped.
    pub fn view(&self) -> DatasetView {
        DatasetView {
            next_id: self.next_id,
            categories: self.categories.clone(),
            items: self.items.clone(),
            admin: self.admin.view(),
        }
    }
}

/// What unauthenticated readers see of a [`Dataset`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetView {
    pub next_id: EntityId,
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
    pub admin: AdminView,
}
