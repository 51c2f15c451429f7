//! Category and item operations.
//!
//! Both kinds share one id allocator. Deletion keeps the relative order of
//! the remaining entries.

use nav_types::{Category, CategoryDraft, EntityId, EntityKind, Item, ItemDraft};

use crate::error::{StoreError, StoreResult};
use crate::store::NavStore;

impl NavStore {
    pub fn create_category(&self, draft: CategoryDraft) -> StoreResult<Category> {
        draft.validate()?;
        let mut state = self.lock();
        let id = state
            .dataset
            .allocate_id()
            .ok_or(StoreError::IdSpaceExhausted)?;
        let category = draft.into_category(id);
        state.dataset.categories.push(category.clone());
        self.flush(&state.dataset)?;
        tracing::debug!(id, "category created");
        Ok(category)
    }

    /// Replace a category's name and order, keeping its position.
    pub fn update_category(&self, id: EntityId, draft: CategoryDraft) -> StoreResult<Category> {
        draft.validate()?;
        let mut state = self.lock();
        let idx = state
            .dataset
            .category_index(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Category, id))?;
        let category = draft.into_category(id);
        state.dataset.categories[idx] = category.clone();
        self.flush(&state.dataset)?;
        tracing::debug!(id, "category updated");
        Ok(category)
    }

    /// Remove a category and detach every item that pointed at it.
    pub fn delete_category(&self, id: EntityId) -> StoreResult<()> {
        let mut state = self.lock();
        let idx = state
            .dataset
            .category_index(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Category, id))?;
        state.dataset.categories.remove(idx);
        let detached = state.dataset.detach_category(id);
        self.flush(&state.dataset)?;
        tracing::debug!(id, detached, "category deleted");
        Ok(())
    }

    /// Add an item. `category_id` is stored as given, even if it names no
    /// existing category.
    pub fn create_item(&self, draft: ItemDraft) -> StoreResult<Item> {
        draft.validate()?;
        let mut state = self.lock();
        let id = state
            .dataset
            .allocate_id()
            .ok_or(StoreError::IdSpaceExhausted)?;
        let item = draft.into_item(id);
        state.dataset.items.push(item.clone());
        self.flush(&state.dataset)?;
        tracing::debug!(id, "item created");
        Ok(item)
    }

    pub fn update_item(&self, id: EntityId, draft: ItemDraft) -> StoreResult<Item> {
        draft.validate()?;
        let mut state = self.lock();
        let idx = state
            .dataset
            .item_index(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Item, id))?;
        let item = draft.into_item(id);
        state.dataset.items[idx] = item.clone();
        self.flush(&state.dataset)?;
        tracing::debug!(id, "item updated");
        Ok(item)
    }

    pub fn delete_item(&self, id: EntityId) -> StoreResult<()> {
        let mut state = self.lock();
        let idx = state
            .dataset
            .item_index(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Item, id))?;
        state.dataset.items.remove(idx);
        self.flush(&state.dataset)?;
        tracing::debug!(id, "item deleted");
        Ok(())
    }
}
