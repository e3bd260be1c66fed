//! In-memory implementation of the catalog store
//!
//! Default backend for development and tests. Uses RwLock for thread-safe
//! access; a poisoned lock surfaces as a storage error rather than a panic.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::catalog::model::MenuItem;
use crate::catalog::store::{CatalogStore, MenuFilter};
use crate::core::error::StorageError;
use crate::core::query::SortOrder;

/// In-memory catalog store
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    items: Arc<RwLock<HashMap<Uuid, MenuItem>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Uuid, MenuItem>>, StorageError>
    {
        self.items
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, MenuItem>>, StorageError> {
        self.items
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }
}

fn sort_items(items: &mut [MenuItem], sort_by: Option<&str>, order: SortOrder) {
    match sort_by {
        Some("name") => items.sort_by(|a, b| order.apply(a.name.cmp(&b.name))),
        Some("price") => items.sort_by(|a, b| order.apply(a.price.total_cmp(&b.price))),
        Some("preparationTime") => {
            items.sort_by(|a, b| order.apply(a.preparation_time.cmp(&b.preparation_time)))
        }
        Some("createdAt") => items.sort_by(|a, b| order.apply(a.created_at.cmp(&b.created_at))),
        // Default: newest first, regardless of the order parameter
        _ => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn insert(&self, item: MenuItem) -> Result<MenuItem, StorageError> {
        self.write()?.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<MenuItem>, StorageError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn fetch_many(&self, ids: &[Uuid]) -> Result<Vec<MenuItem>, StorageError> {
        let items = self.read()?;
        Ok(ids.iter().filter_map(|id| items.get(id).cloned()).collect())
    }

    async fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, StorageError> {
        let mut items: Vec<MenuItem> = self
            .read()?
            .values()
            .filter(|item| {
                filter.category.is_none_or(|c| item.category == c)
                    && filter.is_available.is_none_or(|a| item.is_available == a)
                    && filter.min_price.is_none_or(|min| item.price >= min)
                    && filter.max_price.is_none_or(|max| item.price <= max)
            })
            .cloned()
            .collect();
        sort_items(&mut items, filter.sort_by.as_deref(), filter.order);
        Ok(items)
    }

    async fn search(&self, query: &str) -> Result<Vec<MenuItem>, StorageError> {
        let needle = query.to_lowercase();
        let mut items: Vec<MenuItem> = self
            .read()?
            .values()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
                    || item
                        .ingredients
                        .iter()
                        .any(|i| i.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn update(&self, id: &Uuid, item: MenuItem) -> Result<Option<MenuItem>, StorageError> {
        let mut items = self.write()?;
        if !items.contains_key(id) {
            return Ok(None);
        }
        items.insert(*id, item.clone());
        Ok(Some(item))
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<MenuItem>, StorageError> {
        Ok(self.write()?.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{Category, CreateMenuItem};

    fn item(name: &str, category: &str, price: f64, available: bool) -> MenuItem {
        let mut item = CreateMenuItem {
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            price: Some(price),
            ingredients: Some(vec!["salt".to_string()]),
            is_available: Some(available),
            preparation_time: None,
            image_url: None,
        }
        .into_item();
        // Stable ordering for createdAt-based assertions
        item.created_at = chrono::Utc::now() + chrono::Duration::milliseconds(price as i64);
        item
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryCatalog::new();
        let created = store
            .insert(item("Bruschetta", "Appetizer", 6.0, true))
            .await
            .unwrap();
        let fetched = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Bruschetta");
    }

    #[tokio::test]
    async fn test_fetch_many_returns_existing_subset() {
        let store = InMemoryCatalog::new();
        let a = store.insert(item("A", "Dessert", 4.0, true)).await.unwrap();
        let unknown = Uuid::new_v4();

        let found = store.fetch_many(&[a.id, unknown]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, a.id);
    }

    #[tokio::test]
    async fn test_list_filters_category_and_availability() {
        let store = InMemoryCatalog::new();
        store
            .insert(item("Soup", "Appetizer", 5.0, true))
            .await
            .unwrap();
        store
            .insert(item("Steak", "Main Course", 22.0, true))
            .await
            .unwrap();
        store
            .insert(item("Cake", "Dessert", 7.0, false))
            .await
            .unwrap();

        let filter = MenuFilter {
            category: Some(Category::Appetizer),
            ..Default::default()
        };
        let items = store.list(&filter).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Soup");

        let filter = MenuFilter {
            is_available: Some(false),
            ..Default::default()
        };
        let items = store.list(&filter).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Cake");
    }

    #[tokio::test]
    async fn test_list_price_range_and_sort() {
        let store = InMemoryCatalog::new();
        store.insert(item("A", "Dessert", 3.0, true)).await.unwrap();
        store.insert(item("B", "Dessert", 9.0, true)).await.unwrap();
        store
            .insert(item("C", "Dessert", 15.0, true))
            .await
            .unwrap();

        let filter = MenuFilter {
            min_price: Some(5.0),
            max_price: Some(20.0),
            sort_by: Some("price".to_string()),
            order: SortOrder::Asc,
            ..Default::default()
        };
        let items = store.list(&filter).await.unwrap();
        let prices: Vec<f64> = items.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![9.0, 15.0]);
    }

    #[tokio::test]
    async fn test_search_matches_name_and_ingredients() {
        let store = InMemoryCatalog::new();
        let mut garlicky = item("Garlic Bread", "Appetizer", 5.0, true);
        garlicky.ingredients = vec!["garlic".to_string(), "bread".to_string()];
        store.insert(garlicky).await.unwrap();
        let mut pasta = item("Spaghetti", "Main Course", 12.0, true);
        pasta.ingredients = vec!["pasta".to_string(), "garlic".to_string()];
        store.insert(pasta).await.unwrap();
        store
            .insert(item("Lemonade", "Beverage", 3.0, true))
            .await
            .unwrap();

        let hits = store.search("GARLIC").await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let store = InMemoryCatalog::new();
        let ghost = item("Ghost", "Dessert", 1.0, true);
        let result = store.update(&Uuid::new_v4(), ghost).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let store = InMemoryCatalog::new();
        let created = store.insert(item("Flan", "Dessert", 6.0, true)).await.unwrap();
        let removed = store.delete(&created.id).await.unwrap().unwrap();
        assert_eq!(removed.id, created.id);
        assert!(store.get(&created.id).await.unwrap().is_none());
    }
}
