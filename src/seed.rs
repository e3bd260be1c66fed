//! Demo catalog seeding

use crate::catalog::model::{Category, MenuItem};
use crate::catalog::store::CatalogStore;
use crate::core::error::StorageError;
use chrono::Utc;
use uuid::Uuid;

fn item(
    name: &str,
    description: &str,
    category: Category,
    price: f64,
    ingredients: &[&str],
    preparation_time: u32,
) -> MenuItem {
    let now = Utc::now();
    MenuItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: Some(description.to_string()),
        category,
        price,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        is_available: true,
        preparation_time,
        image_url: None,
        created_at: now,
        updated_at: now,
    }
}

/// Populate the catalog with a small demo menu, returning the item count
pub async fn seed_catalog(catalog: &dyn CatalogStore) -> Result<usize, StorageError> {
    let items = vec![
        item(
            "Paneer Tikka",
            "Marinated cottage cheese cubes grilled in tandoor with spices",
            Category::Appetizer,
            299.0,
            &["Paneer", "Yogurt", "Spices", "Bell Peppers", "Onions"],
            15,
        ),
        item(
            "Samosa (2 pcs)",
            "Crispy pastry filled with spiced potatoes and peas",
            Category::Appetizer,
            99.0,
            &["Potatoes", "Peas", "Cumin", "Coriander", "Green Chili"],
            10,
        ),
        item(
            "Butter Chicken",
            "Tender chicken in rich tomato-butter gravy with cream",
            Category::MainCourse,
            449.0,
            &["Chicken", "Tomatoes", "Butter", "Cream", "Kasuri Methi"],
            30,
        ),
        item(
            "Paneer Butter Masala",
            "Cottage cheese cubes in creamy tomato gravy",
            Category::MainCourse,
            349.0,
            &["Paneer", "Tomatoes", "Cream", "Butter", "Cashews"],
            25,
        ),
        item(
            "Dal Makhani",
            "Black lentils slow-cooked with butter and cream overnight",
            Category::MainCourse,
            299.0,
            &["Black Urad Dal", "Kidney Beans", "Butter", "Cream", "Tomatoes"],
            20,
        ),
        item(
            "Gulab Jamun (2 pcs)",
            "Soft milk dumplings soaked in rose-cardamom syrup",
            Category::Dessert,
            129.0,
            &["Khoya", "Sugar", "Rose Water", "Cardamom"],
            5,
        ),
        item(
            "Masala Chai",
            "Spiced milk tea brewed with ginger and cardamom",
            Category::Beverage,
            49.0,
            &["Tea Leaves", "Milk", "Ginger", "Cardamom"],
            5,
        ),
        item(
            "Mango Lassi",
            "Thick yogurt shake blended with mango pulp",
            Category::Beverage,
            119.0,
            &["Yogurt", "Mango", "Sugar", "Cardamom"],
            5,
        ),
    ];

    let count = items.len();
    for item in items {
        catalog.insert(item).await?;
    }
    tracing::info!(count, "seeded demo catalog");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::InMemoryCatalog;
    use crate::catalog::store::MenuFilter;

    #[tokio::test]
    async fn test_seed_populates_all_categories() {
        let catalog = InMemoryCatalog::new();
        let count = seed_catalog(&catalog).await.unwrap();
        assert_eq!(count, 8);

        for category in Category::ALL {
            let filter = MenuFilter {
                category: Some(category),
                ..Default::default()
            };
            assert!(
                !catalog.list(&filter).await.unwrap().is_empty(),
                "no items in {}",
                category
            );
        }
    }
}
