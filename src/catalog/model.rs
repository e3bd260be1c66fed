//! Menu item model and its creation/update payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::ValidationError;
use crate::core::validation::{check, max_length, non_negative, required_string};

/// Fixed set of menu categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Appetizer,
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::MainCourse,
        Category::Dessert,
        Category::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "Appetizer",
            Category::MainCourse => "Main Course",
            Category::Dessert => "Dessert",
            Category::Beverage => "Beverage",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A menu item as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    pub price: f64,
    pub ingredients: Vec<String>,
    pub is_available: bool,
    /// Preparation time in minutes
    pub preparation_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const DEFAULT_PREPARATION_TIME: u32 = 15;

/// Payload for creating a menu item
///
/// `category` arrives as a raw string so an unknown value surfaces as a field
/// violation instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItem {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    pub price: Option<f64>,
    pub ingredients: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub preparation_time: Option<u32>,
    pub image_url: Option<String>,
}

impl CreateMenuItem {
    /// Validate field constraints, collecting every violation
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = vec![
            required_string("name", &self.name, "Menu item name"),
            max_length("name", self.name.trim(), "Name", 100),
        ];
        if let Some(description) = &self.description {
            violations.push(max_length(
                "description",
                description.trim(),
                "Description",
                500,
            ));
        }
        violations.push(category_violation(&self.category));
        match self.price {
            Some(price) => violations.push(non_negative("price", price, "Price")),
            None => violations.push(Some(crate::core::error::FieldViolation::new(
                "price",
                "Price is required",
            ))),
        }
        check(violations)
    }

    /// Build a catalog record, assuming [`validate`](Self::validate) passed
    pub fn into_item(self) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            description: self.description.map(|d| d.trim().to_string()),
            category: Category::parse(&self.category).unwrap_or(Category::MainCourse),
            price: self.price.unwrap_or(0.0),
            ingredients: self
                .ingredients
                .unwrap_or_default()
                .into_iter()
                .map(|i| i.trim().to_string())
                .collect(),
            is_available: self.is_available.unwrap_or(true),
            preparation_time: self.preparation_time.unwrap_or(DEFAULT_PREPARATION_TIME),
            image_url: self.image_url.map(|u| u.trim().to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for updating a menu item; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub ingredients: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub preparation_time: Option<u32>,
    pub image_url: Option<String>,
}

impl UpdateMenuItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if let Some(name) = &self.name {
            violations.push(required_string("name", name, "Menu item name"));
            violations.push(max_length("name", name.trim(), "Name", 100));
        }
        if let Some(description) = &self.description {
            violations.push(max_length(
                "description",
                description.trim(),
                "Description",
                500,
            ));
        }
        if let Some(category) = &self.category {
            violations.push(category_violation(category));
        }
        if let Some(price) = self.price {
            violations.push(non_negative("price", price, "Price"));
        }
        check(violations)
    }

    /// Apply the patch to an existing record, assuming validation passed
    pub fn apply(self, item: &mut MenuItem) {
        if let Some(name) = self.name {
            item.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            item.description = Some(description.trim().to_string());
        }
        if let Some(category) = self.category.as_deref().and_then(Category::parse) {
            item.category = category;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(ingredients) = self.ingredients {
            item.ingredients = ingredients.into_iter().map(|i| i.trim().to_string()).collect();
        }
        if let Some(is_available) = self.is_available {
            item.is_available = is_available;
        }
        if let Some(preparation_time) = self.preparation_time {
            item.preparation_time = preparation_time;
        }
        if let Some(image_url) = self.image_url {
            item.image_url = Some(image_url.trim().to_string());
        }
        item.updated_at = Utc::now();
    }
}

fn category_violation(value: &str) -> Option<crate::core::error::FieldViolation> {
    if Category::parse(value).is_some() {
        None
    } else if value.trim().is_empty() {
        Some(crate::core::error::FieldViolation::new(
            "category",
            "Category is required",
        ))
    } else {
        Some(crate::core::error::FieldViolation::new(
            "category",
            format!("{} is not a valid category", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateMenuItem {
        CreateMenuItem {
            name: "Pad Thai".to_string(),
            description: Some("Stir-fried rice noodles".to_string()),
            category: "Main Course".to_string(),
            price: Some(12.5),
            ingredients: Some(vec!["rice noodles".to_string(), "peanuts".to_string()]),
            is_available: None,
            preparation_time: None,
            image_url: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_defaults_applied_on_create() {
        let item = valid_payload().into_item();
        assert!(item.is_available);
        assert_eq!(item.preparation_time, 15);
        assert_eq!(item.category, Category::MainCourse);
    }

    #[test]
    fn test_missing_name_and_price_collects_both() {
        let payload = CreateMenuItem {
            name: String::new(),
            price: None,
            ..valid_payload()
        };
        let err = payload.validate().unwrap_err();
        let ValidationError::FieldErrors(fields) = err;
        let fields: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"price"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let payload = CreateMenuItem {
            category: "Snack".to_string(),
            ..valid_payload()
        };
        let err = payload.validate().unwrap_err();
        assert!(err.to_string().contains("Snack is not a valid category"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let payload = CreateMenuItem {
            price: Some(-1.0),
            ..valid_payload()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_category_serializes_display_strings() {
        assert_eq!(
            serde_json::to_string(&Category::MainCourse).unwrap(),
            "\"Main Course\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"Beverage\"").unwrap(),
            Category::Beverage
        );
    }

    #[test]
    fn test_update_patch_preserves_unset_fields() {
        let mut item = valid_payload().into_item();
        let created = item.created_at;
        let patch = UpdateMenuItem {
            price: Some(14.0),
            ..Default::default()
        };
        patch.validate().unwrap();
        patch.apply(&mut item);
        assert_eq!(item.price, 14.0);
        assert_eq!(item.name, "Pad Thai");
        assert_eq!(item.created_at, created);
        assert!(item.updated_at >= created);
    }

    #[test]
    fn test_ingredients_never_null() {
        let payload = CreateMenuItem {
            ingredients: None,
            ..valid_payload()
        };
        let item = payload.into_item();
        assert!(item.ingredients.is_empty());
    }
}
