//! Command structs for engine operations.
//!
//! These types group parameters for the lookup-table write operations,
//! keeping call sites readable and avoiding long argument lists. The same
//! struct serves both create and update.

/// Create or update a warehouse.
#[derive(Clone, Debug, Default)]
pub struct NewWarehouse {
    pub name: String,
    pub description: String,
    /// Free-form `[longitude, latitude]` pair.
    pub location: String,
}

impl NewWarehouse {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Create or update a category.
#[derive(Clone, Debug, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub parent_id: Option<i64>,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn parent_id(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Create or update an item type.
#[derive(Clone, Debug)]
pub struct NewItemType {
    pub name: String,
    pub description: String,
    pub weight: f64,
    pub size_x: f64,
    pub size_y: f64,
    pub size_z: f64,
    pub category_id: i64,
}

impl NewItemType {
    #[must_use]
    pub fn new(name: impl Into<String>, category_id: i64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            weight: 0.0,
            size_x: 0.0,
            size_y: 0.0,
            size_z: 0.0,
            category_id,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn size(mut self, size_x: f64, size_y: f64, size_z: f64) -> Self {
        self.size_x = size_x;
        self.size_y = size_y;
        self.size_z = size_z;
        self
    }
}
