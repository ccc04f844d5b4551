//! Item types table.
//!
//! The catalog of scannable item kinds. Weight is in kilograms, the three
//! size axes in centimeters; both are informational only, the engine never
//! computes with them.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An item type snapshot as exposed by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub weight: f64,
    pub size_x: f64,
    pub size_y: f64,
    pub size_z: f64,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub weight: f64,
    #[sea_orm(column_type = "Double")]
    pub size_x: f64,
    #[sea_orm(column_type = "Double")]
    pub size_y: f64,
    #[sea_orm(column_type = "Double")]
    pub size_z: f64,
    pub category_id: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Categories,
    #[sea_orm(has_many = "super::stock_lines::Entity")]
    StockLines,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::stock_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ItemType {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            weight: model.weight,
            size_x: model.size_x,
            size_y: model.size_y,
            size_z: model.size_z,
            category_id: model.category_id,
            created_at: model.created_at,
        }
    }
}
