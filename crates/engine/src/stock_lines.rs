//! Stock lines table: the inventory ledger.
//!
//! One row per `(item type, warehouse, quantity)`. Lines are created by
//! inbound movements (never merged), relocated by transfers, and removed by
//! explicit deletes. Quantity is kept strictly positive by the engine.

use sea_orm::{FromQueryResult, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// A stock line as exposed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub id: i64,
    pub item_type_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
}

/// A stock line decorated with its item and category names, as returned by
/// filtered queries.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct StockRow {
    pub id: i64,
    pub item_type_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
    pub item_name: String,
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_type_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item_types::Entity",
        from = "Column::ItemTypeId",
        to = "super::item_types::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    ItemTypes,
    #[sea_orm(
        belongs_to = "super::warehouses::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouses::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Warehouses,
}

impl Related<super::item_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemTypes.def()
    }
}

impl Related<super::warehouses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StockLine {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            item_type_id: model.item_type_id,
            warehouse_id: model.warehouse_id,
            quantity: model.quantity,
        }
    }
}
