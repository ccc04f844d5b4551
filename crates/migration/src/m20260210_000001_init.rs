//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for Stockroom:
//!
//! - `warehouses`: physical locations holding stock
//! - `categories`: item type grouping, optionally nested via `parent_id`
//! - `item_types`: catalog of scannable item kinds with physical dimensions
//! - `stock_lines`: the inventory ledger, one row per (item type, warehouse,
//!   quantity)

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Warehouses {
    Table,
    Id,
    Name,
    Description,
    Location,
    CreatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
    ParentId,
    CreatedAt,
}

#[derive(Iden)]
enum ItemTypes {
    Table,
    Id,
    Name,
    Description,
    Weight,
    SizeX,
    SizeY,
    SizeZ,
    CategoryId,
    CreatedAt,
}

#[derive(Iden)]
enum StockLines {
    Table,
    Id,
    ItemTypeId,
    WarehouseId,
    Quantity,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Warehouses
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Warehouses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Warehouses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Warehouses::Name).string().not_null())
                    .col(ColumnDef::new(Warehouses::Description).string().not_null())
                    .col(ColumnDef::new(Warehouses::Location).text().not_null())
                    .col(
                        ColumnDef::new(Warehouses::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Categories
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Description).string().not_null())
                    .col(ColumnDef::new(Categories::ParentId).big_integer())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-categories-parent_id")
                            .from(Categories::Table, Categories::ParentId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Item types
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(ItemTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ItemTypes::Name).string().not_null())
                    .col(ColumnDef::new(ItemTypes::Description).string().not_null())
                    .col(ColumnDef::new(ItemTypes::Weight).double().not_null())
                    .col(ColumnDef::new(ItemTypes::SizeX).double().not_null())
                    .col(ColumnDef::new(ItemTypes::SizeY).double().not_null())
                    .col(ColumnDef::new(ItemTypes::SizeZ).double().not_null())
                    .col(ColumnDef::new(ItemTypes::CategoryId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ItemTypes::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-item_types-category_id")
                            .from(ItemTypes::Table, ItemTypes::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-item_types-category_id")
                    .table(ItemTypes::Table)
                    .col(ItemTypes::CategoryId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Stock lines
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(StockLines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockLines::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StockLines::ItemTypeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StockLines::WarehouseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockLines::Quantity).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stock_lines-item_type_id")
                            .from(StockLines::Table, StockLines::ItemTypeId)
                            .to(ItemTypes::Table, ItemTypes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stock_lines-warehouse_id")
                            .from(StockLines::Table, StockLines::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_lines-warehouse_id")
                    .table(StockLines::Table)
                    .col(StockLines::WarehouseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_lines-item_type_id")
                    .table(StockLines::Table)
                    .col(StockLines::ItemTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(StockLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ItemTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Warehouses::Table).to_owned())
            .await?;

        Ok(())
    }
}
