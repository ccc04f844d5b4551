use sea_orm::{
    ActiveValue, JoinType, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*,
};

use crate::{
    EngineError, ResultEngine, StockFilter, StockLine, StockRow, categories, item_types,
    stock_lines,
};

use super::{Engine, require_item_type, require_stock_line, require_warehouse, with_tx};

impl Engine {
    /// Parse a filter query string without touching storage.
    pub fn parse_filter(filter: &str) -> ResultEngine<StockFilter> {
        StockFilter::parse(filter)
    }

    /// Return stock lines matching the filter, decorated with item and
    /// category names, ordered by line id.
    ///
    /// Active filter fields become typed equality conditions; filter values
    /// never reach the query as text.
    pub async fn query_stock(&self, filter: &StockFilter) -> ResultEngine<Vec<StockRow>> {
        let mut query = stock_lines::Entity::find()
            .join(JoinType::InnerJoin, stock_lines::Relation::ItemTypes.def())
            .join(JoinType::InnerJoin, item_types::Relation::Categories.def())
            .column_as(item_types::Column::Name, "item_name")
            .column_as(categories::Column::Name, "category_name")
            .order_by_asc(stock_lines::Column::Id);

        if let Some(warehouse_id) = filter.warehouse_id {
            query = query.filter(stock_lines::Column::WarehouseId.eq(warehouse_id));
        }
        if let Some(item_type_id) = filter.item_type_id {
            query = query.filter(stock_lines::Column::ItemTypeId.eq(item_type_id));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(item_types::Column::CategoryId.eq(category_id));
        }

        let rows = query.into_model::<StockRow>().all(self.database()).await?;
        Ok(rows)
    }

    /// Return a single stock line snapshot.
    pub async fn stock_line(&self, id: i64) -> ResultEngine<StockLine> {
        let model = stock_lines::Entity::find_by_id(id)
            .one(self.database())
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("stock line {id} not exists")))?;
        Ok(model.into())
    }

    /// Create a new stock line and return its id.
    pub async fn add_line(
        &self,
        item_type_id: i64,
        warehouse_id: i64,
        quantity: i64,
    ) -> ResultEngine<i64> {
        if quantity <= 0 {
            return Err(EngineError::InvalidQuantity(format!(
                "quantity must be > 0, got {quantity}"
            )));
        }
        with_tx!(self, |db_tx| {
            require_item_type(&db_tx, item_type_id).await?;
            require_warehouse(&db_tx, warehouse_id).await?;

            let active = stock_lines::ActiveModel {
                item_type_id: ActiveValue::Set(item_type_id),
                warehouse_id: ActiveValue::Set(warehouse_id),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            };
            let inserted = active.insert(&db_tx).await?;
            Ok(inserted.id)
        })
    }

    /// Remove an existing stock line.
    pub async fn remove_line(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            require_stock_line(&db_tx, id).await?;
            stock_lines::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })
    }

    /// Reassign an existing stock line to another warehouse. Quantity and
    /// item type are untouched.
    pub async fn relocate(&self, id: i64, new_warehouse_id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            require_stock_line(&db_tx, id).await?;
            require_warehouse(&db_tx, new_warehouse_id).await?;

            let active = stock_lines::ActiveModel {
                id: ActiveValue::Set(id),
                warehouse_id: ActiveValue::Set(new_warehouse_id),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(())
        })
    }
}
