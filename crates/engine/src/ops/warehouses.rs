use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{NewWarehouse, ResultEngine, Warehouse, warehouses};

use super::{Engine, normalize_required_name, require_warehouse, with_tx};

impl Engine {
    /// Create a warehouse and return its id.
    pub async fn new_warehouse(&self, cmd: NewWarehouse) -> ResultEngine<i64> {
        let name = normalize_required_name(&cmd.name, "warehouse")?;
        with_tx!(self, |db_tx| {
            let active = warehouses::ActiveModel {
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(cmd.description),
                location: ActiveValue::Set(cmd.location),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };
            let inserted = active.insert(&db_tx).await?;
            Ok(inserted.id)
        })
    }

    /// Return a warehouse snapshot.
    pub async fn warehouse(&self, id: i64) -> ResultEngine<Warehouse> {
        with_tx!(self, |db_tx| {
            let model = require_warehouse(&db_tx, id).await?;
            Ok(model.into())
        })
    }

    /// List all warehouses, ordered by id.
    pub async fn list_warehouses(&self) -> ResultEngine<Vec<Warehouse>> {
        let models = warehouses::Entity::find()
            .order_by_asc(warehouses::Column::Id)
            .all(self.database())
            .await?;
        Ok(models.into_iter().map(Warehouse::from).collect())
    }

    /// Overwrite an existing warehouse's fields. `created_at` is untouched.
    pub async fn update_warehouse(&self, id: i64, cmd: NewWarehouse) -> ResultEngine<()> {
        let name = normalize_required_name(&cmd.name, "warehouse")?;
        with_tx!(self, |db_tx| {
            require_warehouse(&db_tx, id).await?;

            let active = warehouses::ActiveModel {
                id: ActiveValue::Set(id),
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(cmd.description),
                location: ActiveValue::Set(cmd.location),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(())
        })
    }

    /// Delete a warehouse. Fails while stock lines still reference it.
    pub async fn remove_warehouse(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            require_warehouse(&db_tx, id).await?;
            warehouses::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
