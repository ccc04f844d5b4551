use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{ItemType, NewItemType, ResultEngine, item_types};

use super::{Engine, normalize_required_name, require_category, require_item_type, with_tx};

impl Engine {
    /// Create an item type and return its id.
    pub async fn new_item_type(&self, cmd: NewItemType) -> ResultEngine<i64> {
        let name = normalize_required_name(&cmd.name, "item type")?;
        with_tx!(self, |db_tx| {
            require_category(&db_tx, cmd.category_id).await?;

            let active = item_types::ActiveModel {
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(cmd.description),
                weight: ActiveValue::Set(cmd.weight),
                size_x: ActiveValue::Set(cmd.size_x),
                size_y: ActiveValue::Set(cmd.size_y),
                size_z: ActiveValue::Set(cmd.size_z),
                category_id: ActiveValue::Set(cmd.category_id),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };
            let inserted = active.insert(&db_tx).await?;
            Ok(inserted.id)
        })
    }

    /// Return an item type snapshot.
    pub async fn item_type(&self, id: i64) -> ResultEngine<ItemType> {
        with_tx!(self, |db_tx| {
            let model = require_item_type(&db_tx, id).await?;
            Ok(model.into())
        })
    }

    /// List all item types, ordered by id.
    pub async fn list_item_types(&self) -> ResultEngine<Vec<ItemType>> {
        let models = item_types::Entity::find()
            .order_by_asc(item_types::Column::Id)
            .all(self.database())
            .await?;
        Ok(models.into_iter().map(ItemType::from).collect())
    }

    /// Overwrite an existing item type's fields. `created_at` is untouched.
    pub async fn update_item_type(&self, id: i64, cmd: NewItemType) -> ResultEngine<()> {
        let name = normalize_required_name(&cmd.name, "item type")?;
        with_tx!(self, |db_tx| {
            require_item_type(&db_tx, id).await?;
            require_category(&db_tx, cmd.category_id).await?;

            let active = item_types::ActiveModel {
                id: ActiveValue::Set(id),
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(cmd.description),
                weight: ActiveValue::Set(cmd.weight),
                size_x: ActiveValue::Set(cmd.size_x),
                size_y: ActiveValue::Set(cmd.size_y),
                size_z: ActiveValue::Set(cmd.size_z),
                category_id: ActiveValue::Set(cmd.category_id),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(())
        })
    }

    /// Delete an item type. Fails while stock lines still reference it.
    pub async fn remove_item_type(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            require_item_type(&db_tx, id).await?;
            item_types::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
