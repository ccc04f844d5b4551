use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{Category, NewCategory, ResultEngine, categories};

use super::{Engine, normalize_required_name, require_category, with_tx};

impl Engine {
    /// Create a category and return its id.
    pub async fn new_category(&self, cmd: NewCategory) -> ResultEngine<i64> {
        let name = normalize_required_name(&cmd.name, "category")?;
        with_tx!(self, |db_tx| {
            if let Some(parent_id) = cmd.parent_id {
                require_category(&db_tx, parent_id).await?;
            }

            let active = categories::ActiveModel {
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(cmd.description),
                parent_id: ActiveValue::Set(cmd.parent_id),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };
            let inserted = active.insert(&db_tx).await?;
            Ok(inserted.id)
        })
    }

    /// Return a category snapshot.
    pub async fn category(&self, id: i64) -> ResultEngine<Category> {
        with_tx!(self, |db_tx| {
            let model = require_category(&db_tx, id).await?;
            Ok(model.into())
        })
    }

    /// List all categories, ordered by id.
    pub async fn list_categories(&self) -> ResultEngine<Vec<Category>> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(self.database())
            .await?;
        Ok(models.into_iter().map(Category::from).collect())
    }

    /// Overwrite an existing category's fields. `created_at` is untouched.
    pub async fn update_category(&self, id: i64, cmd: NewCategory) -> ResultEngine<()> {
        let name = normalize_required_name(&cmd.name, "category")?;
        with_tx!(self, |db_tx| {
            require_category(&db_tx, id).await?;
            if let Some(parent_id) = cmd.parent_id {
                require_category(&db_tx, parent_id).await?;
            }

            let active = categories::ActiveModel {
                id: ActiveValue::Set(id),
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(cmd.description),
                parent_id: ActiveValue::Set(cmd.parent_id),
                ..Default::default()
            };
            active.update(&db_tx).await?;
            Ok(())
        })
    }

    /// Delete a category. Fails while item types still reference it.
    pub async fn remove_category(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            require_category(&db_tx, id).await?;
            categories::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
