use sea_orm::{DatabaseConnection, DatabaseTransaction, prelude::*};
use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

mod categories;
mod item_types;
mod movements;
mod stock;
mod warehouses;

pub use movements::AppliedMovement;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// The inventory engine.
///
/// Owns the database handle and exposes the movement, stock, and lookup
/// operations. Decoding and filter parsing are pure associated functions;
/// every mutation runs inside its own scoped transaction.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub(crate) fn database(&self) -> &DatabaseConnection {
        &self.database
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.nfkc().collect())
}

async fn require_warehouse(
    db_tx: &DatabaseTransaction,
    id: i64,
) -> ResultEngine<crate::warehouses::Model> {
    crate::warehouses::Entity::find_by_id(id)
        .one(db_tx)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("warehouse {id} not exists")))
}

async fn require_category(
    db_tx: &DatabaseTransaction,
    id: i64,
) -> ResultEngine<crate::categories::Model> {
    crate::categories::Entity::find_by_id(id)
        .one(db_tx)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("category {id} not exists")))
}

async fn require_item_type(
    db_tx: &DatabaseTransaction,
    id: i64,
) -> ResultEngine<crate::item_types::Model> {
    crate::item_types::Entity::find_by_id(id)
        .one(db_tx)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("item type {id} not exists")))
}

async fn require_stock_line(
    db_tx: &DatabaseTransaction,
    id: i64,
) -> ResultEngine<crate::stock_lines::Model> {
    crate::stock_lines::Entity::find_by_id(id)
        .one(db_tx)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("stock line {id} not exists")))
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
