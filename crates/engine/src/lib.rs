//! Stockroom engine: the movement code protocol and stock mutation ledger.
//!
//! Warehouses hold quantities of item types as stock lines; stock changes are
//! driven by scanning a compact `|`-delimited movement code. The engine
//! decodes codes into [`MovementRecord`]s, applies them transactionally
//! against the `stock_lines` table, and answers filtered inventory queries
//! decorated with item and category names.
//!
//! Presentation, authentication, and authorization live outside this crate:
//! callers are expected to have already checked permissions before invoking a
//! mutation.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), engine::EngineError> {
//! use engine::{Engine, StockFilter};
//!
//! let db = sea_orm::Database::connect("sqlite::memory:").await?;
//! let engine = Engine::builder().database(db).build().await?;
//!
//! // Inbound: 10 units of item type 2 into warehouse 3.
//! engine.scan("1|2|0|3|10|0|color:red;size:L;").await?;
//!
//! let filter = Engine::parse_filter("warehouses=3;items=all;categories=all")?;
//! let rows = engine.query_stock(&filter).await?;
//! # let _ = rows;
//! # Ok(())
//! # }
//! ```

pub use categories::Category;
pub use commands::{NewCategory, NewItemType, NewWarehouse};
pub use error::EngineError;
pub use filter::StockFilter;
pub use item_types::ItemType;
pub use movement::{MovementKind, MovementRecord};
pub use ops::{AppliedMovement, Engine, EngineBuilder};
pub use stock_lines::{StockLine, StockRow};
pub use warehouses::Warehouse;

mod categories;
mod commands;
mod error;
mod filter;
mod item_types;
mod movement;
mod ops;
mod stock_lines;
mod warehouses;

type ResultEngine<T> = Result<T, EngineError>;
