use serde::Serialize;

use crate::{EngineError, MovementKind, MovementRecord, ResultEngine};

use super::Engine;

/// The ledger mutation an applied movement performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedMovement {
    /// An inbound movement created a new stock line.
    Added { line_id: i64 },
    /// A transfer moved an existing line to another warehouse.
    Relocated { line_id: i64, warehouse_id: i64 },
}

impl Engine {
    /// Decode a movement code without touching the ledger.
    pub fn decode_movement(code: &str) -> ResultEngine<MovementRecord> {
        MovementRecord::decode(code)
    }

    /// Apply a decoded movement against the ledger, one transaction per call.
    ///
    /// - `Inbound` creates a new stock line of `quantity` units of
    ///   `item_type_id` in `to_warehouse_id`; lines are never merged.
    /// - `Transfer` relocates the line named by `specific_item_id` to
    ///   `to_warehouse_id`. The record's `item_type_id` and
    ///   `from_warehouse_id` are not cross-checked against the stored line.
    /// - `Outbound` and `Adjustment` decode fine but have no defined
    ///   mutation and fail with [`EngineError::UnsupportedKind`].
    ///
    /// The protocol carries no replay protection: the same record applied
    /// twice performs its mutation twice.
    pub async fn apply_movement(&self, record: &MovementRecord) -> ResultEngine<AppliedMovement> {
        match record.kind {
            MovementKind::Inbound => {
                let line_id = self
                    .add_line(record.item_type_id, record.to_warehouse_id, record.quantity)
                    .await?;
                Ok(AppliedMovement::Added { line_id })
            }
            MovementKind::Transfer => {
                self.relocate(record.specific_item_id, record.to_warehouse_id)
                    .await?;
                Ok(AppliedMovement::Relocated {
                    line_id: record.specific_item_id,
                    warehouse_id: record.to_warehouse_id,
                })
            }
            MovementKind::Outbound | MovementKind::Adjustment => {
                Err(EngineError::UnsupportedKind(record.kind))
            }
        }
    }

    /// Decode a movement code and apply it in one step.
    pub async fn scan(&self, code: &str) -> ResultEngine<AppliedMovement> {
        let record = MovementRecord::decode(code)?;
        self.apply_movement(&record).await
    }
}
