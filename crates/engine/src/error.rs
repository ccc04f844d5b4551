//! The module contains the error the engine can throw.
//!
//! Decode and parse failures ([`MalformedCode`], [`InvalidKind`],
//! [`InvalidField`], [`InvalidAttribute`], [`MalformedFilter`]) are pure
//! functions of the input and never leave partial state behind. Ledger
//! failures ([`KeyNotFound`], [`InvalidQuantity`], [`UnsupportedKind`]) roll
//! the surrounding transaction back.
//!
//! [`MalformedCode`]: EngineError::MalformedCode
//! [`InvalidKind`]: EngineError::InvalidKind
//! [`InvalidField`]: EngineError::InvalidField
//! [`InvalidAttribute`]: EngineError::InvalidAttribute
//! [`MalformedFilter`]: EngineError::MalformedFilter
//! [`KeyNotFound`]: EngineError::KeyNotFound
//! [`InvalidQuantity`]: EngineError::InvalidQuantity
//! [`UnsupportedKind`]: EngineError::UnsupportedKind
use sea_orm::DbErr;
use thiserror::Error;

use crate::MovementKind;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("malformed movement code: {0}")]
    MalformedCode(String),
    #[error("invalid movement kind: \"{0}\"")]
    InvalidKind(String),
    #[error("field \"{0}\" must be numeric")]
    InvalidField(&'static str),
    #[error("malformed attribute: \"{0}\"")]
    InvalidAttribute(String),
    #[error("malformed filter: {0}")]
    MalformedFilter(String),
    #[error("no mutation defined for movement kind \"{0}\"")]
    UnsupportedKind(MovementKind),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedCode(a), Self::MalformedCode(b)) => a == b,
            (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::InvalidField(a), Self::InvalidField(b)) => a == b,
            (Self::InvalidAttribute(a), Self::InvalidAttribute(b)) => a == b,
            (Self::MalformedFilter(a), Self::MalformedFilter(b)) => a == b,
            (Self::UnsupportedKind(a), Self::UnsupportedKind(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidQuantity(a), Self::InvalidQuantity(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
