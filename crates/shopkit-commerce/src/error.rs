//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product constructed with a price below zero.
    #[error("Negative price for product: {0}")]
    NegativePrice(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not owned by the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Category id already owned by the catalog.
    #[error("Category already in catalog: {0}")]
    DuplicateCategory(String),

    /// Product appended to a category other than the one it records.
    #[error("Product {product} belongs to category {expected}, not {actual}")]
    CategoryMismatch {
        product: String,
        expected: String,
        actual: String,
    },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in quantity or money calculation")]
    Overflow,

    /// Seed configuration is structurally invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Writing a report failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
