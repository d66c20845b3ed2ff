/// Order state and pricing module
///
/// This module handles the mock storefront and ticketing flows:
/// - Cart state and mutation operations (cart.rs)
/// - Shipping/ticket-type tables and order totals (pricing.rs)
///
/// Every operation is a synchronous, in-memory transformation; nothing here
/// performs I/O or persists state.

pub mod cart;
pub mod pricing;

use thiserror::Error;

/// Recoverable failures reported by cart and pricing operations
///
/// None of these is fatal; the caller (the UI layer) decides how to present
/// them, and the order is left unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// The product declares size variants, so one must be selected
    #[error("a variant must be selected for {item}")]
    VariantRequired { item: String },

    /// Quantities are whole numbers of at least 1 (removal is a separate
    /// operation, so 0 is rejected rather than treated as delete)
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// A keyed lookup (shipping method, ticket type, product variant) missed.
    /// Unknown keys fail fast instead of silently falling back to a default.
    #[error("unknown {kind}: {key}")]
    NotFound { kind: &'static str, key: String },

    /// A line operation addressed a position outside the order
    #[error("no order line at index {index} (order has {len} lines)")]
    InvalidIndex { index: usize, len: usize },
}
