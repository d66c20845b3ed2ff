/// Catalog module
///
/// This module holds the site's static catalog:
/// - Merchandise products and upcoming shows (data.rs)
///
/// The catalog is a fixed, read-only input to the order and pricing code;
/// nothing here is persisted or mutated at runtime.

pub mod data;
