/// Site asset handling module
///
/// This module handles:
/// - Listing image files from the public content root (listing.rs)
/// - Deriving display categories and captions from filenames (metadata.rs)

pub mod listing;
pub mod metadata;
