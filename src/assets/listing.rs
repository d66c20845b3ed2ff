/// Public image folder listing
///
/// Each site section (gallery, carousel, shows, ...) reads its images from a
/// folder under the public content root. Listing never fails: a missing or
/// unreadable folder simply yields no images and the section falls back to
/// placeholder URLs.

use std::path::Path;
use walkdir::WalkDir;

/// Image file extensions served from the public root
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Section folders scanned at startup, relative to the public root
pub const SECTION_FOLDERS: [&str; 8] = [
    "images/gallery",
    "images/carousel",
    "images/shows",
    "images/timeline",
    "images/about",
    "images/social",
    "images/testimonials",
    "images/merchandise",
];

/// List the image files of one section folder
///
/// Scans a single directory level of `public_root/folder`, keeps files with
/// a known image extension (case-insensitive), and returns their web-style
/// paths (`/{folder}/{filename}`) sorted by file name so the listing order
/// is deterministic across platforms.
///
/// # Returns
/// * Paths relative to the public root; empty when the folder is missing
pub fn list_images(public_root: &Path, folder: &str) -> Vec<String> {
    let full_path = public_root.join(folder);

    if !full_path.is_dir() {
        eprintln!(
            "⚠️  Directory {} does not exist under {}",
            folder,
            public_root.display()
        );
        return Vec::new();
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(&full_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Keep only recognized image files
        if let Some(extension) = path.extension() {
            let ext = extension.to_string_lossy().to_lowercase();
            if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }
        } else {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        images.push(format!("/{folder}/{file_name}"));
    }

    images
}

/// Pick an image for the item at `index`, cycling when the folder has fewer
/// images than items (empty listings yield `None` and the caller falls back
/// to a placeholder URL)
pub fn cycled(images: &[String], index: usize) -> Option<&str> {
    if images.is_empty() {
        None
    } else {
        Some(images[index % images.len()].as_str())
    }
}
