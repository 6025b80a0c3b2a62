//! Catalog - the gallery's image tree
//!
//! Mirrors a `static/images/` directory: top-level directories are
//! categories, `<category>/<item>.<ext>` files are item thumbnails and
//! `<category>/<item>/` directories hold the item's images plus an
//! optional `description.txt`. Directories are implied by the paths
//! of the files inside them.

pub mod builtins;
pub mod error;
pub mod item;

use std::collections::BTreeMap;

pub use error::CatalogError;
pub use item::{CategoryEntry, CategoryPage, ItemPage, ItemRef};

/// URL prefix the host serves the image tree under
pub const IMAGE_ROOT: &str = "/static/images";
pub const THUMBNAIL_FILE: &str = "thumbnail.jpg";
pub const DESCRIPTION_FILE: &str = "description.txt";
pub const NO_DESCRIPTION: &str = "No description available.";

/// One child of a directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// File path -> text contents (only kept for text files)
    files: BTreeMap<String, Option<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the built-in gallery
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        builtins::seed(&mut catalog);
        catalog
    }

    pub fn add_file(&mut self, path: &str) {
        self.files.insert(normalize(path), None);
    }

    pub fn add_text(&mut self, path: &str, contents: &str) {
        self.files.insert(normalize(path), Some(contents.to_string()));
    }

    /// Children of `dir`, sorted by name. `""` is the root.
    ///
    /// `None` when no file lives under `dir`.
    pub fn read_dir(&self, dir: &str) -> Option<Vec<DirEntry>> {
        let dir = normalize(dir);
        let prefix = if dir.is_empty() { String::new() } else { format!("{dir}/") };

        let mut entries: BTreeMap<&str, bool> = BTreeMap::new();
        for path in self.files.keys() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((child, _)) => {
                    entries.insert(child, true);
                }
                None => {
                    entries.entry(rest).or_insert(false);
                }
            }
        }

        if entries.is_empty() && !dir.is_empty() {
            return None;
        }
        Some(
            entries
                .into_iter()
                .map(|(name, is_dir)| DirEntry { name: name.to_string(), is_dir })
                .collect(),
        )
    }

    pub fn read_text(&self, path: &str) -> Option<&str> {
        self.files.get(&normalize(path))?.as_deref()
    }

    /// Names of all categories
    pub fn categories(&self) -> Vec<String> {
        self.read_dir("")
            .unwrap_or_default()
            .into_iter()
            .filter(|e| e.is_dir)
            .map(|e| e.name)
            .collect()
    }

    /// Items of one category, named after their thumbnail files
    pub fn category(&self, category: &str) -> Result<CategoryPage, CatalogError> {
        let entries = self
            .read_dir(category)
            .ok_or_else(|| CatalogError::CategoryNotFound(category.to_string()))?;

        let items = entries
            .into_iter()
            .filter(|e| !e.is_dir)
            .map(|e| CategoryEntry {
                name: trim_ext(&e.name).to_string(),
                thumbnail: format!("{IMAGE_ROOT}/{category}/{}", e.name),
            })
            .collect();

        Ok(CategoryPage { category: category.to_string(), items })
    }

    /// Images and description of one item
    pub fn item(&self, item: &ItemRef) -> Result<ItemPage, CatalogError> {
        let dir = format!("{}/{}", item.category, item.item);
        let entries = self.read_dir(&dir).ok_or_else(|| CatalogError::ItemNotFound {
            category: item.category.clone(),
            item: item.item.clone(),
        })?;

        let images = entries
            .into_iter()
            .filter(|e| !e.is_dir && e.name != THUMBNAIL_FILE && e.name != DESCRIPTION_FILE)
            .map(|e| e.name)
            .collect();

        let description = match self.read_text(&format!("{dir}/{DESCRIPTION_FILE}")) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(item = %dir, "no description.txt, using placeholder");
                NO_DESCRIPTION.to_string()
            }
        };

        Ok(ItemPage {
            category: item.category.clone(),
            item: item.item.clone(),
            description,
            images,
        })
    }
}

/// URL of one image inside an item directory
pub fn image_url(category: &str, item: &str, file: &str) -> String {
    format!("{IMAGE_ROOT}/{category}/{item}/{file}")
}

/// Drop the extension after the final dot of the file name
pub fn trim_ext(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

fn normalize(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut c = Catalog::new();
        c.add_file("rings/silver-band.jpg");
        c.add_file("rings/silver-band/thumbnail.jpg");
        c.add_file("rings/silver-band/front.jpg");
        c.add_file("rings/silver-band/angle.jpg");
        c.add_text("rings/silver-band/description.txt", "Hand-polished sterling silver.");
        c.add_file("rings/gold-twist.png");
        c.add_file("rings/gold-twist/side.png");
        c.add_file("bowls/oak.jpg");
        c.add_file("readme.txt");
        c
    }

    #[test]
    fn categories_are_sorted_directories() {
        assert_eq!(sample().categories(), vec!["bowls", "rings"]);
    }

    #[test]
    fn empty_catalog_has_no_categories() {
        assert!(Catalog::new().categories().is_empty());
    }

    #[test]
    fn read_dir_marks_directories() {
        let entries = sample().read_dir("rings").unwrap();
        let names: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.is_dir)).collect();
        assert_eq!(
            names,
            vec![
                ("gold-twist", true),
                ("gold-twist.png", false),
                ("silver-band", true),
                ("silver-band.jpg", false),
            ]
        );
    }

    #[test]
    fn category_lists_files_without_extension() {
        let page = sample().category("rings").unwrap();
        let names: Vec<_> = page.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["gold-twist", "silver-band"]);
        assert_eq!(page.items[1].thumbnail, "/static/images/rings/silver-band.jpg");
    }

    #[test]
    fn unknown_category() {
        let err = sample().category("vases").unwrap_err();
        assert_eq!(err, CatalogError::CategoryNotFound("vases".into()));
    }

    #[test]
    fn item_skips_thumbnail_and_description() {
        let page = sample().item(&ItemRef::new("rings", "silver-band")).unwrap();
        assert_eq!(page.images, vec!["angle.jpg", "front.jpg"]);
        assert_eq!(page.description, "Hand-polished sterling silver.");
    }

    #[test]
    fn item_without_description_uses_placeholder() {
        let page = sample().item(&ItemRef::new("rings", "gold-twist")).unwrap();
        assert_eq!(page.images, vec!["side.png"]);
        assert_eq!(page.description, NO_DESCRIPTION);
    }

    #[test]
    fn unknown_item() {
        let err = sample().item(&ItemRef::new("bowls", "oak")).unwrap_err();
        assert!(matches!(err, CatalogError::ItemNotFound { .. }));
    }

    #[test]
    fn trim_ext_uses_final_dot() {
        assert_eq!(trim_ext("a.tar.gz"), "a.tar");
        assert_eq!(trim_ext("plain"), "plain");
        assert_eq!(trim_ext(".hidden"), "");
    }

    #[test]
    fn image_urls() {
        assert_eq!(
            image_url("rings", "gold-twist", "side.png"),
            "/static/images/rings/gold-twist/side.png"
        );
    }

    #[test]
    fn paths_are_normalized() {
        let mut c = Catalog::new();
        c.add_text("/vases//tall/description.txt", "Tall.");
        assert_eq!(c.read_text("vases/tall/description.txt"), Some("Tall."));
        assert_eq!(c.categories(), vec!["vases"]);
    }
}
