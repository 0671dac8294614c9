use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use tracing::info;

use crate::{
    entity::{ApiIndex, Product},
    error::{Error, Result},
};

/// Source of the per-product API indexes.
pub trait IndexProvider: Send + Sync {
    fn index_for(&self, product: &Product) -> Result<Arc<ApiIndex>>;
}

/// Loads `<root>/<product>.json`.
#[derive(Debug, Clone)]
pub struct FileIndexProvider {
    root: PathBuf,
}

impl FileIndexProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self, product: &Product) -> PathBuf {
        self.root.join(format!("{}.json", product))
    }

    /// Products with an index file under the root, sorted by name.
    pub async fn products(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| Error::index_dir(&self.root, e))?;
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| Error::index_dir(&self.root, e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    products.push(Product::new(stem.to_string_lossy()));
                }
            }
        }
        products.sort();
        Ok(products)
    }
}

/// A product names a single file in the root, never a path.
fn is_plain_product_name(name: &str) -> bool {
    !name.contains(['/', '\\'])
        && matches!(
            Path::new(name).components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        )
}

impl IndexProvider for FileIndexProvider {
    fn index_for(&self, product: &Product) -> Result<Arc<ApiIndex>> {
        if !is_plain_product_name(product.as_str()) {
            return Err(Error::index_unavailable(product, "invalid product name"));
        }
        let path = self.index_path(product);
        let payload = std::fs::read(&path).map_err(|e| {
            Error::index_unavailable(product, format!("read {}: {}", path.display(), e))
        })?;
        let index = ApiIndex::from_json(&payload).map_err(|e| {
            Error::index_unavailable(product, format!("parse {}: {}", path.display(), e))
        })?;
        info!(%product, path = %path.display(), records = index.len(), "loaded api index");
        Ok(Arc::new(index))
    }
}

/// Indexes held in memory, keyed by product.
#[derive(Debug, Default, Clone)]
pub struct StaticIndexProvider {
    indexes: HashMap<Product, Arc<ApiIndex>>,
}

impl StaticIndexProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, product: impl Into<Product>, index: ApiIndex) -> Self {
        self.indexes.insert(product.into(), Arc::new(index));
        self
    }
}

impl IndexProvider for StaticIndexProvider {
    fn index_for(&self, product: &Product) -> Result<Arc<ApiIndex>> {
        self.indexes
            .get(product)
            .cloned()
            .ok_or_else(|| Error::index_unavailable(product, "unknown product"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entity::EntityKind;

    #[test]
    fn file_provider_loads_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("hack.json"),
            r#"{"class": [{"name": "Vector", "urlPath": "/ref/Vector"}]}"#,
        )
        .unwrap();

        let provider = FileIndexProvider::new(dir.path());
        let index = provider.index_for(&Product::from("hack")).unwrap();
        assert_eq!(index.class_index(EntityKind::Class)[0].name, "Vector");
    }

    #[test]
    fn file_provider_missing_product() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileIndexProvider::new(dir.path());
        let err = provider.index_for(&Product::from("hsl")).unwrap_err();
        assert!(matches!(err, Error::IndexUnavailable { ref product, .. } if product.as_str() == "hsl"));
    }

    #[test]
    fn file_provider_rejects_paths_outside_root() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("indexes");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("hack.json"), "{}").unwrap();
        std::fs::write(
            outer.path().join("secret.json"),
            r#"{"function": [{"name": "leak", "urlPath": "/x"}]}"#,
        )
        .unwrap();

        let provider = FileIndexProvider::new(&root);
        for name in ["../secret", "../x", "..", "a/b", "a\\b", "/etc/passwd", ""] {
            let err = provider.index_for(&Product::from(name)).unwrap_err();
            assert!(
                matches!(err, Error::IndexUnavailable { ref reason, .. } if reason == "invalid product name"),
                "{name}: {err}"
            );
        }
        assert!(provider.index_for(&Product::from("hack")).is_ok());
    }

    #[tokio::test]
    async fn file_provider_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileIndexProvider::new(dir.path().join("missing"));
        let err = provider.products().await.unwrap_err();
        assert!(matches!(err, Error::IndexDir { .. }));
    }

    #[test]
    fn file_provider_malformed_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hack.json"), "{ not json").unwrap();
        let provider = FileIndexProvider::new(dir.path());
        let err = provider.index_for(&Product::from("hack")).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[tokio::test]
    async fn file_provider_lists_products() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["hsl.json", "hack.json", "notes.txt"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        let provider = FileIndexProvider::new(dir.path());
        assert_eq!(
            provider.products().await.unwrap(),
            vec![Product::from("hack"), Product::from("hsl")]
        );
    }

    #[test]
    fn static_provider_unknown_product() {
        let provider = StaticIndexProvider::new().with_index("hack", ApiIndex::new());
        assert!(provider.index_for(&Product::from("hack")).is_ok());
        assert!(matches!(
            provider.index_for(&Product::from("php")),
            Err(Error::IndexUnavailable { .. })
        ));
    }
}
