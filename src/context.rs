use std::path::Path;

use anyhow::bail;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::{cache::NavTreeCache, config::Config, provider::FileIndexProvider};

#[derive(Debug)]
pub struct Context {
    /// The configuration.
    pub config: Config,
    /// Nav tree builders, one per product.
    pub navs: NavTreeCache<FileIndexProvider>,
}

impl Context {
    /// Create a new context.
    pub fn new(config: Config) -> Self {
        let provider = FileIndexProvider::new(config.index_dir());
        let navs = NavTreeCache::new(provider);
        Self { config, navs }
    }

    /// Writes `value` as pretty JSON to `path`. The file is written next to
    /// the target first and renamed into place; on failure the temp file is
    /// removed.
    pub async fn write_json<T, P>(&self, path: P, value: &T) -> anyhow::Result<()>
    where
        T: Serialize,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let Some(filename) = path.file_name() else {
            bail!("Invalid output path {}", path.display());
        };
        let parent = path.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = parent.join(format!(
            ".{}.{}.tmp",
            filename.to_string_lossy(),
            std::process::id()
        ));
        let payload = serde_json::to_vec_pretty(value)?;

        let written = async {
            let mut tmpfile = tokio::fs::File::create(&tmp_path).await.map_err(|e| {
                anyhow::anyhow!("Create {}, err: {}", tmp_path.display(), e)
            })?;
            tmpfile.write_all(&payload).await?;
            tmpfile.flush().await?;
            drop(tmpfile);

            tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
                anyhow::anyhow!("Write {}, err: {}", path.display(), e)
            })?;
            Ok::<_, anyhow::Error>(())
        }
        .await;

        if written.is_err() {
            let _ = tokio::fs::remove_file(&tmp_path).await;
        }
        written?;
        Ok(())
    }
}
