use anyhow::{anyhow, Context as _};

use super::StorageBackend;

/// The browser's `localStorage`, shared by every tab on the same origin
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserBackend;

fn local_storage() -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
        .context("no window available")?
        .local_storage()
        .map_err(|e| anyhow!("local storage access refused: {e:?}"))?
        .context("local storage is not available")
}

impl StorageBackend for BrowserBackend {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| anyhow!("failed to read {key:?}: {e:?}"))
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("failed to write {key:?}: {e:?}"))
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| anyhow!("failed to remove {key:?}: {e:?}"))
    }
}
