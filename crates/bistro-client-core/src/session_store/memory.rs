use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use anyhow::bail;

use super::StorageBackend;

/// Process local storage
///
/// Clones share the same values, which lets a new [`super::SessionStore`] be
/// loaded from what a previous one wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    /// Makes every following write fail, used to simulate a full or
    /// unavailable storage
    pub fn fail_writes(&self, value: bool) {
        self.inner.lock().expect("mutex poisoned").fail_writes = value;
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self
            .inner
            .lock()
            .expect("mutex poisoned")
            .values
            .get(key)
            .cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        if guard.fail_writes {
            bail!("memory backend is set to reject writes");
        }
        guard.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        if guard.fail_writes {
            bail!("memory backend is set to reject writes");
        }
        guard.values.remove(key);
        Ok(())
    }
}
