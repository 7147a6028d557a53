use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::UrlStore;

/// 单把互斥锁保护的 HashMap
///
/// 锁只在单次 `insert`/`lookup` 内持有，从不跨越整个请求。
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl UrlStore for MemoryStore {
    fn insert(&self, key: String, url: Bytes) {
        self.inner.lock().insert(key, url);
    }

    fn lookup(&self, key: &str) -> Option<Bytes> {
        self.inner.lock().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.inner.lock().len()
    }
}
