//! 短码映射存储
//!
//! 进程内存储，进程退出即丢失，没有持久化。

use bytes::Bytes;
use std::sync::Arc;

pub mod memory;

pub use memory::MemoryStore;

/// 短码 → 原始 URL 的映射存储
///
/// URL 按请求体原样保存为字节，不要求是合法 UTF-8。
///
/// 每个操作各自持锁，`generate → insert` 这一组合并不是原子的：
/// 两个并发的创建请求如果拿到同一个短码，后写入者会覆盖前者。
pub trait UrlStore: Send + Sync {
    /// 写入映射，已存在的同名短码会被静默覆盖
    fn insert(&self, key: String, url: Bytes);

    /// 按短码查找原始 URL
    fn lookup(&self, key: &str) -> Option<Bytes>;

    /// 当前映射数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct StoreFactory;

impl StoreFactory {
    /// 创建一个新的空存储，由组合根持有并注入到各个 handler
    pub fn create() -> Arc<dyn UrlStore> {
        Arc::new(MemoryStore::new())
    }
}
