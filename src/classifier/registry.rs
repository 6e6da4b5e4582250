//! 已知分类登记表
//! 只用于列举，不影响匹配；只增不减，写入有锁保护

use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 已知分类集合
#[derive(Debug, Default)]
pub struct KnownCategories {
    inner: RwLock<BTreeSet<String>>,
}

impl KnownCategories {
    /// 以初始分类创建登记表
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: RwLock::new(categories.into_iter().map(Into::into).collect()),
        }
    }

    /// 登记分类，已存在时返回 false
    pub fn add(&self, category: &str) -> bool {
        let mut set = self.write();
        if set.contains(category) {
            return false;
        }
        set.insert(category.to_string())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.read().contains(category)
    }

    /// 按字典序返回全部分类
    pub fn sorted(&self) -> Vec<String> {
        self.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // 只插入不删除，锁中毒时沿用已有数据
    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<String>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<String>> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_add_is_idempotent() {
        let known = KnownCategories::new(["b", "a"]);
        assert!(known.add("c"));
        assert!(!known.add("c"));
        assert!(!known.add("a"));
        assert_eq!(known.sorted(), vec!["a", "b", "c"]);
        assert_eq!(known.len(), 3);
        assert!(known.contains("c"));
        assert!(!known.contains("d"));
    }

    #[test]
    fn test_default_is_empty() {
        let known = KnownCategories::default();
        assert!(known.is_empty());
        known.add("a");
        assert!(!known.is_empty());
    }

    #[test]
    fn test_concurrent_writers() {
        let known = Arc::new(KnownCategories::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let known = Arc::clone(&known);
                thread::spawn(move || {
                    for j in 0..50 {
                        known.add(&format!("cat-{}", (i * 50 + j) % 100));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(known.len(), 100);
        let sorted = known.sorted();
        let mut expected = sorted.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
