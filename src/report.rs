//! 人类可读的分类报告（用于 CLI 输出）

use std::fmt;

use crate::classifier::CategoryMap;

/// 分类汇总报告
///
/// 分类按名称排序，每个分类最多展示 `preview_limit` 条，其余以条数汇总。
pub struct CategoryReport<'a> {
    map: &'a CategoryMap,
    preview_limit: Option<usize>,
}

impl<'a> CategoryReport<'a> {
    pub fn new(map: &'a CategoryMap, preview_limit: Option<usize>) -> Self {
        Self { map, preview_limit }
    }
}

impl fmt::Display for CategoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, entries) in self.map.iter_sorted() {
            writeln!(f, "■ {} ({}件)", category, entries.len())?;

            let shown = self.preview_limit.unwrap_or(entries.len()).min(entries.len());
            for entry in &entries[..shown] {
                writeln!(f, "  - {}", entry)?;
            }
            if entries.len() > shown {
                writeln!(f, "  ... 他 {}件", entries.len() - shown)?;
            }
        }
        Ok(())
    }
}
