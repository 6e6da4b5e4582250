//! 编译后规则模型
//! 关键词已统一转为小写，分类按优先级排好序，可直接用于匹配

use std::sync::Arc;
use once_cell::sync::Lazy;

use super::compiler::RuleCompiler;
use crate::error::CatResult;
use crate::rule::RuleLibrary;

/// 内置参考规则（全局仅编译一次）
static REFERENCE_RULES: Lazy<Arc<MatchRules>> = Lazy::new(|| {
    let rules = RuleCompiler::compile(&RuleLibrary::reference())
        .unwrap_or_else(|e| panic!("内置参考规则编译失败：{}", e));
    Arc::new(rules)
});

/// 单个分类编译后的关键词集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPattern {
    pub category: String,
    // 已小写、已去重
    pub keywords: Vec<String>,
}

impl CategoryPattern {
    /// 在已小写的输入中查找第一个命中的关键词
    pub fn find_keyword(&self, lowered_input: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| lowered_input.contains(keyword.as_str()))
            .map(String::as_str)
    }
}

/// 命中详情：分类及触发命中的关键词
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub category: &'a str,
    pub keyword: &'a str,
}

/// 编译后的匹配规则（关键词表 + 优先级 + 兜底分类）
///
/// 构造后不可变，多线程共享读取无需加锁。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRules {
    // 按优先级排列，参与匹配
    pub(crate) ranked: Vec<CategoryPattern>,
    // 关键词表中存在但不在优先级中的分类，永远不会被匹配
    pub(crate) unranked: Vec<CategoryPattern>,
    pub(crate) fallback: String,
}

impl MatchRules {
    /// 内置参考规则
    pub fn reference() -> Arc<MatchRules> {
        Arc::clone(&REFERENCE_RULES)
    }

    /// 判定商品名所属分类，无命中时返回兜底分类
    ///
    /// 整个输入先转小写再做子串匹配，不做空白裁剪、全半角折叠或 Unicode 规范化。
    /// 按优先级逐个分类检查，分类内任意一个关键词命中即返回。
    pub fn classify(&self, product_name: &str) -> &str {
        match self.explain(product_name) {
            Some(hit) => hit.category,
            None => &self.fallback,
        }
    }

    /// 与 `classify` 相同的匹配过程，额外返回触发命中的关键词
    pub fn explain(&self, product_name: &str) -> Option<RuleMatch<'_>> {
        let lowered = product_name.to_lowercase();

        self.ranked.iter().find_map(|pattern| {
            pattern.find_keyword(&lowered).map(|keyword| RuleMatch {
                category: pattern.category.as_str(),
                keyword,
            })
        })
    }

    /// 兜底分类名
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn is_fallback(&self, category: &str) -> bool {
        self.fallback == category
    }

    /// 按优先级列出参与匹配的分类
    pub fn priority(&self) -> impl Iterator<Item = &str> {
        self.ranked.iter().map(|p| p.category.as_str())
    }

    /// 关键词表中的全部分类（含不参与匹配的分类）
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.ranked
            .iter()
            .chain(self.unranked.iter())
            .map(|p| p.category.as_str())
    }

    /// 获取某个分类的关键词
    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.ranked
            .iter()
            .chain(self.unranked.iter())
            .find(|p| p.category == category)
            .map(|p| p.keywords.as_slice())
    }

    /// 还原为可序列化的规则库
    pub fn to_library(&self) -> RuleLibrary {
        RuleLibrary {
            fallback: self.fallback.clone(),
            priority: self.priority().map(str::to_string).collect(),
            category_keywords: self
                .ranked
                .iter()
                .chain(self.unranked.iter())
                .map(|p| (p.category.clone(), p.keywords.clone()))
                .collect(),
        }
    }

    /// 基于当前规则生成扩展后的新规则
    ///
    /// 分类已存在时合并关键词并移动到新位置；位置超出末尾时追加到最后。
    /// 原规则保持不变。
    pub fn extend_rules<I, S>(
        &self,
        category: &str,
        keywords: I,
        priority_position: usize,
    ) -> CatResult<MatchRules>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lib = self.to_library();

        lib.category_keywords
            .entry(category.to_string())
            .or_default()
            .extend(keywords.into_iter().map(Into::into));

        lib.priority.retain(|c| c != category);
        let position = priority_position.min(lib.priority.len());
        lib.priority.insert(position, category.to_string());

        RuleCompiler::compile(&lib)
    }
}
