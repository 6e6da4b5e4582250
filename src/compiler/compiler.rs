//! 规则编译器核心
//! 仅负责校验原始规则并编译为可直接匹配的规则结构

use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, warn};

use super::pattern::{CategoryPattern, MatchRules};
use crate::rule::RuleLibrary;
use crate::error::{CatResult, CategorizerError};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则库
    pub fn compile(rule_lib: &RuleLibrary) -> CatResult<MatchRules> {
        let start = Instant::now();

        // 1. 校验兜底分类
        let fallback = rule_lib.fallback.as_str();
        if fallback.is_empty() {
            return Err(CategorizerError::InvalidRules("兜底分类名不能为空".to_string()));
        }
        if rule_lib.category_keywords.contains_key(fallback) {
            return Err(CategorizerError::InvalidRules(format!(
                "兜底分类 '{}' 不能同时作为规则分类", fallback
            )));
        }

        // 2. 按优先级编译参与匹配的分类
        let mut stats = CompileStats::default();
        let mut seen = HashSet::new();
        let mut ranked = Vec::with_capacity(rule_lib.priority.len());
        for category in &rule_lib.priority {
            if !seen.insert(category.as_str()) {
                return Err(CategorizerError::InvalidRules(format!(
                    "优先级中分类重复：{}", category
                )));
            }
            let Some(keywords) = rule_lib.category_keywords.get(category) else {
                return Err(CategorizerError::InvalidRules(format!(
                    "优先级中的分类 '{}' 没有关键词定义", category
                )));
            };
            ranked.push(Self::compile_category(category, keywords, &mut stats)?);
        }

        // 3. 未列入优先级的分类：保留以便列举，但不参与匹配
        let mut unranked = Vec::new();
        for (category, keywords) in &rule_lib.category_keywords {
            if seen.contains(category.as_str()) {
                continue;
            }
            debug!("分类 '{}' 未列入优先级，不参与匹配", category);
            unranked.push(Self::compile_category(category, keywords, &mut stats)?);
        }
        unranked.sort_by(|a, b| a.category.cmp(&b.category));

        // 4. 输出编译统计
        debug!("✅ 规则编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：参与匹配分类{}个、未排序分类{}个、关键词{}条、重复关键词{}条",
            ranked.len(),
            unranked.len(),
            stats.keyword_count,
            stats.duplicate_count
        );

        Ok(MatchRules {
            ranked,
            unranked,
            fallback: fallback.to_string(),
        })
    }

    /// 编译单个分类：关键词转小写、去重，拒绝空关键词
    fn compile_category(
        category: &str,
        raw_keywords: &[String],
        stats: &mut CompileStats,
    ) -> CatResult<CategoryPattern> {
        if category.is_empty() {
            return Err(CategorizerError::InvalidRules("分类名不能为空".to_string()));
        }

        let mut keywords: Vec<String> = Vec::with_capacity(raw_keywords.len());
        for raw in raw_keywords {
            // 空关键词会命中任何输入
            if raw.is_empty() {
                return Err(CategorizerError::InvalidRules(format!(
                    "分类 '{}' 含有空关键词", category
                )));
            }
            let keyword = raw.to_lowercase();
            if keywords.contains(&keyword) {
                stats.duplicate_count += 1;
                continue;
            }
            keywords.push(keyword);
            stats.keyword_count += 1;
        }

        if keywords.is_empty() {
            warn!("分类 '{}' 没有任何关键词，永远不会被命中", category);
        }

        Ok(CategoryPattern {
            category: category.to_string(),
            keywords,
        })
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    keyword_count: usize,
    duplicate_count: usize,
}
