//! 分类器核心：持有不可变匹配规则与可增长的已知分类登记表
use std::sync::Arc;
use tracing::{debug, info};

use super::analyzer::{BatchAnalyzer, CategoryMap};
use super::registry::KnownCategories;
use crate::catalog::ProductRecord;
use crate::compiler::{MatchRules, RuleCompiler, RuleMatch};
use crate::config::GlobalConfig;
use crate::error::CatResult;
use crate::rule::RuleLoader;

/// 商品分类器
#[derive(Debug)]
pub struct CategoryClassifier {
    rules: Arc<MatchRules>,
    known: KnownCategories,
}

impl CategoryClassifier {
    /// 按配置加载并编译规则，创建分类器
    pub async fn new(config: GlobalConfig) -> CatResult<Self> {
        // 1. 加载原始规则库
        let rule_lib = RuleLoader::load(&config).await?;

        // 2. 编译规则库
        let rules = RuleCompiler::compile(&rule_lib)?;

        Ok(Self::with_rules(Arc::new(rules)))
    }

    /// 以已编译的规则创建分类器，登记表以规则中的全部分类为初始值
    pub fn with_rules(rules: Arc<MatchRules>) -> Self {
        let known = KnownCategories::new(rules.categories());
        debug!("分类器初始化完成，已知分类{}个，兜底分类：{}", known.len(), rules.fallback());
        Self { rules, known }
    }

    /// 使用内置参考规则创建分类器
    pub fn reference() -> Self {
        Self::with_rules(MatchRules::reference())
    }

    /// 判定商品名所属分类
    pub fn classify(&self, product_name: &str) -> &str {
        self.rules.classify(product_name)
    }

    /// 判定分类并给出命中的关键词
    pub fn explain(&self, product_name: &str) -> Option<RuleMatch<'_>> {
        self.rules.explain(product_name)
    }

    /// 登记新分类（只影响列举，不参与匹配）
    pub fn add_category(&self, category: &str) -> bool {
        let added = self.known.add(category);
        if added {
            info!("✅ 新增分类 '{}'", category);
        }
        added
    }

    /// 按字典序返回已知分类
    pub fn get_categories(&self) -> Vec<String> {
        self.known.sorted()
    }

    /// 批量分析商品列表
    pub fn analyze(&self, products: &[ProductRecord]) -> CategoryMap {
        BatchAnalyzer::analyze(&self.rules, products)
    }

    pub fn rules(&self) -> &Arc<MatchRules> {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        self.rules.fallback()
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::reference()
    }
}
