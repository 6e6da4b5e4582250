//! product-categorizer - 基于关键词优先级匹配的商品分类器

// 导出全局错误类型
pub use self::error::{CategorizerError, CatResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{RuleLibrary, RuleLoader, RuleFileType, FALLBACK_CATEGORY};

// 导出编译模块核心接口
pub use self::compiler::{CategoryPattern, MatchRules, RuleCompiler, RuleMatch};

// 导出商品目录模块核心接口
pub use self::catalog::{ProductRecord, CatalogLoader, categorize_records, reference_fixture};

// 导出分类模块核心接口（含全局单例的简化接口）
pub use self::classifier::{
    CategoryClassifier,
    CategoryMap,
    BatchAnalyzer,
    KnownCategories,
    init_classifier,
    init_classifier_with_config,
    global_classifier,
    classify_product_name,
    analyze_products,
};

// 导出报告
pub use self::report::CategoryReport;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod catalog;
pub mod classifier;
pub mod report;
