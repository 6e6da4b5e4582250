//! 分类模块：单条分类、批量归组与已知分类登记
pub mod registry;
pub mod analyzer;
pub mod classifier;
pub mod global;

// 导出核心接口
pub use self::registry::KnownCategories;
pub use self::analyzer::{BatchAnalyzer, CategoryMap};
pub use self::classifier::CategoryClassifier;
pub use self::global::{
    init_classifier,
    init_classifier_with_config,
    global_classifier,
    classify_product_name,
    analyze_products,
};
