//! 全局分类器单例管理
use once_cell::sync::Lazy;
use tokio::sync::OnceCell;

use super::analyzer::CategoryMap;
use super::classifier::CategoryClassifier;
use crate::catalog::ProductRecord;
use crate::error::{CatResult, CategorizerError};
use crate::config::{ConfigManager, GlobalConfig};

/// 全局分类器实例
static GLOBAL_CLASSIFIER: Lazy<OnceCell<CategoryClassifier>> = Lazy::new(OnceCell::new);

/// 初始化全局分类器（默认配置）
pub async fn init_classifier() -> CatResult<()> {
    init_classifier_with_config(ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局分类器，已初始化时直接返回
pub async fn init_classifier_with_config(config: GlobalConfig) -> CatResult<()> {
    GLOBAL_CLASSIFIER
        .get_or_try_init(|| CategoryClassifier::new(config))
        .await?;
    Ok(())
}

/// 获取全局分类器
pub fn global_classifier() -> CatResult<&'static CategoryClassifier> {
    GLOBAL_CLASSIFIER
        .get()
        .ok_or(CategorizerError::ClassifierNotInitialized)
}

/// 使用全局分类器判定商品名
pub fn classify_product_name(product_name: &str) -> CatResult<&'static str> {
    Ok(global_classifier()?.classify(product_name))
}

/// 使用全局分类器批量分析
pub fn analyze_products(products: &[ProductRecord]) -> CatResult<CategoryMap> {
    Ok(global_classifier()?.analyze(products))
}
