//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 报告中每个分类默认展示的商品条数
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 规则文件路径（None 时使用内置参考规则）
    pub rules_path: Option<PathBuf>,
    // 覆盖规则文件中的兜底分类名
    pub fallback_category: Option<String>,
    // 报告中每个分类展示的条数（None 表示全部展示）
    pub preview_limit: Option<usize>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            fallback_category: None,
            preview_limit: Some(DEFAULT_PREVIEW_LIMIT),
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn rules_path(mut self, path: PathBuf) -> Self {
        self.config.rules_path = Some(path);
        self
    }

    pub fn fallback_category(mut self, label: impl Into<String>) -> Self {
        self.config.fallback_category = Some(label.into());
        self
    }

    pub fn preview_limit(mut self, limit: Option<usize>) -> Self {
        self.config.preview_limit = limit;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert!(config.rules_path.is_none());
        assert!(config.fallback_category.is_none());
        assert_eq!(config.preview_limit, Some(DEFAULT_PREVIEW_LIMIT));
        assert!(!config.verbose);
    }

    #[test]
    fn test_custom_builder() {
        let config = ConfigManager::custom()
            .rules_path(PathBuf::from("rules.json"))
            .fallback_category("未分類")
            .preview_limit(None)
            .verbose(true)
            .build();

        assert_eq!(config.rules_path, Some(PathBuf::from("rules.json")));
        assert_eq!(config.fallback_category.as_deref(), Some("未分類"));
        assert_eq!(config.preview_limit, None);
        assert!(config.verbose);
    }
}
