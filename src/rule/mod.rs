//! 规则模块：负责规则库的数据模型定义与文件加载
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::model::{RuleLibrary, FALLBACK_CATEGORY};
pub use self::loader::{RuleLoader, RuleFileType};
