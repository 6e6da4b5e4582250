//! 编译模块：将原始规则库编译为按优先级排序的匹配规则
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CategoryPattern, MatchRules, RuleMatch};
pub use self::compiler::RuleCompiler;
