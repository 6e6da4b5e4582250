//! 全局错误类型定义
//! 分类本身不会失败，错误只来自规则编译与文件读写等外围协作方

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum CategorizerError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则解析失败：{0}")]
    RuleParseError(String),
    #[error("规则无效：{0}")]
    InvalidRules(String),

    // 分类器相关错误
    #[error("分类器未初始化")]
    ClassifierNotInitialized,

    // 商品目录相关错误
    #[error("商品文件不存在：{}", .0.display())]
    CatalogNotFound(PathBuf),
    #[error("商品数据格式错误：{0}")]
    CatalogFormatError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type CatResult<T> = Result<T, CategorizerError>;
