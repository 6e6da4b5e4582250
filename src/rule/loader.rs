//! 规则加载管理器
//! 负责从本地规则文件读取规则库，未配置时使用内置参考规则

use std::path::Path;
use rmp_serde::{Serializer, from_slice};
use serde::Serialize;
use tracing::{debug, info};

use super::model::RuleLibrary;
use crate::error::{CatResult, CategorizerError};
use crate::config::GlobalConfig;

/// 规则文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileType {
    /// *.json
    Json,
    /// *.mp（MessagePack）
    MessagePack,
}

impl RuleFileType {
    /// 根据扩展名判断文件类型，未知扩展名按 JSON 处理
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("mp") || ext.eq_ignore_ascii_case("msgpack") => {
                RuleFileType::MessagePack
            }
            _ => RuleFileType::Json,
        }
    }
}

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 加载规则库（配置了规则文件则读取文件，否则使用内置参考规则）
    pub async fn load(config: &GlobalConfig) -> CatResult<RuleLibrary> {
        let mut rule_lib = match &config.rules_path {
            Some(path) => {
                let lib = Self::load_from_file(path).await?;
                info!("从规则文件加载规则库成功：{}", path.display());
                lib
            }
            None => {
                debug!("未配置规则文件，使用内置参考规则");
                RuleLibrary::reference()
            }
        };

        if let Some(fallback) = &config.fallback_category {
            debug!("兜底分类覆盖为：{}", fallback);
            rule_lib.fallback = fallback.clone();
        }

        Ok(rule_lib)
    }

    /// 从规则文件读取规则库
    pub async fn load_from_file(path: &Path) -> CatResult<RuleLibrary> {
        let data = tokio::fs::read(path).await.map_err(|e| {
            CategorizerError::RuleLoadError(format!("读取规则文件 {} 失败：{}", path.display(), e))
        })?;

        let rule_lib = Self::decode(&data, RuleFileType::from_path(path))?;
        debug!(
            "规则文件解析成功，分类数：{}，优先级条目数：{}",
            rule_lib.category_keywords.len(),
            rule_lib.priority.len()
        );
        Ok(rule_lib)
    }

    /// 将规则库写入文件（格式由扩展名决定）
    pub async fn save(path: &Path, rule_lib: &RuleLibrary) -> CatResult<()> {
        let data = Self::encode(rule_lib, RuleFileType::from_path(path))?;
        debug!("规则库序列化成功，数据大小：{} 字节", data.len());
        tokio::fs::write(path, data).await?;
        Ok(())
    }

    fn decode(data: &[u8], file_type: RuleFileType) -> CatResult<RuleLibrary> {
        match file_type {
            RuleFileType::Json => serde_json::from_slice(data)
                .map_err(|e| CategorizerError::RuleParseError(format!("JSON规则解析失败：{}", e))),
            RuleFileType::MessagePack => from_slice(data)
                .map_err(|e| CategorizerError::MsgPackError(format!("反序列化失败：{}", e))),
        }
    }

    fn encode(rule_lib: &RuleLibrary, file_type: RuleFileType) -> CatResult<Vec<u8>> {
        match file_type {
            RuleFileType::Json => Ok(serde_json::to_vec_pretty(rule_lib)?),
            RuleFileType::MessagePack => {
                let mut data = Vec::new();
                rule_lib
                    .serialize(&mut Serializer::new(&mut data).with_struct_map())
                    .map_err(|e| CategorizerError::MsgPackError(format!("序列化失败：{}", e)))?;
                Ok(data)
            }
        }
    }
}
