//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// 默认兜底分类（无任何规则命中时返回）
pub const FALLBACK_CATEGORY: &str = "その他";

/// 内置参考关键词表：分类 -> 关键词
const REFERENCE_KEYWORDS: &[(&str, &[&str])] = &[
    ("Tシャツ", &["tシャツ", "t-shirt", "ティーシャツ", "tee"]),
    ("カットソー", &["カットソー", "cut and sewn"]),
    ("シャツ", &["シャツ", "shirt", "ブラウス", "blouse"]),
    ("パンツ", &["パンツ", "pants", "ズボン", "トラウザー", "スラックス", "ジーンズ", "デニム"]),
    ("スカート", &["スカート", "skirt"]),
    ("ワンピース", &["ワンピース", "dress", "ドレス"]),
    ("ジャケット", &["ジャケット", "jacket", "ブルゾン"]),
    ("コート", &["コート", "coat"]),
    ("アウター", &["アウター", "パーカー", "フーディー", "ウィンドブレーカー"]),
    ("ニット", &["ニット", "knit", "セーター", "sweater", "カーディガン"]),
    ("バッグ", &["バッグ", "bag", "かばん", "鞄", "リュック", "トート"]),
    ("シューズ", &["シューズ", "shoes", "靴", "スニーカー", "ブーツ", "サンダル"]),
    ("アクセサリー", &["アクセサリー", "accessory", "ネックレス", "ブレスレット", "リング", "ピアス"]),
    ("帽子", &["帽子", "キャップ", "cap", "ハット", "hat"]),
    ("ベルト", &["ベルト", "belt"]),
    ("財布", &["財布", "wallet", "ウォレット"]),
    ("トップス", &["トップス", "tops"]),
];

/// 内置参考优先级：具体的上衣 > 下装/连衣裙 > 外套 > 小物 > 通用
const REFERENCE_PRIORITY: &[&str] = &[
    "Tシャツ", "カットソー", "シャツ", "ニット",
    "パンツ", "スカート", "ワンピース",
    "ジャケット", "コート", "アウター",
    "バッグ", "シューズ", "財布", "ベルト", "帽子", "アクセサリー",
    "トップス",
];

/// 完整规则库（从 JSON / MessagePack 规则文件解析）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleLibrary {
    /// 兜底分类名
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// 分类优先级（越靠前越优先）
    #[serde(default)]
    pub priority: Vec<String>,
    /// 分类 -> 关键词列表
    #[serde(rename = "categories", default, alias = "category_keywords")]
    pub category_keywords: HashMap<String, Vec<String>>,
}

fn default_fallback() -> String {
    FALLBACK_CATEGORY.to_string()
}

impl RuleLibrary {
    /// 内置参考规则库（服装类商品）
    pub fn reference() -> Self {
        let category_keywords = REFERENCE_KEYWORDS
            .iter()
            .map(|(category, keywords)| {
                (
                    category.to_string(),
                    keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();

        Self {
            fallback: default_fallback(),
            priority: REFERENCE_PRIORITY.iter().map(|c| c.to_string()).collect(),
            category_keywords,
        }
    }
}
