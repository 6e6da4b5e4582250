//! 商品记录模型
//! 直接包装 JSON 对象，分类只读取编号和商品名，其余字段原样保留

use std::borrow::Cow;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CatResult, CategorizerError};

/// 商品编号字段
pub const PRODUCT_NUMBER_FIELD: &str = "productNumber";
/// 商品名字段
pub const PRODUCT_NAME_FIELD: &str = "productName";
/// 分类结果字段
pub const CATEGORY_FIELD: &str = "category";

/// 商品记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord(Map<String, Value>);

impl ProductRecord {
    /// 以编号和商品名创建记录
    pub fn new(product_number: impl Into<String>, product_name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(PRODUCT_NUMBER_FIELD.to_string(), Value::String(product_number.into()));
        fields.insert(PRODUCT_NAME_FIELD.to_string(), Value::String(product_name.into()));
        Self(fields)
    }

    /// 商品编号（缺失或为 null/数组/对象时为空字符串，数字和布尔值转为 JSON 文本形式，如 `21765`、`true`）
    pub fn product_number(&self) -> Cow<'_, str> {
        self.text_field(PRODUCT_NUMBER_FIELD)
    }

    /// 商品名（缺失时为空字符串）
    pub fn product_name(&self) -> Cow<'_, str> {
        self.text_field(PRODUCT_NAME_FIELD)
    }

    /// 已写入的分类
    pub fn category(&self) -> Option<&str> {
        self.0.get(CATEGORY_FIELD).and_then(Value::as_str)
    }

    /// 复制记录并追加分类字段，其余字段不变
    pub fn with_category(&self, category: &str) -> Self {
        let mut fields = self.0.clone();
        fields.insert(CATEGORY_FIELD.to_string(), Value::String(category.to_string()));
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    fn text_field(&self, key: &str) -> Cow<'_, str> {
        match self.0.get(key) {
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(Value::Number(n)) => Cow::Owned(n.to_string()),
            Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
            _ => Cow::Borrowed(""),
        }
    }
}

impl From<Map<String, Value>> for ProductRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for ProductRecord {
    type Error = CategorizerError;

    fn try_from(value: Value) -> CatResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(CategorizerError::CatalogFormatError(format!(
                "商品记录必须是 JSON 对象，实际为：{}",
                other
            ))),
        }
    }
}
