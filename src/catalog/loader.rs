//! 商品目录读写
//! 读取商品 JSON 数组，并输出追加了分类字段的商品数据

use std::io::ErrorKind;
use std::path::Path;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::record::ProductRecord;
use crate::classifier::CategoryClassifier;
use crate::error::{CatResult, CategorizerError};

/// 为每条商品追加分类字段（原记录不变）
pub fn categorize_records(
    products: &[ProductRecord],
    classifier: &CategoryClassifier,
) -> Vec<ProductRecord> {
    products
        .iter()
        .map(|product| product.with_category(classifier.classify(&product.product_name())))
        .collect()
}

/// 商品目录加载器
pub struct CatalogLoader;

impl CatalogLoader {
    /// 从 JSON 文件读取商品列表
    ///
    /// 文件不存在或内容不是合法 JSON 时返回错误，由调用方决定如何提示。
    pub async fn load_products(path: &Path) -> CatResult<Vec<ProductRecord>> {
        let data = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CategorizerError::CatalogNotFound(path.to_path_buf()),
            _ => CategorizerError::IoError(e),
        })?;

        let products = Self::parse_products(&data)?;
        info!("读取商品 {} 件：{}", products.len(), path.display());
        Ok(products)
    }

    /// 解析商品 JSON 数组，跳过非对象元素
    pub fn parse_products(data: &[u8]) -> CatResult<Vec<ProductRecord>> {
        let value: Value = serde_json::from_slice(data)?;
        let Value::Array(items) = value else {
            return Err(CategorizerError::CatalogFormatError(
                "商品数据顶层必须是 JSON 数组".to_string(),
            ));
        };

        let mut products = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match ProductRecord::try_from(item) {
                Ok(product) => products.push(product),
                Err(e) => warn!("跳过第 {} 条商品数据：{}", index, e),
            }
        }
        Ok(products)
    }

    /// 保存带分类字段的商品数据（UTF-8，非 ASCII 字符不转义，2 空格缩进）
    pub async fn save_categorized(
        products: &[ProductRecord],
        classifier: &CategoryClassifier,
        path: &Path,
    ) -> CatResult<usize> {
        let categorized = categorize_records(products, classifier);
        let data = serde_json::to_vec_pretty(&categorized)?;
        debug!("分类结果序列化完成，数据大小：{} 字节", data.len());

        tokio::fs::write(path, data).await?;
        info!("✅ 已保存带分类的商品数据：{}", path.display());
        Ok(categorized.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_skips_non_objects() {
        let data = br#"[{"productNumber": "1", "productName": "a"}, 42, "x", {"productName": "b"}]"#;
        let products = CatalogLoader::parse_products(data).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].product_number(), "");
        assert_eq!(products[1].product_name(), "b");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = CatalogLoader::parse_products(br#"{"productName": "a"}"#).unwrap_err();
        assert!(matches!(err, CategorizerError::CatalogFormatError(_)));

        let err = CatalogLoader::parse_products(b"[{").unwrap_err();
        assert!(matches!(err, CategorizerError::JsonError(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = CatalogLoader::load_products(&path).await.unwrap_err();
        assert!(matches!(err, CategorizerError::CatalogNotFound(p) if p == path));
    }

    #[test]
    fn test_categorize_records() {
        let classifier = CategoryClassifier::reference();
        let products = vec![
            ProductRecord::new("1", "T-SHIRT basic"),
            ProductRecord::new("2", "ヘアゴム"),
        ];
        let categorized = categorize_records(&products, &classifier);

        assert_eq!(categorized[0].category(), Some("Tシャツ"));
        assert_eq!(categorized[1].category(), Some("その他"));
        assert_eq!(categorized[1].product_name(), "ヘアゴム");
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("products.json");
        let output = dir.path().join("categorized.json");
        let source = json!([
            {"productNumber": "21771", "productName": "プリーツスカート ミディ丈", "price": 5900},
            {"productNumber": "21772", "productName": "キャンバススニーカー ローカット"},
        ]);
        tokio::fs::write(&input, serde_json::to_vec(&source).unwrap()).await.unwrap();

        let classifier = CategoryClassifier::reference();
        let products = CatalogLoader::load_products(&input).await.unwrap();
        let saved = CatalogLoader::save_categorized(&products, &classifier, &output).await.unwrap();
        assert_eq!(saved, 2);

        let text = tokio::fs::read_to_string(&output).await.unwrap();
        assert!(text.contains("\"category\": \"スカート\""));
        assert!(text.contains("\n  {"));
        assert!(!text.contains("\\u"));

        let reloaded = CatalogLoader::load_products(&output).await.unwrap();
        assert_eq!(reloaded[0].fields()["price"], json!(5900));
        assert_eq!(reloaded[1].category(), Some("シューズ"));
    }

    #[tokio::test]
    async fn test_save_keeps_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("categorized.json");
        let products = CatalogLoader::parse_products(
            br#"[{"productNumber": "1", "productName": "T-SHIRT", "zeta": 1, "alpha": 2}]"#,
        )
        .unwrap();

        let classifier = CategoryClassifier::reference();
        CatalogLoader::save_categorized(&products, &classifier, &output).await.unwrap();

        let saved: Value = serde_json::from_str(&tokio::fs::read_to_string(&output).await.unwrap()).unwrap();
        let keys: Vec<&str> = saved[0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["productNumber", "productName", "zeta", "alpha", "category"]);
    }
}
