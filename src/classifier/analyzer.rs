//! 批量分析器：对商品列表逐条分类，并按分类归组

use std::collections::HashMap;
use tracing::debug;

use crate::catalog::ProductRecord;
use crate::compiler::MatchRules;

/// 分类结果映射：分类 -> "商品编号: 商品名" 列表
///
/// 每个分类内保持输入顺序；只有至少命中一个商品的分类才会出现。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    groups: HashMap<String, Vec<String>>,
}

impl CategoryMap {
    /// 格式化单条商品描述
    pub fn format_entry(product_number: &str, product_name: &str) -> String {
        format!("{}: {}", product_number, product_name)
    }

    /// 追加一条商品描述
    pub fn push(&mut self, category: &str, entry: String) {
        match self.groups.get_mut(category) {
            Some(entries) => entries.push(entry),
            None => {
                self.groups.insert(category.to_string(), vec![entry]);
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// 某分类下的商品数
    pub fn count(&self, category: &str) -> usize {
        self.groups.get(category).map_or(0, Vec::len)
    }

    /// 分类个数
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 所有分类下的商品总数
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// 按分类名排序遍历
    pub fn iter_sorted(&self) -> Vec<(&str, &[String])> {
        let mut groups: Vec<_> = self
            .groups
            .iter()
            .map(|(category, entries)| (category.as_str(), entries.as_slice()))
            .collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups
    }

    /// 按分类名排序的 (分类, 商品数)
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.iter_sorted()
            .into_iter()
            .map(|(category, entries)| (category, entries.len()))
            .collect()
    }

    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.groups
    }
}

/// 批量分析器
pub struct BatchAnalyzer;

impl BatchAnalyzer {
    /// 分析商品列表，按分类归组
    ///
    /// 缺失的编号或商品名按空字符串处理，不会失败。
    pub fn analyze(rules: &MatchRules, products: &[ProductRecord]) -> CategoryMap {
        let mut category_map = CategoryMap::default();

        for product in products {
            let product_name = product.product_name();
            let product_number = product.product_number();

            let category = rules.classify(&product_name);
            category_map.push(category, CategoryMap::format_entry(&product_number, &product_name));
        }

        debug!(
            "批量分析完成：商品{}件，分类{}个",
            category_map.total(),
            category_map.len()
        );
        category_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_fixture;
    use serde_json::json;

    #[test]
    fn test_reference_fixture_counts() {
        let rules = MatchRules::reference();
        let map = BatchAnalyzer::analyze(&rules, &reference_fixture());

        let expected = [
            "シャツ", "パンツ", "バッグ", "ニット", "アウター",
            "スカート", "シューズ", "ワンピース", "ベルト", "カットソー",
        ];
        assert_eq!(map.len(), expected.len());
        for category in expected {
            assert_eq!(map.count(category), 1, "分类：{}", category);
        }
        assert_eq!(map.count("Tシャツ"), 0);
        assert_eq!(map.get("カットソー").unwrap()[0],
            "21765: リラックスルーズベーシックT オーバーサイズ ラスティックコットンカットソー");
    }

    #[test]
    fn test_grouping_preserves_input_order() {
        let rules = MatchRules::reference();
        let products = vec![
            ProductRecord::new("3", "ブラウス"),
            ProductRecord::new("1", "ヘアゴム"),
            ProductRecord::new("2", "オックスフォードシャツ"),
            ProductRecord::new("0", "シュシュ"),
        ];
        let map = BatchAnalyzer::analyze(&rules, &products);

        assert_eq!(map.total(), products.len());
        assert_eq!(map.get("シャツ").unwrap(), &["3: ブラウス".to_string(), "2: オックスフォードシャツ".to_string()]);
        assert_eq!(map.get("その他").unwrap(), &["1: ヘアゴム".to_string(), "0: シュシュ".to_string()]);
    }

    #[test]
    fn test_entries_reconstruct_original_pairs() {
        let rules = MatchRules::reference();
        let products = reference_fixture();
        let map = BatchAnalyzer::analyze(&rules, &products);

        let mut reconstructed: Vec<(String, String)> = map
            .iter_sorted()
            .into_iter()
            .flat_map(|(_, entries)| entries.iter())
            .map(|entry| {
                let (id, name) = entry.split_once(": ").unwrap();
                (id.to_string(), name.to_string())
            })
            .collect();
        let mut original: Vec<(String, String)> = products
            .iter()
            .map(|p| (p.product_number().into_owned(), p.product_name().into_owned()))
            .collect();
        reconstructed.sort();
        original.sort();
        assert_eq!(reconstructed, original);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let rules = MatchRules::reference();
        let products = vec![
            ProductRecord::try_from(json!({"productNumber": "9"})).unwrap(),
            ProductRecord::try_from(json!({"productName": "レザーベルト"})).unwrap(),
            ProductRecord::try_from(json!({})).unwrap(),
        ];
        let map = BatchAnalyzer::analyze(&rules, &products);

        assert_eq!(map.get("その他").unwrap(), &["9: ".to_string(), ": ".to_string()]);
        assert_eq!(map.get("ベルト").unwrap(), &[": レザーベルト".to_string()]);
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        let map = BatchAnalyzer::analyze(&MatchRules::reference(), &[]);
        assert!(map.is_empty());
        assert_eq!(map.total(), 0);
    }

    #[test]
    fn test_counts_sorted_by_category() {
        let mut map = CategoryMap::default();
        map.push("b", "1: x".to_string());
        map.push("a", "2: y".to_string());
        map.push("b", "3: z".to_string());
        assert_eq!(map.counts(), vec![("a", 1), ("b", 2)]);

        let groups = map.into_inner();
        assert_eq!(groups["b"], vec!["1: x".to_string(), "3: z".to_string()]);
    }
}
