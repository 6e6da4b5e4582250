//! 参考测试商品（每个常见分类各一件）

use super::record::ProductRecord;

const REFERENCE_PRODUCTS: &[(&str, &str)] = &[
    ("21765", "リラックスルーズベーシックT オーバーサイズ ラスティックコットンカットソー"),
    ("21766", "プレミアムコットンシャツ メンズ"),
    ("21767", "ストレッチデニムパンツ スキニーフィット"),
    ("21768", "フェイクレザートートバッグ A4サイズ対応"),
    ("21769", "ウール混ニットセーター Vネック"),
    ("21770", "防水マウンテンパーカー メンズ"),
    ("21771", "プリーツスカート ミディ丈"),
    ("21772", "キャンバススニーカー ローカット"),
    ("21773", "リネンワンピース ロング丈"),
    ("21774", "本革ベルト イタリアンレザー"),
];

/// 参考商品列表
pub fn reference_fixture() -> Vec<ProductRecord> {
    REFERENCE_PRODUCTS
        .iter()
        .map(|(number, name)| ProductRecord::new(*number, *name))
        .collect()
}
