//! 商品目录模块：商品记录模型、目录文件读写与参考测试数据
pub mod record;
pub mod loader;
pub mod fixture;

pub use self::record::{ProductRecord, PRODUCT_NUMBER_FIELD, PRODUCT_NAME_FIELD, CATEGORY_FIELD};
pub use self::loader::{CatalogLoader, categorize_records};
pub use self::fixture::reference_fixture;
