//! 词典模块：负责词典的命名、内置资源与加载
pub mod model;
pub mod embedded;
pub mod loader;

// 导出核心接口
pub use self::model::{Dictionary, DictionaryName};
pub use self::loader::DictionaryLoader;
