//! 预处理模块：清洗规则与 clean 流水线
pub mod rules;
pub mod pipeline;
pub mod preprocessor;

// 导出核心接口
pub use self::pipeline::{Rule, Stage, CLEAN_STAGES};
pub use self::preprocessor::TextPreProcessor;
pub use self::rules::{
    remove_accents,
    remove_excessive_spaces,
    remove_hour,
    remove_numbers,
    remove_special_characters,
    remove_symbols_from_numbers,
    remove_urls,
    SPECIAL_CHARACTERS,
};
