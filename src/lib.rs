//! textpp-ptbr - 葡萄牙语（巴西）文本预处理工具
//! 基于词典与正则的文本清洗：人名、代词、缩合词、副词、停用词、数字、URL、特殊字符等

// 导出全局错误类型
pub use self::error::{TextPpError, TppResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, DictionarySource, GlobalConfig};

// 导出词典模块核心接口
pub use self::dictionary::{Dictionary, DictionaryLoader, DictionaryName};

// 导出编译模块核心接口
pub use self::compiler::{CompiledPattern, PatternCache, PatternCompiler, PatternSlot};

// 导出预处理模块核心接口
pub use self::preprocessor::{
    TextPreProcessor,
    Rule,
    Stage,
    CLEAN_STAGES,
    remove_accents,
    remove_excessive_spaces,
    remove_hour,
    remove_numbers,
    remove_special_characters,
    remove_symbols_from_numbers,
    remove_urls,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod dictionary;
pub mod compiler;
pub mod preprocessor;
