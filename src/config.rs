//! 全局配置管理,存储所有可配置项

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::TppResult;

/// 词典来源
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum DictionarySource {
    #[default]
    Embedded,           // 内置词典（编译期 include_str!）
    Directory(PathBuf), // 本地词典目录（运行时读取 <dir>/<name>）
}

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    // 词典来源
    pub dictionary_source: DictionarySource,
    // clean 流水线是否移除特殊字符
    pub strip_special_characters: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dictionary_source: DictionarySource::Embedded,
            strip_special_characters: true,
        }
    }
}

impl GlobalConfig {
    /// 从JSON字符串解析配置（缺失字段取默认值）
    pub fn from_json_str(json: &str) -> TppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从JSON文件加载配置
    pub fn from_json_file(path: impl AsRef<Path>) -> TppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn dictionary_source(mut self, source: DictionarySource) -> Self {
        self.config.dictionary_source = source;
        self
    }

    pub fn dictionary_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dictionary_source = DictionarySource::Directory(dir.into());
        self
    }

    pub fn strip_special_characters(mut self, strip: bool) -> Self {
        self.config.strip_special_characters = strip;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
