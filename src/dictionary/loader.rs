//! 词典加载器
//! 按配置的来源读取词典，逐行拆分为词条，不做缓存

use std::io::ErrorKind;
use tracing::debug;

use super::embedded::embedded_dictionary;
use super::model::{Dictionary, DictionaryName};
use crate::config::DictionarySource;
use crate::error::{TppResult, TextPpError};

/// 词典加载器
pub struct DictionaryLoader;

impl DictionaryLoader {
    /// 按逻辑文件名加载词典
    pub fn load(source: &DictionarySource, name: &str) -> TppResult<Dictionary> {
        let content = match source {
            DictionarySource::Embedded => embedded_dictionary(name)
                .ok_or_else(|| TextPpError::ResourceNotFound(format!("内置词典 {}", name)))?
                .to_string(),
            DictionarySource::Directory(dir) => {
                let path = dir.join(name);
                match std::fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        return Err(TextPpError::ResourceNotFound(path.display().to_string()));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let entries = Self::split_lines(&content);
        debug!("词典 {} 加载完成，词条数：{}", name, entries.len());
        Ok(entries)
    }

    /// 加载固定词典
    pub fn load_dictionary(source: &DictionarySource, name: DictionaryName) -> TppResult<Dictionary> {
        Self::load(source, name.file_name())
    }

    /// 加载停用词词典
    pub fn get_stopwords(source: &DictionarySource) -> TppResult<Dictionary> {
        Self::load_dictionary(source, DictionaryName::Stopwords)
    }

    /// 逐行拆分：仅去掉行尾换行符（\n 或 \r\n），空行保留为空词条
    fn split_lines(content: &str) -> Dictionary {
        content
            .split_inclusive('\n')
            .map(|line| match line.strip_suffix('\n') {
                Some(line) => line.strip_suffix('\r').unwrap_or(line),
                None => line,
            })
            .map(str::to_string)
            .collect()
    }
}
