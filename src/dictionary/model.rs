//! 词典数据模型

use std::fmt;
use std::str::FromStr;

use crate::error::TextPpError;

/// 词典：按文件顺序排列的词条，允许重复
pub type Dictionary = Vec<String>;

/// 固定词典集合，每个词典对应一个资源文件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryName {
    Stopwords,
    CommonPersonNames,
    Pronouns,
    Contractions,
    Adverbs,
    NumbersInFull,
}

impl DictionaryName {
    pub const ALL: [DictionaryName; 6] = [
        DictionaryName::Stopwords,
        DictionaryName::CommonPersonNames,
        DictionaryName::Pronouns,
        DictionaryName::Contractions,
        DictionaryName::Adverbs,
        DictionaryName::NumbersInFull,
    ];

    /// 逻辑文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            DictionaryName::Stopwords => "stopwords.dic",
            DictionaryName::CommonPersonNames => "common_person_names.dic",
            DictionaryName::Pronouns => "pronouns.dic",
            DictionaryName::Contractions => "contracoes.dic",
            DictionaryName::Adverbs => "adverbs.dic",
            DictionaryName::NumbersInFull => "numbers_in_full.dic",
        }
    }

    /// 短名称（命令行使用）
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryName::Stopwords => "stopwords",
            DictionaryName::CommonPersonNames => "common_person_names",
            DictionaryName::Pronouns => "pronouns",
            DictionaryName::Contractions => "contractions",
            DictionaryName::Adverbs => "adverbs",
            DictionaryName::NumbersInFull => "numbers_in_full",
        }
    }
}

impl fmt::Display for DictionaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryName {
    type Err = TextPpError;

    /// 同时接受短名称与文件名
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s || name.file_name() == s)
            .ok_or_else(|| TextPpError::InvalidInput(format!("未知词典：{}", s)))
    }
}
