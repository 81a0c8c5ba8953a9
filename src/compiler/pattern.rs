//! 编译后模式模型
//! 词典规则的缓存槽位与编译后的正则

use regex::Regex;

use crate::dictionary::DictionaryName;

/// 词典规则的缓存槽位（按规则区分，而非按词典区分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternSlot {
    PersonNames,
    Pronouns,
    Contractions,
    Adverbs,
    NumbersInFull,
    Stopwords,
}

impl PatternSlot {
    pub const ALL: [PatternSlot; 6] = [
        PatternSlot::PersonNames,
        PatternSlot::Pronouns,
        PatternSlot::Contractions,
        PatternSlot::Adverbs,
        PatternSlot::NumbersInFull,
        PatternSlot::Stopwords,
    ];

    /// 槽位依赖的词典
    pub fn dictionary(&self) -> DictionaryName {
        match self {
            PatternSlot::PersonNames => DictionaryName::CommonPersonNames,
            PatternSlot::Pronouns => DictionaryName::Pronouns,
            PatternSlot::Contractions => DictionaryName::Contractions,
            PatternSlot::Adverbs => DictionaryName::Adverbs,
            PatternSlot::NumbersInFull => DictionaryName::NumbersInFull,
            PatternSlot::Stopwords => DictionaryName::Stopwords,
        }
    }

    /// 词条是否先去除重音（人名规则会先对输入去重音）
    pub fn strips_accents(&self) -> bool {
        matches!(self, PatternSlot::PersonNames)
    }
}

/// 编译后的词典模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub slot: PatternSlot,
    pub regex: Regex,
    pub entry_count: usize,
}

impl CompiledPattern {
    /// 将所有匹配替换为单个空格
    pub fn replace_with_space(&self, text: &str) -> String {
        self.regex.replace_all(text, " ").into_owned()
    }

    /// 正则原文
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
