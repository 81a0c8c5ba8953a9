//! 规则标识与 clean 流水线阶段定义

use std::fmt;
use std::str::FromStr;

use crate::compiler::PatternSlot;
use crate::error::TextPpError;

/// 单条清洗规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Hour,
    PersonNames,
    Pronouns,
    Contractions,
    Adverbs,
    NumbersInFull,
    SpecialCharacters,
    ExcessiveSpaces,
    Accents,
    SymbolsFromNumbers,
    Numbers,
    Urls,
    Stopwords,
}

impl Rule {
    pub const ALL: [Rule; 13] = [
        Rule::Hour,
        Rule::PersonNames,
        Rule::Pronouns,
        Rule::Contractions,
        Rule::Adverbs,
        Rule::NumbersInFull,
        Rule::SpecialCharacters,
        Rule::ExcessiveSpaces,
        Rule::Accents,
        Rule::SymbolsFromNumbers,
        Rule::Numbers,
        Rule::Urls,
        Rule::Stopwords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Hour => "hour",
            Rule::PersonNames => "person_names",
            Rule::Pronouns => "pronouns",
            Rule::Contractions => "contractions",
            Rule::Adverbs => "adverbs",
            Rule::NumbersInFull => "numbers_in_full",
            Rule::SpecialCharacters => "special_characters",
            Rule::ExcessiveSpaces => "excessive_spaces",
            Rule::Accents => "accents",
            Rule::SymbolsFromNumbers => "symbols_from_numbers",
            Rule::Numbers => "numbers",
            Rule::Urls => "urls",
            Rule::Stopwords => "stopwords",
        }
    }

    /// 词典规则对应的缓存槽位；结构规则返回 None
    pub fn pattern_slot(&self) -> Option<PatternSlot> {
        match self {
            Rule::PersonNames => Some(PatternSlot::PersonNames),
            Rule::Pronouns => Some(PatternSlot::Pronouns),
            Rule::Contractions => Some(PatternSlot::Contractions),
            Rule::Adverbs => Some(PatternSlot::Adverbs),
            Rule::NumbersInFull => Some(PatternSlot::NumbersInFull),
            Rule::Stopwords => Some(PatternSlot::Stopwords),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = TextPpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| TextPpError::InvalidInput(format!("未知规则：{}", s)))
    }
}

/// 流水线阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Apply(Rule),
    Lowercase,
    Trim,
}

/// clean 的固定阶段顺序，调整顺序会改变输出
/// SpecialCharacters 阶段受配置开关控制
pub const CLEAN_STAGES: [Stage; 14] = [
    Stage::Apply(Rule::PersonNames),
    Stage::Apply(Rule::Contractions),
    Stage::Apply(Rule::Pronouns),
    Stage::Apply(Rule::Adverbs),
    Stage::Apply(Rule::NumbersInFull),
    Stage::Apply(Rule::SymbolsFromNumbers),
    Stage::Apply(Rule::Urls),
    Stage::Lowercase,
    Stage::Apply(Rule::Stopwords),
    Stage::Apply(Rule::SpecialCharacters),
    Stage::Apply(Rule::Accents),
    Stage::Apply(Rule::Numbers),
    Stage::Apply(Rule::ExcessiveSpaces),
    Stage::Trim,
];
