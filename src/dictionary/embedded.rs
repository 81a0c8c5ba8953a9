//! 内置词典资源
//! 编译期通过 include_str! 固化 data/dictionaries 下的词典文件

static STOPWORDS: &str = include_str!("../../data/dictionaries/stopwords.dic");
static COMMON_PERSON_NAMES: &str = include_str!("../../data/dictionaries/common_person_names.dic");
static PRONOUNS: &str = include_str!("../../data/dictionaries/pronouns.dic");
static CONTRACTIONS: &str = include_str!("../../data/dictionaries/contracoes.dic");
static ADVERBS: &str = include_str!("../../data/dictionaries/adverbs.dic");
static NUMBERS_IN_FULL: &str = include_str!("../../data/dictionaries/numbers_in_full.dic");

/// 按逻辑文件名查找内置词典原文
pub fn embedded_dictionary(file_name: &str) -> Option<&'static str> {
    match file_name {
        "stopwords.dic" => Some(STOPWORDS),
        "common_person_names.dic" => Some(COMMON_PERSON_NAMES),
        "pronouns.dic" => Some(PRONOUNS),
        "contracoes.dic" => Some(CONTRACTIONS),
        "adverbs.dic" => Some(ADVERBS),
        "numbers_in_full.dic" => Some(NUMBERS_IN_FULL),
        _ => None,
    }
}
