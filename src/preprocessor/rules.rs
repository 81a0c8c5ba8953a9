//! 结构规则：固定正则或字符表驱动，不依赖词典

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// 逐字符替换为空格的特殊字符表
pub const SPECIAL_CHARACTERS: &str = "-#?º°ª.:/;~^`[{]}\\|!$%\"'&*()=+,><\t\r\n…";

static HOUR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(^|\b)(\d)+(\s)*(h|hr|hrs|hs)($|\b)").unwrap()
});
static EXCESSIVE_SPACES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(" +").unwrap());
static NUMBERS_WITH_SYMBOLS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\d]+)([./-])*([\d ])").unwrap()
});
static PURE_NUMBERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|\b)(\d+)(\b|$)").unwrap()
});
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-a-zA-Z0-9@:%_\+.~#?&/=]{2,256}\.[a-z]{2,4}\b(/[-a-zA-Z0-9@:%_\+.~#?&/=]*)?").unwrap()
});

/// 移除时间表达（11h、15hs、16 h、17hrs），忽略大小写
pub fn remove_hour(text: &str) -> String {
    HOUR_REGEX.replace_all(text, " ").into_owned()
}

/// 特殊字符逐个替换为空格
pub fn remove_special_characters(text: &str) -> String {
    text.chars()
        .map(|c| if SPECIAL_CHARACTERS.contains(c) { ' ' } else { c })
        .collect()
}

/// 连续空格（仅 U+0020）合并为一个
pub fn remove_excessive_spaces(text: &str) -> String {
    EXCESSIVE_SPACES_REGEX.replace_all(text, " ").into_owned()
}

/// NFKD 分解后丢弃所有非 ASCII 字符
/// 空串或纯空白原样返回
pub fn remove_accents(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    text.nfkd().filter(|c| c.is_ascii()).collect()
}

/// 去掉数字间的分隔符（. / -），保留两侧数字
pub fn remove_symbols_from_numbers(text: &str) -> String {
    NUMBERS_WITH_SYMBOLS_REGEX.replace_all(text, "${1}${3}").into_owned()
}

/// 移除独立的纯数字
pub fn remove_numbers(text: &str) -> String {
    PURE_NUMBERS_REGEX.replace_all(text, " ").into_owned()
}

/// 移除 URL 形态的片段
pub fn remove_urls(text: &str) -> String {
    URL_REGEX.replace_all(text, " ").into_owned()
}
