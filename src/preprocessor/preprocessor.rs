//! 预处理器核心：持有配置与词典模式缓存，提供各规则与 clean 流水线
use std::sync::Arc;

use tracing::{debug, trace};

use super::pipeline::{Rule, Stage, CLEAN_STAGES};
use super::rules;
use crate::compiler::{PatternCache, PatternSlot};
use crate::config::GlobalConfig;
use crate::dictionary::{Dictionary, DictionaryLoader, DictionaryName};
use crate::error::TppResult;

/// 文本预处理器
/// 克隆共享同一缓存，不同实例缓存互相独立
#[derive(Debug, Clone)]
pub struct TextPreProcessor {
    config: GlobalConfig,
    cache: Arc<PatternCache>,
}

impl Default for TextPreProcessor {
    fn default() -> Self {
        Self::new(GlobalConfig::default())
    }
}

impl TextPreProcessor {
    /// 创建预处理器（词典在首次使用时才加载）
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            config,
            cache: Arc::new(PatternCache::new()),
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// 预先编译全部词典槽位
    pub fn warm_up(&self) -> TppResult<()> {
        for slot in PatternSlot::ALL {
            self.cache.get_or_compile(slot, &self.config.dictionary_source)?;
        }
        debug!("词典模式预热完成，槽位数：{}", self.cache.compiled_count());
        Ok(())
    }

    /// 读取词典原始词条
    pub fn get_dictionary(&self, name: DictionaryName) -> TppResult<Dictionary> {
        DictionaryLoader::load_dictionary(&self.config.dictionary_source, name)
    }

    /// 读取停用词
    pub fn get_stopwords(&self) -> TppResult<Dictionary> {
        self.get_dictionary(DictionaryName::Stopwords)
    }

    fn replace_dictionary_matches(&self, slot: PatternSlot, text: &str) -> TppResult<String> {
        let pattern = self.cache.get_or_compile(slot, &self.config.dictionary_source)?;
        Ok(pattern.replace_with_space(text))
    }

    // ===== 词典规则 =====

    /// 先去重音，再移除常见人名
    pub fn remove_person_names(&self, text: &str) -> TppResult<String> {
        let text = rules::remove_accents(text);
        self.replace_dictionary_matches(PatternSlot::PersonNames, &text)
    }

    pub fn remove_pronouns(&self, text: &str) -> TppResult<String> {
        self.replace_dictionary_matches(PatternSlot::Pronouns, text)
    }

    pub fn remove_reduced_or_contracted_words(&self, text: &str) -> TppResult<String> {
        self.replace_dictionary_matches(PatternSlot::Contractions, text)
    }

    pub fn remove_adverbs(&self, text: &str) -> TppResult<String> {
        self.replace_dictionary_matches(PatternSlot::Adverbs, text)
    }

    pub fn remove_numbers_in_full(&self, text: &str) -> TppResult<String> {
        self.replace_dictionary_matches(PatternSlot::NumbersInFull, text)
    }

    pub fn remove_stopwords(&self, text: &str) -> TppResult<String> {
        self.replace_dictionary_matches(PatternSlot::Stopwords, text)
    }

    // ===== 结构规则 =====

    pub fn remove_hour(&self, text: &str) -> String {
        rules::remove_hour(text)
    }

    pub fn remove_special_characters(&self, text: &str) -> String {
        rules::remove_special_characters(text)
    }

    pub fn remove_excessive_spaces(&self, text: &str) -> String {
        rules::remove_excessive_spaces(text)
    }

    pub fn remove_accents(&self, text: &str) -> String {
        rules::remove_accents(text)
    }

    pub fn remove_symbols_from_numbers(&self, text: &str) -> String {
        rules::remove_symbols_from_numbers(text)
    }

    pub fn remove_numbers(&self, text: &str) -> String {
        rules::remove_numbers(text)
    }

    pub fn remove_urls(&self, text: &str) -> String {
        rules::remove_urls(text)
    }

    /// 按规则标识执行单条规则
    pub fn apply(&self, rule: Rule, text: &str) -> TppResult<String> {
        match rule {
            Rule::Hour => Ok(self.remove_hour(text)),
            Rule::PersonNames => self.remove_person_names(text),
            Rule::Pronouns => self.remove_pronouns(text),
            Rule::Contractions => self.remove_reduced_or_contracted_words(text),
            Rule::Adverbs => self.remove_adverbs(text),
            Rule::NumbersInFull => self.remove_numbers_in_full(text),
            Rule::SpecialCharacters => Ok(self.remove_special_characters(text)),
            Rule::ExcessiveSpaces => Ok(self.remove_excessive_spaces(text)),
            Rule::Accents => Ok(self.remove_accents(text)),
            Rule::SymbolsFromNumbers => Ok(self.remove_symbols_from_numbers(text)),
            Rule::Numbers => Ok(self.remove_numbers(text)),
            Rule::Urls => Ok(self.remove_urls(text)),
            Rule::Stopwords => self.remove_stopwords(text),
        }
    }

    // ===== 流水线 =====

    /// 完整清洗，特殊字符开关取自配置
    pub fn clean(&self, text: &str) -> TppResult<String> {
        self.clean_with(text, self.config.strip_special_characters)
    }

    /// 完整清洗，显式指定是否移除特殊字符
    /// 任一阶段失败即中止，不返回部分结果
    pub fn clean_with(&self, text: &str, strip_special_characters: bool) -> TppResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let mut result = text.to_string();
        for stage in CLEAN_STAGES {
            result = match stage {
                Stage::Apply(Rule::SpecialCharacters) if !strip_special_characters => continue,
                Stage::Apply(rule) => self.apply(rule, &result)?,
                Stage::Lowercase => result.to_lowercase(),
                Stage::Trim => result.trim().to_string(),
            };
            trace!("阶段 {:?} 完成：{}", stage, result);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigManager, DictionarySource};

    const SENTENCE: &str = "Afirma o réu que seu funcionário Mário Tadeu dirigia o veículo na ocasião.";

    #[test]
    fn test_remove_person_names() {
        let tpp = TextPreProcessor::default();
        assert_eq!(
            tpp.remove_person_names(SENTENCE).unwrap(),
            "Afirma o reu que seu funcionario     dirigia o veiculo na ocasiao."
        );
    }

    #[test]
    fn test_remove_pronouns() {
        let tpp = TextPreProcessor::default();
        assert_eq!(
            tpp.remove_pronouns(SENTENCE).unwrap(),
            "Afirma   réu     funcionário Mário Tadeu dirigia   veículo na ocasião."
        );
    }

    #[test]
    fn test_remove_reduced_or_contracted_words() {
        let tpp = TextPreProcessor::default();
        assert_eq!(
            tpp.remove_reduced_or_contracted_words("Ninguém sabe ao certo donde partiram os gritos.").unwrap(),
            "Ninguém sabe   certo   partiram os gritos."
        );
    }

    #[test]
    fn test_remove_adverbs() {
        let tpp = TextPreProcessor::default();
        let text = "Chegaram tarde para o Jantar. Era a moça mais bonita da festa. Partiram ontem apressadamente.";
        assert_eq!(
            tpp.remove_adverbs(text).unwrap(),
            "Chegaram   para o Jantar. Era a moça   bonita da festa. Partiram    ."
        );
    }

    #[test]
    fn test_remove_numbers_in_full() {
        let tpp = TextPreProcessor::default();
        assert_eq!(
            tpp.remove_numbers_in_full("Foram vinte e três dias e mil reais, um a um.").unwrap(),
            "Foram   e   dias e   reais,   a  ."
        );
    }

    #[test]
    fn test_remove_stopwords() {
        let tpp = TextPreProcessor::default();
        assert_eq!(
            tpp.remove_stopwords("a casa de papel das flores do campo").unwrap(),
            "  casa   papel   flores   campo"
        );
    }

    #[test]
    fn test_dictionary_rules_idempotent() {
        let tpp = TextPreProcessor::default();
        let once = tpp.remove_pronouns(SENTENCE).unwrap();
        assert_eq!(tpp.remove_pronouns(&once).unwrap(), once);

        let once = tpp.remove_stopwords("a casa de papel").unwrap();
        assert_eq!(tpp.remove_stopwords(&once).unwrap(), once);
    }

    #[test]
    fn test_apply_dispatch_matches_direct_call() {
        let tpp = TextPreProcessor::default();
        assert_eq!(tpp.apply(Rule::Pronouns, SENTENCE).unwrap(), tpp.remove_pronouns(SENTENCE).unwrap());
        assert_eq!(tpp.apply(Rule::Hour, "às 10h").unwrap(), "às  ");
    }

    #[test]
    fn test_clean_empty_input_skips_rules() {
        let tpp = TextPreProcessor::default();
        assert_eq!(tpp.clean("").unwrap(), "");
        assert_eq!(tpp.cache().compiled_count(), 0);
    }

    #[test]
    fn test_clean() {
        let tpp = TextPreProcessor::default();
        let text = "Ontem às 15h o Dr. Mário Tadeu pagou R$ 1.234,00 ao funcionário em www.exemplo.com.br/pagamentos?id=3 e saiu.";

        assert_eq!(tpp.clean(text).unwrap(), "ontem 15h dr pagou r funcionario saiu");
        assert_eq!(tpp.cache().compiled_count(), PatternSlot::ALL.len());
    }

    #[test]
    fn test_clean_keep_special_characters() {
        let tpp = TextPreProcessor::default();
        let text = "Ontem às 15h o Dr. Mário Tadeu pagou R$ 1.234,00 ao funcionário em www.exemplo.com.br/pagamentos?id=3 e saiu.";

        assert_eq!(tpp.clean_with(text, false).unwrap(), "ontem 15h dr. pagou r$ , funcionario saiu.");

        let config = ConfigManager::custom().strip_special_characters(false).build();
        let tpp = TextPreProcessor::new(config);
        assert_eq!(tpp.clean(text).unwrap(), "ontem 15h dr. pagou r$ , funcionario saiu.");
    }

    #[test]
    fn test_clean_aborts_on_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::custom()
            .dictionary_source(DictionarySource::Directory(dir.path().to_path_buf()))
            .build();
        let tpp = TextPreProcessor::new(config);

        let err = tpp.clean("qualquer texto").unwrap_err();
        assert!(matches!(err, crate::TextPpError::ResourceNotFound(_)));
    }

    #[test]
    fn test_clones_share_cache() {
        let tpp = TextPreProcessor::default();
        let clone = tpp.clone();
        clone.remove_adverbs("ontem").unwrap();

        assert!(tpp.cache().is_compiled(PatternSlot::Adverbs));
        assert!(!TextPreProcessor::default().cache().is_compiled(PatternSlot::Adverbs));
    }

    #[test]
    fn test_warm_up() {
        let tpp = TextPreProcessor::default();
        tpp.warm_up().unwrap();
        assert_eq!(tpp.cache().compiled_count(), PatternSlot::ALL.len());
    }
}
