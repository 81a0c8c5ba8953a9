//! 词典模式缓存
//! 每个词典规则一个槽位，首次使用时编译，之后一直复用

use once_cell::sync::OnceCell;

use super::compiler::PatternCompiler;
use super::pattern::{CompiledPattern, PatternSlot};
use crate::config::DictionarySource;
use crate::error::TppResult;

/// 词典模式缓存（由引擎实例持有，线程安全，只构建一次）
#[derive(Debug, Default)]
pub struct PatternCache {
    person_names: OnceCell<CompiledPattern>,
    pronouns: OnceCell<CompiledPattern>,
    contractions: OnceCell<CompiledPattern>,
    adverbs: OnceCell<CompiledPattern>,
    numbers_in_full: OnceCell<CompiledPattern>,
    stopwords: OnceCell<CompiledPattern>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取槽位模式，未编译时编译并写入槽位
    /// 编译失败不写入槽位，下次调用会重新尝试
    pub fn get_or_compile(
        &self,
        slot: PatternSlot,
        source: &DictionarySource,
    ) -> TppResult<&CompiledPattern> {
        self.cell(slot)
            .get_or_try_init(|| PatternCompiler::compile_dictionary_pattern(slot, source))
    }

    /// 槽位是否已编译
    pub fn is_compiled(&self, slot: PatternSlot) -> bool {
        self.cell(slot).get().is_some()
    }

    /// 已编译槽位数量
    pub fn compiled_count(&self) -> usize {
        PatternSlot::ALL.iter().filter(|slot| self.is_compiled(**slot)).count()
    }

    fn cell(&self, slot: PatternSlot) -> &OnceCell<CompiledPattern> {
        match slot {
            PatternSlot::PersonNames => &self.person_names,
            PatternSlot::Pronouns => &self.pronouns,
            PatternSlot::Contractions => &self.contractions,
            PatternSlot::Adverbs => &self.adverbs,
            PatternSlot::NumbersInFull => &self.numbers_in_full,
            PatternSlot::Stopwords => &self.stopwords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_slot_built_once() {
        let cache = PatternCache::new();
        assert!(!cache.is_compiled(PatternSlot::Adverbs));

        let first = cache.get_or_compile(PatternSlot::Adverbs, &DictionarySource::Embedded).unwrap();
        let second = cache.get_or_compile(PatternSlot::Adverbs, &DictionarySource::Embedded).unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(cache.is_compiled(PatternSlot::Adverbs));
        assert_eq!(cache.compiled_count(), 1);
    }

    #[test]
    fn test_slots_are_independent() {
        // 停用词与人名分属不同槽位
        let cache = PatternCache::new();
        cache.get_or_compile(PatternSlot::Stopwords, &DictionarySource::Embedded).unwrap();

        assert!(cache.is_compiled(PatternSlot::Stopwords));
        assert!(!cache.is_compiled(PatternSlot::PersonNames));
    }

    #[test]
    fn test_cached_pattern_ignores_later_changes() {
        // 一旦编译，词典文件变化不再生效
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pronouns.dic");
        fs::write(&path, "eu\n").unwrap();
        let source = DictionarySource::Directory(dir.path().to_path_buf());

        let cache = PatternCache::new();
        let first = cache.get_or_compile(PatternSlot::Pronouns, &source).unwrap();
        assert_eq!(first.entry_count, 1);

        fs::write(&path, "eu\ntu\n").unwrap();
        let second = cache.get_or_compile(PatternSlot::Pronouns, &source).unwrap();
        assert_eq!(second.entry_count, 1);
        assert!(!second.regex.is_match("tu"));
    }

    #[test]
    fn test_failed_build_leaves_slot_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = DictionarySource::Directory(dir.path().to_path_buf());
        let cache = PatternCache::new();

        assert!(cache.get_or_compile(PatternSlot::Adverbs, &source).is_err());
        assert!(!cache.is_compiled(PatternSlot::Adverbs));

        fs::write(dir.path().join("adverbs.dic"), "ontem\n").unwrap();
        assert!(cache.get_or_compile(PatternSlot::Adverbs, &source).is_ok());
        assert!(cache.is_compiled(PatternSlot::Adverbs));
    }

    #[test]
    fn test_concurrent_first_use() {
        let cache = std::sync::Arc::new(PatternCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    let pattern = cache
                        .get_or_compile(PatternSlot::Stopwords, &DictionarySource::Embedded)
                        .unwrap();
                    pattern as *const CompiledPattern as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
