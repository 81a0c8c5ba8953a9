//! 词典模式编译器
//! 将词典词条转义后拼接为带边界的选择分支正则

use std::time::Instant;
use regex::Regex;
use tracing::{debug, warn};

use super::pattern::{CompiledPattern, PatternSlot};
use crate::config::DictionarySource;
use crate::dictionary::DictionaryLoader;
use crate::error::{TppResult, TextPpError};
use crate::preprocessor::rules::remove_accents;

/// 词典模式编译器
pub struct PatternCompiler;

impl PatternCompiler {
    /// 编译槽位对应的词典模式
    pub fn compile_dictionary_pattern(
        slot: PatternSlot,
        source: &DictionarySource,
    ) -> TppResult<CompiledPattern> {
        let start = Instant::now();
        let dictionary = slot.dictionary();

        // 1. 加载词典
        let entries = DictionaryLoader::load_dictionary(source, dictionary)?;

        // 2. 规范化并拼接
        let (alternation, entry_count) = Self::build_alternation(&entries, slot.strips_accents());
        if entry_count == 0 {
            return Err(TextPpError::EmptyDictionary(dictionary.file_name().to_string()));
        }

        // 3. 编译正则
        let regex = Regex::new(&Self::wrap_with_boundaries(&alternation))?;

        debug!(
            "✅ 词典模式编译完成：{:?}，词条{}条，耗时{:?}",
            slot,
            entry_count,
            start.elapsed()
        );

        Ok(CompiledPattern {
            slot,
            regex,
            entry_count,
        })
    }

    /// 拼接选择分支：跳过空词条，词条按字面量转义
    pub fn build_alternation(entries: &[String], strip_accents: bool) -> (String, usize) {
        let mut parts = Vec::with_capacity(entries.len());
        let mut skipped = 0;

        for entry in entries {
            let entry = if strip_accents {
                remove_accents(entry)
            } else {
                entry.clone()
            };

            if entry.is_empty() {
                skipped += 1;
                continue;
            }
            parts.push(regex::escape(&entry));
        }

        if skipped > 0 {
            warn!("词典中存在{}条空词条，已跳过", skipped);
        }

        let count = parts.len();
        (parts.join("|"), count)
    }

    /// 前后包裹边界：(^|\b)(...)($|\b)
    pub fn wrap_with_boundaries(alternation: &str) -> String {
        format!(r"(^|\b)({})($|\b)", alternation)
    }
}
