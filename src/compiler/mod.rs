//! 编译模块：将词典编译为带边界的正则模式并缓存
pub mod pattern;
pub mod compiler;
pub mod cache;

pub use self::pattern::{CompiledPattern, PatternSlot};
pub use self::compiler::PatternCompiler;
pub use self::cache::PatternCache;
