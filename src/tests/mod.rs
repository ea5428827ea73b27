//! 测试模块入口：公共替身在 `lib` 子模块，测试用例在 `internal`。

#[cfg(test)]
pub use lib::*;
