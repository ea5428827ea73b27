//! 后端接口领域模块：HTTP JSON 契约的类型化封装。
//!
//! 对外导出以 [`crate::backend`] 为准，此处仅做模块划分。

pub mod enums;
pub mod functions;
pub mod impl_traits;
pub mod structs;
pub mod traits;
