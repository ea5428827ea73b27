//! 套餐与权益：套餐模型、清晰度限制、可注入的权益策略、定价页数据。

pub mod catalog;
pub mod plan;
pub mod policy;
pub mod quality_gate;
