pub mod backend;
pub mod controller;
pub mod entitlement;
pub mod history;
pub mod states;
