pub mod tube_backend;

pub use tube_backend::TubeBackend;
