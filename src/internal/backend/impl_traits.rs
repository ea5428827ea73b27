pub mod impl_tube_backend;
