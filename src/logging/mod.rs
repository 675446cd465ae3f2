pub mod functions;
pub mod impls;
pub mod types;
