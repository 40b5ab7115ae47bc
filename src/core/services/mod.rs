pub mod backend;
pub mod http;

pub use backend::*;
