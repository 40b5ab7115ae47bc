pub mod chat_operations;

pub use chat_operations::*;
