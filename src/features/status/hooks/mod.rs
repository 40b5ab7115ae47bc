pub mod use_status;

pub use use_status::*;
