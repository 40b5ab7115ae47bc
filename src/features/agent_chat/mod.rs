pub mod components;
pub mod formatter;
pub mod models;
pub mod services;
pub mod session;
