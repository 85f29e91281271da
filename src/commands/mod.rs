pub mod agenda;
pub mod config;
pub mod history;
pub mod session;
