pub mod config;
pub mod doctor;
pub mod logging;
pub mod menu;
pub mod session;
pub mod shell;
