pub mod config;
pub mod open;
pub mod uninstall;
pub mod upgrade;
