//! Open locally cloned GitHub repositories in an editor of choice.

pub mod config;
pub mod editor;
pub mod error;
pub mod flow;
pub mod logging;
pub mod opener;
pub mod prompt;
pub mod repository;

pub use config::Config;
pub use error::{Error, Result};
pub use flow::{LaunchPlan, Session};
pub use repository::Repository;
