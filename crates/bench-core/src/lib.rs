pub mod config;
pub mod error;
pub mod resolver;
pub mod run;
pub mod target;
