pub mod browser;
pub mod config;
pub mod history;
pub mod internships;
pub mod output;
pub mod quiz;
