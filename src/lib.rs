pub mod access;
pub mod api;
pub mod branding;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod interactive;
pub mod logging;
pub mod photos;
pub mod submit;
