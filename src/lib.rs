#![deny(clippy::print_stdout)]

pub mod batch;
pub mod command_line;
pub mod descriptors;
pub mod engine;
pub mod filters;
pub mod rest_api;
pub mod table;
pub mod toolkit;
