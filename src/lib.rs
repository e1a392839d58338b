pub mod build_info;
#[cfg(test)]
mod build_env;
pub mod cli;
pub mod commands;
pub mod error;
pub mod log;
