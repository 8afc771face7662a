pub mod analysis;
pub mod fallback;
#[cfg(test)]
pub mod fixtures;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod response_parser;
pub mod signals;
