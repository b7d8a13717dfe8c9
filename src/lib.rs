pub mod arguments;
pub mod config;
pub mod errors;
pub mod layout;
pub mod logger;
pub mod pools;
pub mod report;
pub mod rpc;
pub mod run;
pub mod security;
pub mod tokens;
