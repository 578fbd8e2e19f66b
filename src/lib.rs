pub mod config;
pub mod handler;
pub mod logger;
pub mod page;
pub mod response;
pub mod server;
pub mod state;
