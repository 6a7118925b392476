pub mod config;
pub mod content;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod seed;
pub mod session;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;
