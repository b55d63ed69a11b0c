pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod seeds;
pub mod services;
pub mod store;
pub mod utils;
