pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod ui;
pub mod view;
