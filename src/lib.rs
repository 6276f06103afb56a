pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod locales;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
