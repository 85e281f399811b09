pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod models;
pub mod pages;
pub mod state;
