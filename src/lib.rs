pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod validation;
