pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod pagination;
pub mod render;
pub mod result_generator;
