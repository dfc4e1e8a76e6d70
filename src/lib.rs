pub mod config;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod usecases;
