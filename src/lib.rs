pub mod configuration;
pub mod db;
pub mod errors;
pub mod forms;
pub mod helpers;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod views;
