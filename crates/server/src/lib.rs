pub mod auth;
pub mod config;
pub mod db;
pub mod error_convert;
pub mod health;
pub mod openapi;
pub mod qr;
pub mod repo;
pub mod rest;
pub mod telemetry;
