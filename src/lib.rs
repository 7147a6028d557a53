//! Shortener - A minimal in-memory URL shortener
//!
//! `POST /` with a URL as the raw body returns `201 Created` and a short URL;
//! `GET /{id}` answers `307 Temporary Redirect` to the stored URL.
//!
//! # Architecture
//! - `utils`: short key generation
//! - `storage`: the in-memory key → URL store
//! - `api`: HTTP handlers, routes and middleware
//! - `config`: static configuration (TOML + env)
//! - `runtime`: composition root and server startup
//! - `system`: logging and fatal panic handling

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod storage;
pub mod system;
pub mod utils;
