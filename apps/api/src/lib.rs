//! Burnish API — loads an authenticated user's extracted CV, submits it for
//! an LLM enhancement pass, and renders the result.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod enhance;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
