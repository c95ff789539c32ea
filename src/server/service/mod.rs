//! Business services sitting between controllers and repositories.
//!
//! Most endpoints are thin enough to call repositories directly; services
//! exist where there is actual behavior: credential handling, the report
//! aggregator, and the chatbot proxy.

pub mod auth;
pub mod chatbot;
pub mod informe;
