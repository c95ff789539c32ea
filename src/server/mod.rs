//! Server application core modules.
//!
//! This module contains all server-side functionality for the Agromano
//! application, including HTTP routing, session-based authentication,
//! database operations, the per-titular report aggregator, and the chatbot
//! proxy. It provides the complete backend behind the farm management
//! frontend.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
