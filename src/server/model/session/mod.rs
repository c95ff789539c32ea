//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Session state is limited to the logged-in usuario's id;
//! everything else is looked up per request.

pub mod usuario;
