//! HTTP controller endpoints for the Agromano web API.
//!
//! Axum handlers for authentication, the per-entity CRUD surface, the
//! titular report exports, and the chatbot proxy. Controllers parse typed
//! request bodies, call repositories/services, and map results to HTTP
//! responses. Missing rows on reads are returned as `null` bodies, not 404s.

pub mod alimentacion;
pub mod animal;
pub mod auth;
pub mod chatbot;
pub mod explotacion;
pub mod incidencia;
pub mod inspeccion;
pub mod medicamento;
pub mod movimiento;
pub mod parcela;
pub mod titular;
pub mod usuario;
pub mod vacunacion;
pub mod vacunacion_animal;
