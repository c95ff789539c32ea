//! Request/response bodies shared across the API surface.
//!
//! Every endpoint speaks typed DTOs; database models never cross the HTTP
//! boundary directly (usuario rows in particular carry the password hash,
//! which no response may include).

pub mod alimentacion;
pub mod animal;
pub mod api;
pub mod auth;
pub mod chatbot;
pub mod explotacion;
pub mod incidencia;
pub mod informe;
pub mod inspeccion;
pub mod medicamento;
pub mod movimiento;
pub mod parcela;
pub mod titular;
pub mod usuario;
pub mod vacunacion;
