//! Data access layer repositories.
//!
//! One repository per entity, each wrapping a borrowed database connection
//! and issuing single parameterized statements. No retries and no
//! multi-statement transactions; every write is one atomic statement and
//! failures propagate to the caller as `DbErr`.

pub mod alimentacion;
pub mod animal;
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
