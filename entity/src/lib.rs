pub mod prelude;

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
