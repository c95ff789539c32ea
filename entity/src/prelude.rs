pub use super::alimentacion::Entity as Alimentacion;
pub use super::animal::Entity as Animal;
pub use super::explotacion::Entity as Explotacion;
pub use super::incidencia::Entity as Incidencia;
pub use super::inspeccion::Entity as Inspeccion;
pub use super::medicamento::Entity as Medicamento;
pub use super::movimiento::Entity as Movimiento;
pub use super::parcela::Entity as Parcela;
pub use super::titular::Entity as Titular;
pub use super::usuario::Entity as Usuario;
pub use super::vacunacion::Entity as Vacunacion;
pub use super::vacunacion_animal::Entity as VacunacionAnimal;
