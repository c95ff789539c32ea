pub use sea_orm_migration::prelude::*;

mod m20260115_000001_usuario;
mod m20260115_000002_titular;
mod m20260115_000003_explotacion;
mod m20260115_000004_parcela;
mod m20260115_000005_animal;
mod m20260115_000006_movimiento;
mod m20260115_000007_incidencia;
mod m20260115_000008_alimentacion;
mod m20260115_000009_medicamento;
mod m20260115_000010_vacunacion;
mod m20260115_000011_vacunacion_animal;
mod m20260115_000012_inspeccion;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_usuario::Migration),
            Box::new(m20260115_000002_titular::Migration),
            Box::new(m20260115_000003_explotacion::Migration),
            Box::new(m20260115_000004_parcela::Migration),
            Box::new(m20260115_000005_animal::Migration),
            Box::new(m20260115_000006_movimiento::Migration),
            Box::new(m20260115_000007_incidencia::Migration),
            Box::new(m20260115_000008_alimentacion::Migration),
            Box::new(m20260115_000009_medicamento::Migration),
            Box::new(m20260115_000010_vacunacion::Migration),
            Box::new(m20260115_000011_vacunacion_animal::Migration),
            Box::new(m20260115_000012_inspeccion::Migration),
        ]
    }
}
