use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MovimientoDto {
    pub id: i32,
    pub tipo: String,
    pub fecha: NaiveDate,
    pub motivo: String,
    pub procedencia_destino: String,
    pub id_animal: i32,
}

impl From<entity::movimiento::Model> for MovimientoDto {
    fn from(model: entity::movimiento::Model) -> Self {
        Self {
            id: model.id,
            tipo: model.tipo,
            fecha: model.fecha,
            motivo: model.motivo,
            procedencia_destino: model.procedencia_destino,
            id_animal: model.id_animal,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMovimientoDto {
    pub tipo: String,
    pub fecha: NaiveDate,
    pub motivo: String,
    pub procedencia_destino: String,
    pub id_animal: i32,
}
