use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AlimentacionDto {
    pub id: i32,
    pub fecha: NaiveDate,
    pub tipo: String,
    pub cantidad: f64,
    pub lote: String,
    pub factura: String,
    pub id_explotacion: i32,
}

impl From<entity::alimentacion::Model> for AlimentacionDto {
    fn from(model: entity::alimentacion::Model) -> Self {
        Self {
            id: model.id,
            fecha: model.fecha,
            tipo: model.tipo,
            cantidad: model.cantidad,
            lote: model.lote,
            factura: model.factura,
            id_explotacion: model.id_explotacion,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAlimentacionDto {
    pub fecha: NaiveDate,
    pub tipo: String,
    pub cantidad: f64,
    pub lote: String,
    pub factura: String,
    pub id_explotacion: i32,
}
