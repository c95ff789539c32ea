use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MedicamentoDto {
    pub id: i32,
    pub fecha: NaiveDate,
    pub receta: String,
    pub medicamento: String,
    pub factura: String,
    pub id_explotacion: i32,
}

impl From<entity::medicamento::Model> for MedicamentoDto {
    fn from(model: entity::medicamento::Model) -> Self {
        Self {
            id: model.id,
            fecha: model.fecha,
            receta: model.receta,
            medicamento: model.medicamento,
            factura: model.factura,
            id_explotacion: model.id_explotacion,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMedicamentoDto {
    pub fecha: NaiveDate,
    pub receta: String,
    pub medicamento: String,
    pub factura: String,
    pub id_explotacion: i32,
}
