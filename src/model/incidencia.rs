use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IncidenciaDto {
    pub id: i32,
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub codigo_anterior: Option<String>,
    pub codigo_actual: Option<String>,
    pub id_animal: i32,
}

impl From<entity::incidencia::Model> for IncidenciaDto {
    fn from(model: entity::incidencia::Model) -> Self {
        Self {
            id: model.id,
            fecha: model.fecha,
            descripcion: model.descripcion,
            codigo_anterior: model.codigo_anterior,
            codigo_actual: model.codigo_actual,
            id_animal: model.id_animal,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateIncidenciaDto {
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub codigo_anterior: Option<String>,
    pub codigo_actual: Option<String>,
    pub id_animal: i32,
}
