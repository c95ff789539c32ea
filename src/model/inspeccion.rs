use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InspeccionDto {
    pub id: i32,
    pub fecha: NaiveDate,
    pub oficial: bool,
    pub tipo: String,
    pub numero_acta: String,
    pub id_explotacion: i32,
}

impl From<entity::inspeccion::Model> for InspeccionDto {
    fn from(model: entity::inspeccion::Model) -> Self {
        Self {
            id: model.id,
            fecha: model.fecha,
            oficial: model.oficial,
            tipo: model.tipo,
            numero_acta: model.numero_acta,
            id_explotacion: model.id_explotacion,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateInspeccionDto {
    pub fecha: NaiveDate,
    pub oficial: bool,
    pub tipo: String,
    pub numero_acta: String,
    pub id_explotacion: i32,
}
