use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ParcelaDto {
    pub id: i32,
    pub coordenadas: String,
    pub extension: f64,
    pub id_explotacion: i32,
}

impl From<entity::parcela::Model> for ParcelaDto {
    fn from(model: entity::parcela::Model) -> Self {
        Self {
            id: model.id,
            coordenadas: model.coordenadas,
            extension: model.extension,
            id_explotacion: model.id_explotacion,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateParcelaDto {
    pub coordenadas: String,
    pub extension: f64,
    pub id_explotacion: i32,
}
