use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnimalDto {
    pub id: i32,
    pub identificacion: String,
    pub especie: String,
    pub estado: String,
    pub fecha_nacimiento: NaiveDate,
    pub fecha_alta: NaiveDate,
    pub id_explotacion: i32,
}

impl From<entity::animal::Model> for AnimalDto {
    fn from(model: entity::animal::Model) -> Self {
        Self {
            id: model.id,
            identificacion: model.identificacion,
            especie: model.especie,
            estado: model.estado,
            fecha_nacimiento: model.fecha_nacimiento,
            fecha_alta: model.fecha_alta,
            id_explotacion: model.id_explotacion,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAnimalDto {
    pub identificacion: String,
    pub especie: String,
    pub estado: String,
    pub fecha_nacimiento: NaiveDate,
    pub fecha_alta: NaiveDate,
    pub id_explotacion: i32,
}
