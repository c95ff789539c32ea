use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VacunacionDto {
    pub id: i32,
    pub fecha: NaiveDate,
    pub tipo: String,
    pub dosis: String,
    pub nombre_comercial: String,
    pub veterinario: String,
    pub id_explotacion: i32,
}

impl From<entity::vacunacion::Model> for VacunacionDto {
    fn from(model: entity::vacunacion::Model) -> Self {
        Self {
            id: model.id,
            fecha: model.fecha,
            tipo: model.tipo,
            dosis: model.dosis,
            nombre_comercial: model.nombre_comercial,
            veterinario: model.veterinario,
            id_explotacion: model.id_explotacion,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateVacunacionDto {
    pub fecha: NaiveDate,
    pub tipo: String,
    pub dosis: String,
    pub nombre_comercial: String,
    pub veterinario: String,
    pub id_explotacion: i32,
}

/// Link between a vaccination campaign and one of the animals it covered.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VacunacionAnimalDto {
    pub id: i32,
    pub id_vacunacion: i32,
    pub id_animal: i32,
}

impl From<entity::vacunacion_animal::Model> for VacunacionAnimalDto {
    fn from(model: entity::vacunacion_animal::Model) -> Self {
        Self {
            id: model.id,
            id_vacunacion: model.id_vacunacion,
            id_animal: model.id_animal,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateVacunacionAnimalDto {
    pub id_vacunacion: i32,
    pub id_animal: i32,
}
