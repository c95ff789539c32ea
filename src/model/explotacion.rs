use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExplotacionDto {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub direccion: String,
    pub localidad: String,
    pub provincia: String,
    pub codigo_postal: String,
    pub especies: String,
    pub coordenadas: String,
    pub id_titular: i32,
}

impl From<entity::explotacion::Model> for ExplotacionDto {
    fn from(model: entity::explotacion::Model) -> Self {
        Self {
            id: model.id,
            codigo: model.codigo,
            nombre: model.nombre,
            direccion: model.direccion,
            localidad: model.localidad,
            provincia: model.provincia,
            codigo_postal: model.codigo_postal,
            especies: model.especies,
            coordenadas: model.coordenadas,
            id_titular: model.id_titular,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateExplotacionDto {
    pub codigo: String,
    pub nombre: String,
    pub direccion: String,
    pub localidad: String,
    pub provincia: String,
    pub codigo_postal: String,
    pub especies: String,
    pub coordenadas: String,
    pub id_titular: i32,
}
