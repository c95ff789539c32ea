use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TitularDto {
    pub id: i32,
    pub nombre: String,
    pub nif: String,
    pub domicilio: String,
    pub localidad: String,
    pub provincia: String,
    pub codigo_postal: String,
    pub telefono: String,
    pub id_usuario: i32,
}

impl From<entity::titular::Model> for TitularDto {
    fn from(model: entity::titular::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            nif: model.nif,
            domicilio: model.domicilio,
            localidad: model.localidad,
            provincia: model.provincia,
            codigo_postal: model.codigo_postal,
            telefono: model.telefono,
            id_usuario: model.id_usuario,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTitularDto {
    pub nombre: String,
    pub nif: String,
    pub domicilio: String,
    pub localidad: String,
    pub provincia: String,
    pub codigo_postal: String,
    pub telefono: String,
    pub id_usuario: i32,
}
