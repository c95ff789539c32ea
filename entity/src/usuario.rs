use sea_orm::entity::prelude::*;

/// Account that owns one or more titulares. The email is the login
/// identifier; only the bcrypt hash of the password is stored.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre_usuario: String,
    pub nombre_empresa: String,
    #[sea_orm(unique)]
    pub email: String,
    pub contrasena_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::titular::Entity")]
    Titular,
}

impl Related<super::titular::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Titular.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
