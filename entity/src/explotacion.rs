use sea_orm::entity::prelude::*;

/// Registered farm holding. `codigo` is the official REGA registration code.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "explotacion")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::titular::Entity",
        from = "Column::IdTitular",
        to = "super::titular::Column::Id"
    )]
    Titular,
    #[sea_orm(has_many = "super::parcela::Entity")]
    Parcela,
    #[sea_orm(has_many = "super::animal::Entity")]
    Animal,
    #[sea_orm(has_many = "super::alimentacion::Entity")]
    Alimentacion,
    #[sea_orm(has_many = "super::medicamento::Entity")]
    Medicamento,
    #[sea_orm(has_many = "super::vacunacion::Entity")]
    Vacunacion,
    #[sea_orm(has_many = "super::inspeccion::Entity")]
    Inspeccion,
}

impl Related<super::titular::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Titular.def()
    }
}

impl Related<super::parcela::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parcela.def()
    }
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl Related<super::alimentacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alimentacion.def()
    }
}

impl Related<super::medicamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medicamento.def()
    }
}

impl Related<super::vacunacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vacunacion.def()
    }
}

impl Related<super::inspeccion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspeccion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
