use sea_orm::entity::prelude::*;

/// Vaccination campaign run at a holding. Animals are linked through
/// vacunacion_animal. (fecha, tipo, id_explotacion) is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vacunacion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fecha: Date,
    pub tipo: String,
    pub dosis: String,
    pub nombre_comercial: String,
    pub veterinario: String,
    pub id_explotacion: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::explotacion::Entity",
        from = "Column::IdExplotacion",
        to = "super::explotacion::Column::Id"
    )]
    Explotacion,
    #[sea_orm(has_many = "super::vacunacion_animal::Entity")]
    VacunacionAnimal,
}

impl Related<super::explotacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Explotacion.def()
    }
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        super::vacunacion_animal::Relation::Animal.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vacunacion_animal::Relation::Vacunacion.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
