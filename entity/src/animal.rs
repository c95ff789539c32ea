use sea_orm::entity::prelude::*;

/// Animal registered to a holding. `identificacion` is unique across the
/// whole system, not just within the owning explotación.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "animal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub identificacion: String,
    pub especie: String,
    pub estado: String,
    pub fecha_nacimiento: Date,
    pub fecha_alta: Date,
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
    #[sea_orm(has_many = "super::movimiento::Entity")]
    Movimiento,
    #[sea_orm(has_many = "super::incidencia::Entity")]
    Incidencia,
    #[sea_orm(has_many = "super::vacunacion_animal::Entity")]
    VacunacionAnimal,
}

impl Related<super::explotacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Explotacion.def()
    }
}

impl Related<super::movimiento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movimiento.def()
    }
}

impl Related<super::incidencia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Incidencia.def()
    }
}

impl Related<super::vacunacion::Entity> for Entity {
    fn to() -> RelationDef {
        super::vacunacion_animal::Relation::Vacunacion.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vacunacion_animal::Relation::Animal.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
