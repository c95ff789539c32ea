use sea_orm::entity::prelude::*;

/// Join table linking a vaccination campaign to the animals it covered.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vacunacion_animal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_vacunacion: i32,
    pub id_animal: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vacunacion::Entity",
        from = "Column::IdVacunacion",
        to = "super::vacunacion::Column::Id"
    )]
    Vacunacion,
    #[sea_orm(
        belongs_to = "super::animal::Entity",
        from = "Column::IdAnimal",
        to = "super::animal::Column::Id"
    )]
    Animal,
}

impl Related<super::vacunacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vacunacion.def()
    }
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
