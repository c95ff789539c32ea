use sea_orm::entity::prelude::*;

/// Issue recorded against an animal. For reidentification events the
/// previous and current codes are both kept.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "incidencia")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fecha: Date,
    pub descripcion: String,
    pub codigo_anterior: Option<String>,
    pub codigo_actual: Option<String>,
    pub id_animal: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::animal::Entity",
        from = "Column::IdAnimal",
        to = "super::animal::Column::Id"
    )]
    Animal,
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
