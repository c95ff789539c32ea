use sea_orm::entity::prelude::*;

/// Land parcel belonging to a holding. `extension` is in hectares.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parcela")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub coordenadas: String,
    pub extension: f64,
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
}

impl Related<super::explotacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Explotacion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
