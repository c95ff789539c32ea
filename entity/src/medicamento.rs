use sea_orm::entity::prelude::*;

/// Medication purchase registered to a holding. (factura, id_explotacion)
/// is unique, mirroring alimentacion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "medicamento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fecha: Date,
    pub receta: String,
    pub medicamento: String,
    pub factura: String,
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
