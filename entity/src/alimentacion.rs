use sea_orm::entity::prelude::*;

/// Feed purchase registered to a holding. (factura, id_explotacion) is
/// unique: the same invoice may appear under different holdings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alimentacion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fecha: Date,
    pub tipo: String,
    pub cantidad: f64,
    pub lote: String,
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
