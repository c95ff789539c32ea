use std::sync::Arc;

use mockito::{Server, ServerGuard};
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub session: Session,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            db,
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Table creation statements for the full Agromano schema, in FK order.
pub fn agromano_table_statements() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Usuario),
        schema.create_table_from_entity(entity::prelude::Titular),
        schema.create_table_from_entity(entity::prelude::Explotacion),
        schema.create_table_from_entity(entity::prelude::Parcela),
        schema.create_table_from_entity(entity::prelude::Animal),
        schema.create_table_from_entity(entity::prelude::Movimiento),
        schema.create_table_from_entity(entity::prelude::Incidencia),
        schema.create_table_from_entity(entity::prelude::Alimentacion),
        schema.create_table_from_entity(entity::prelude::Medicamento),
        schema.create_table_from_entity(entity::prelude::Vacunacion),
        schema.create_table_from_entity(entity::prelude::VacunacionAnimal),
        schema.create_table_from_entity(entity::prelude::Inspeccion),
    ]
}

/// Composite unique indexes the Postgres migrations create. Entity derives
/// only carry single-column uniques, so sqlite test databases need these
/// added separately to enforce the same constraints.
pub fn agromano_unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx-alimentacion-factura-id_explotacion")
            .table(entity::prelude::Alimentacion)
            .col(entity::alimentacion::Column::Factura)
            .col(entity::alimentacion::Column::IdExplotacion)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-medicamento-factura-id_explotacion")
            .table(entity::prelude::Medicamento)
            .col(entity::medicamento::Column::Factura)
            .col(entity::medicamento::Column::IdExplotacion)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-vacunacion-fecha-tipo-id_explotacion")
            .table(entity::prelude::Vacunacion)
            .col(entity::vacunacion::Column::Fecha)
            .col(entity::vacunacion::Column::Tipo)
            .col(entity::vacunacion::Column::IdExplotacion)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-inspeccion-numero_acta-id_explotacion")
            .table(entity::prelude::Inspeccion)
            .col(entity::inspeccion::Column::NumeroActa)
            .col(entity::inspeccion::Column::IdExplotacion)
            .unique()
            .to_owned(),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates the complete Agromano schema (all tables plus the composite
/// unique indexes the migrations enforce).
#[macro_export]
macro_rules! test_setup_with_agromano_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            setup
                .with_tables($crate::setup::agromano_table_statements())
                .await?;
            setup
                .with_indexes($crate::setup::agromano_unique_indexes())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
