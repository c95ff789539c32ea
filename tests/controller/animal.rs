use agromano::{
    model::animal::CreateAnimalDto,
    server::{controller::animal::create_animal, data::animal::AnimalRepository, error::Error},
};
use agromano_test_utils::prelude::factory;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::DatabaseConnection;

use crate::setup::test_setup_with_state;

async fn seed_explotacion(db: &DatabaseConnection) -> i32 {
    let usuario = factory::insert_usuario(db, "dueno@example.com").await.unwrap();
    let titular = factory::insert_titular(db, "11111111A", usuario.id)
        .await
        .unwrap();
    let explotacion = factory::insert_explotacion(db, "ES-A", titular.id)
        .await
        .unwrap();

    explotacion.id
}

fn dto(identificacion: &str, id_explotacion: i32) -> CreateAnimalDto {
    CreateAnimalDto {
        identificacion: identificacion.to_string(),
        especie: "Bovino".to_string(),
        estado: "vivo".to_string(),
        fecha_nacimiento: factory::fecha(2023, 3, 15),
        fecha_alta: factory::fecha(2023, 4, 1),
        id_explotacion,
    }
}

#[tokio::test]
/// Expect 201 for a fresh identification
async fn create_animal_returns_created() -> Result<(), Error> {
    let (test, state) = test_setup_with_state().await.unwrap();
    let explotacion_id = seed_explotacion(&test.db).await;

    let result = create_animal(State(state), Json(dto("ES0001", explotacion_id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 and no second row when the identification is already used
async fn create_animal_duplicate_identificacion_is_rejected() -> Result<(), Error> {
    let (test, state) = test_setup_with_state().await.unwrap();
    let explotacion_id = seed_explotacion(&test.db).await;

    factory::insert_animal(&test.db, "ES0001", explotacion_id)
        .await
        .unwrap();

    let result = create_animal(State(state), Json(dto("ES0001", explotacion_id))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // No new row was created
    let animal_repository = AnimalRepository::new(&test.db);
    let animales = animal_repository.get_all().await?;
    assert_eq!(animales.len(), 1);

    Ok(())
}
