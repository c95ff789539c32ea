use agromano::{
    model::informe::InformeRangoDto,
    server::{
        controller::titular::{delete_titular, generar_informe, get_titular_datos},
        data::explotacion::ExplotacionRepository,
        error::Error,
    },
};
use agromano_test_utils::prelude::factory;
use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::setup::test_setup_with_state;

#[tokio::test]
/// Expect 204 on delete while the titular's explotaciones stay in place
async fn delete_titular_leaves_explotaciones() -> Result<(), Error> {
    let (test, state) = test_setup_with_state().await.unwrap();
    let usuario = factory::insert_usuario(&test.db, "dueno@example.com")
        .await
        .unwrap();
    let titular = factory::insert_titular(&test.db, "11111111A", usuario.id)
        .await
        .unwrap();
    factory::insert_explotacion(&test.db, "ES-A", titular.id)
        .await
        .unwrap();

    let result = delete_titular(State(state), Path(titular.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // The child row survives, orphaned
    let explotacion_repository = ExplotacionRepository::new(&test.db);
    let explotaciones = explotacion_repository.get_by_titular_id(titular.id).await?;
    assert_eq!(explotaciones.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 200 with a null body for a titular that does not exist
async fn titular_datos_missing_titular_returns_null() -> Result<(), Error> {
    let (_test, state) = test_setup_with_state().await.unwrap();

    let resp = get_titular_datos(State(state), Path(999))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(value.is_null());

    Ok(())
}

#[tokio::test]
/// Expect a PDF download with the attachment headers
async fn informe_returns_pdf_download() -> Result<(), Error> {
    let (test, state) = test_setup_with_state().await.unwrap();
    let usuario = factory::insert_usuario(&test.db, "dueno@example.com")
        .await
        .unwrap();
    let titular = factory::insert_titular(&test.db, "11111111A", usuario.id)
        .await
        .unwrap();
    factory::insert_explotacion(&test.db, "ES-A", titular.id)
        .await
        .unwrap();

    let resp = generar_informe(
        State(state),
        Path(titular.id),
        Json(InformeRangoDto {
            start_date: factory::fecha(2024, 1, 1),
            end_date: factory::fecha(2024, 12, 31),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        &format!("attachment; filename=Informe_{}.pdf", titular.id)
    );

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.starts_with(b"%PDF"));

    Ok(())
}
