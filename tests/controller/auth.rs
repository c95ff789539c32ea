use agromano::{
    model::auth::LoginDto,
    server::{
        controller::auth::{check_auth, login, logout},
        error::Error,
        model::session::usuario::SessionUsuarioId,
    },
};
use agromano_test_utils::prelude::factory;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::setup::test_setup_with_state;

#[tokio::test]
/// Expect 200 and a usuario id in session after a correct login
async fn login_stores_usuario_in_session() -> Result<(), Error> {
    let (test, state) = test_setup_with_state().await.unwrap();
    let usuario = factory::insert_usuario(&test.db, "ana@example.com")
        .await
        .unwrap();

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "ana@example.com".to_string(),
            contrasena: factory::TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_usuario = SessionUsuarioId::get(&test.session).await?;
    assert_eq!(session_usuario, Some(usuario.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 and an untouched session when the password is wrong
async fn login_wrong_password_sets_no_session() -> Result<(), Error> {
    let (test, state) = test_setup_with_state().await.unwrap();
    factory::insert_usuario(&test.db, "ana@example.com")
        .await
        .unwrap();

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "ana@example.com".to_string(),
            contrasena: "equivocada".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let session_usuario = SessionUsuarioId::get(&test.session).await?;
    assert!(session_usuario.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 200 after logout and the session to be cleared
async fn logout_clears_session() -> Result<(), Error> {
    let (test, _state) = test_setup_with_state().await.unwrap();

    SessionUsuarioId::insert(&test.session, 1).await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_usuario = SessionUsuarioId::get(&test.session).await?;
    assert!(session_usuario.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 200 from check-auth with or without a session
async fn check_auth_never_errors() -> Result<(), Error> {
    let (test, state) = test_setup_with_state().await.unwrap();

    let resp = check_auth(State(state.clone()), test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let usuario = factory::insert_usuario(&test.db, "ana@example.com")
        .await
        .unwrap();
    SessionUsuarioId::insert(&test.session, usuario.id).await?;

    let resp = check_auth(State(state), test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
