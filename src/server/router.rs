//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa
//! specification; the collected OpenAPI document is served through Swagger
//! UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// Each entity follows the same surface: list/create on the collection
/// route, get/update/delete on the id route. On top of that sit the auth
/// endpoints, the titular exports (JSON and PDF), and the chatbot proxy.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be wired with state, the session
/// layer, and the CORS layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Agromano", description = "Agromano API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::titular::TITULAR_TAG, description = "Titular API routes and exports"),
        (name = controller::chatbot::CHATBOT_TAG, description = "Chatbot proxy"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::check_auth))
        .routes(routes!(
            controller::usuario::get_usuarios,
            controller::usuario::create_usuario
        ))
        .routes(routes!(
            controller::usuario::get_usuario,
            controller::usuario::update_usuario,
            controller::usuario::delete_usuario
        ))
        .routes(routes!(
            controller::titular::get_titulares,
            controller::titular::create_titular
        ))
        .routes(routes!(
            controller::titular::get_titular,
            controller::titular::update_titular,
            controller::titular::delete_titular
        ))
        .routes(routes!(controller::titular::get_titular_usuario))
        .routes(routes!(controller::titular::get_titular_datos))
        .routes(routes!(controller::titular::generar_informe))
        .routes(routes!(
            controller::explotacion::get_explotaciones,
            controller::explotacion::create_explotacion
        ))
        .routes(routes!(
            controller::explotacion::get_explotacion,
            controller::explotacion::update_explotacion,
            controller::explotacion::delete_explotacion
        ))
        .routes(routes!(
            controller::parcela::get_parcelas,
            controller::parcela::create_parcela
        ))
        .routes(routes!(
            controller::parcela::get_parcela,
            controller::parcela::update_parcela,
            controller::parcela::delete_parcela
        ))
        .routes(routes!(
            controller::animal::get_animales,
            controller::animal::create_animal
        ))
        .routes(routes!(
            controller::animal::get_animal,
            controller::animal::update_animal,
            controller::animal::delete_animal
        ))
        .routes(routes!(
            controller::movimiento::get_movimientos,
            controller::movimiento::create_movimiento
        ))
        .routes(routes!(
            controller::movimiento::get_movimiento,
            controller::movimiento::update_movimiento,
            controller::movimiento::delete_movimiento
        ))
        .routes(routes!(
            controller::incidencia::get_incidencias,
            controller::incidencia::create_incidencia
        ))
        .routes(routes!(
            controller::incidencia::get_incidencia,
            controller::incidencia::update_incidencia,
            controller::incidencia::delete_incidencia
        ))
        .routes(routes!(
            controller::alimentacion::get_alimentaciones,
            controller::alimentacion::create_alimentacion
        ))
        .routes(routes!(
            controller::alimentacion::get_alimentacion,
            controller::alimentacion::update_alimentacion,
            controller::alimentacion::delete_alimentacion
        ))
        .routes(routes!(
            controller::medicamento::get_medicamentos,
            controller::medicamento::create_medicamento
        ))
        .routes(routes!(
            controller::medicamento::get_medicamento,
            controller::medicamento::update_medicamento,
            controller::medicamento::delete_medicamento
        ))
        .routes(routes!(
            controller::vacunacion::get_vacunaciones,
            controller::vacunacion::create_vacunacion
        ))
        .routes(routes!(
            controller::vacunacion::get_vacunacion,
            controller::vacunacion::update_vacunacion,
            controller::vacunacion::delete_vacunacion
        ))
        .routes(routes!(
            controller::vacunacion_animal::get_vacunaciones_animal,
            controller::vacunacion_animal::create_vacunacion_animal
        ))
        .routes(routes!(
            controller::vacunacion_animal::get_vacunacion_animal,
            controller::vacunacion_animal::update_vacunacion_animal,
            controller::vacunacion_animal::delete_vacunacion_animal
        ))
        .routes(routes!(
            controller::inspeccion::get_inspecciones,
            controller::inspeccion::create_inspeccion
        ))
        .routes(routes!(
            controller::inspeccion::get_inspeccion,
            controller::inspeccion::update_inspeccion,
            controller::inspeccion::delete_inspeccion
        ))
        .routes(routes!(controller::chatbot::chatbot))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
