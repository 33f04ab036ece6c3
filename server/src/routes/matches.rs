use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use types::NewMatch;
use uuid::Uuid;

use super::expected_revision;
use crate::error::AppError;
use crate::state::AppState;

async fn list_matches(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let matches = state.store.list_matches().await?;
    Ok(HttpResponse::Ok().json(matches))
}

async fn get_match(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let game = state.store.get_match(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(game))
}

async fn create_match(
    state: web::Data<AppState>,
    body: web::Json<NewMatch>,
) -> Result<HttpResponse, AppError> {
    let game = state.store.create_match(body.into_inner()).await?;
    tracing::info!(match_id = %game.id, "POST /matches");
    Ok(HttpResponse::Created().json(game))
}

async fn patch_match(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let expected = expected_revision(&req)?;
    let game = state
        .store
        .patch_match(id, body.into_inner(), expected)
        .await?;
    tracing::info!(match_id = %id, revision = game.revision, "PATCH /matches/{{id}}");
    Ok(HttpResponse::Ok().json(game))
}

async fn delete_match(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    state.store.delete_match(id).await?;
    tracing::info!(match_id = %id, "DELETE /matches/{{id}}");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_matches))
            .route(web::post().to(create_match)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_match))
            .route(web::patch().to(patch_match))
            .route(web::delete().to(delete_match)),
    );
}
