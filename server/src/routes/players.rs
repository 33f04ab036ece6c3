use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use types::NewPlayer;
use uuid::Uuid;

use super::expected_revision;
use crate::error::AppError;
use crate::state::AppState;

async fn list_players(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let players = state.store.list_players(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(players))
}

async fn create_player(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<NewPlayer>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    let player = state
        .store
        .create_player(match_id, body.into_inner())
        .await?;
    tracing::info!(%match_id, player_id = %player.id, "POST /matches/{{id}}/players");
    Ok(HttpResponse::Created().json(player))
}

async fn patch_player(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let (match_id, player_id) = path.into_inner();
    let expected = expected_revision(&req)?;
    let player = state
        .store
        .patch_player(match_id, player_id, body.into_inner(), expected)
        .await?;
    Ok(HttpResponse::Ok().json(player))
}

async fn delete_player(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (match_id, player_id) = path.into_inner();
    state.store.delete_player(match_id, player_id).await?;
    tracing::info!(%match_id, %player_id, "DELETE player");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{match_id}/players")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player)),
    );
    cfg.service(
        web::resource("/{match_id}/players/{player_id}")
            .route(web::patch().to(patch_player))
            .route(web::delete().to(delete_player)),
    );
}
