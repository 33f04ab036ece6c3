use actix_web::{web, HttpRequest};

use crate::error::AppError;

pub mod matches;
pub mod players;

/// Body and path extraction failures answer with the same `{"message"}`
/// shape as every other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| AppError::NotFound(format!("Invalid id: {err}")).into());
    cfg.service(
        web::scope("/matches")
            .app_data(json_config)
            .app_data(path_config)
            .configure(players::configure_routes)
            .configure(matches::configure_routes),
    );
}

/// Optional `If-Match: <revision>` precondition. Quotes are accepted so ETag
/// style values work too.
pub(crate) fn expected_revision(req: &HttpRequest) -> Result<Option<u64>, AppError> {
    let Some(value) = req.headers().get("If-Match") else {
        return Ok(None);
    };
    let raw = value
        .to_str()
        .map_err(|_| AppError::BadRequest("If-Match must be text".to_string()))?;
    let trimmed = raw.trim().trim_matches('"');
    if trimmed == "*" {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("If-Match must be a revision number, got {raw:?}")))
}
