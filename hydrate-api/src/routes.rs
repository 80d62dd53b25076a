use std::path::Path;

use actix_files::Files;
use actix_web::{error::InternalError, post, web, HttpResponse, Responder};
use hydrate_model::form::{FormInput, FormState};
use log::{debug, info};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[post("/api/water-intake")]
async fn water_intake(form: web::Json<FormInput>) -> impl Responder {
    match FormState::submit(&form) {
        FormState {
            result: Some(result),
            ..
        } => {
            debug!("Estimated {:?} for {:?}", result, form);
            HttpResponse::Ok().json(result)
        }
        FormState { error, .. } => {
            let error = error.unwrap_or_default();
            info!("Rejected form: {}", error);
            HttpResponse::BadRequest().json(ErrorBody { error })
        }
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        info!("Malformed request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorBody {
            error: err.to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

/// Registers the estimation endpoint and serves `static_dir`, with
/// `index.html` answering `/`.
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.app_data(json_config())
        .service(water_intake)
        .service(Files::new("/", static_dir).index_file("index.html"));
}
