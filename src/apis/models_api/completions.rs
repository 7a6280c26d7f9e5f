use actix_web::{get, post, web, Error, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use log::{error, info};
use uuid::Uuid;

use crate::apis::models_api::schemas::{CompletionChoice, CompletionRequest, CompletionResponse, CompletionUsage};
use crate::apis::schemas::ErrorResponse;
use crate::configs::settings::Config;
use crate::cores::text_models::model_controller::{ModelLoader, SamplingParams};
use crate::utils::log::log_request;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
       .service(completions);
}

#[get("/health")]
pub async fn health() -> impl Responder {
    "OK"
}

#[utoipa::path(
    post,
    path = "/completions/",
    request_body = CompletionRequest,
    responses(
        (status = 200, body = CompletionResponse),
        (status = 400, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
        (status = 501, body = ErrorResponse),
    )
)]
// Completes a model response, one blocking generation call per request.
#[post("/completions/")]
pub async fn completions(
    req: HttpRequest,
    req_body: web::Json<CompletionRequest>,
    config: web::Data<Config>,
    loader: web::Data<dyn ModelLoader>,
) -> Result<impl Responder, Error> {
    // 1. Validate that required fields exist in the request data
    if req_body.model.is_empty() || req_body.prompt.is_empty() {
        let error_response = ErrorResponse {
            error: "Invalid request: model or prompt cannot be empty.".into(),
        };
        if let Ok(line) = log_request(&req, 400, Some(&error_response.error)) {
            error!("{}", line);
        }
        return Ok(HttpResponse::BadRequest().json(error_response));
    }

    // 2. Streaming is not implemented, reject before any model work
    if req_body.stream {
        let error_response = ErrorResponse {
            error: "Streaming is not yet implemented.".into(),
        };
        if let Ok(line) = log_request(&req, 501, Some(&error_response.error)) {
            error!("{}", line);
        }
        return Ok(HttpResponse::NotImplemented().json(error_response));
    }

    // 3. Load a fresh handle for the configured model, no reuse across requests
    let model = match loader.load(&config.model, &config.model_path).await {
        Ok(model) => model,
        Err(err) => {
            let error_response = ErrorResponse {
                error: format!("Failed to load model {}: {}", config.model, err),
            };
            if let Ok(line) = log_request(&req, 500, Some(&error_response.error)) {
                error!("{}", line);
            }
            return Ok(HttpResponse::InternalServerError().json(error_response));
        }
    };

    // 4. Run one generation call, only top_p and temperature come from the request
    let params = SamplingParams {
        n_predict: req_body.max_tokens,
        top_k: 20,
        top_p: req_body.top_p,
        temp: req_body.temperature,
        n_batch: 1024,
        repeat_penalty: 1.2,
        repeat_last_n: 10,
        context_erase: 0.0,
    };
    let output = match model.generate(&req_body.prompt, &params).await {
        Ok(output) => output,
        Err(err) => {
            let error_response = ErrorResponse {
                error: format!("Failed to generate completion from {}: {}", config.model, err),
            };
            if let Ok(line) = log_request(&req, 500, Some(&error_response.error)) {
                error!("{}", line);
            }
            return Ok(HttpResponse::InternalServerError().json(error_response));
        }
    };

    // 5. Wrap the generated text into the completion envelope. Token usage is
    // not computed and finish_reason does not distinguish truncation.
    let response = CompletionResponse {
        id: Uuid::new_v4().to_string(),
        object: "text_completion".to_string(),
        created: Utc::now().timestamp(),
        model: req_body.model.clone(),
        choices: vec![CompletionChoice {
            text: output,
            index: 0,
            logprobs: -1.0,
            finish_reason: "stop".to_string(),
        }],
        usage: CompletionUsage {
            prompt_tokens: 0,
            completion_tokens: 0,
            total_tokens: 0,
        },
    };

    if let Ok(line) = log_request(&req, 200, None) {
        info!("{}", line);
    }
    Ok(HttpResponse::Ok().json(response))
}
