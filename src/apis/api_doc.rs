use utoipa::OpenApi;

use crate::apis::models_api;
use crate::apis::models_api::schemas::{CompletionRequest, CompletionResponse, CompletionChoice, CompletionUsage};
use crate::apis::schemas::ErrorResponse;


#[derive(OpenApi)]
#[openapi(
    paths(
        models_api::completions::completions,
    ),
    components(
        schemas(CompletionRequest, CompletionResponse, CompletionChoice, CompletionUsage, ErrorResponse)
    )
)]

pub struct ApiDoc;
