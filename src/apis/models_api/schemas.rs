use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


// Define the request struct, corresponding to the request parameters of the /completions/ interface.
// Follows https://github.com/openai/openai-openapi/blob/master/openapi.yaml
#[derive(Deserialize, Serialize, ToSchema)]
pub struct CompletionRequest {
    pub model: String,                    // (Required) The model to generate a completion from.
    pub prompt: String,                   // (Required) The prompt to begin completing from.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,                  // Max tokens to generate.
    #[serde(default)]
    pub temperature: f32,                 // Model temperature.
    #[serde(default = "default_top_p")]
    pub top_p: f32,                       // Nucleus sampling cutoff.
    #[allow(dead_code)]
    #[serde(default = "default_n")]
    pub n: u32,                           // Number of completions, accepted but not honored.
    #[serde(default)]
    pub stream: bool,                     // Streaming is not implemented, `true` is rejected.
}

fn default_max_tokens() -> u32 {
    7
}

fn default_top_p() -> f32 {
    1.0
}

fn default_n() -> u32 {
    1
}

// Define the response struct, corresponding to the response data format of the /completions/ interface.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompletionResponse {
    pub id: String,                       // Unique identifier for each generated response.
    pub object: String,                   // Type of response object, always `"text_completion"`.
    pub created: i64,                     // Unix timestamp of when the response was generated.
    pub model: String,                    // Echo of the requested model name.
    pub choices: Vec<CompletionChoice>,   // List of generated text options returned.
    pub usage: CompletionUsage,
}

// Completion choice struct, which is part of the CompletionResponse.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompletionChoice {
    pub text: String,
    pub index: u32,
    pub logprobs: f32,                    // Not computed, always -1.0.
    pub finish_reason: String,
}

// Token accounting is not implemented, all counters stay at zero.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
