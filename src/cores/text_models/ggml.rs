use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::cores::text_models::model_controller::{ModelError, ModelLoader, SamplingParams, TextModel};

// Loads ggml model artifacts from the configured storage path and runs
// generation against a llama.cpp-server-compatible inference runtime.
pub struct GgmlLoader {
    runtime_endpoint: String,
}

impl GgmlLoader {
    pub fn new(runtime_endpoint: &str) -> Self {
        GgmlLoader {
            runtime_endpoint: runtime_endpoint.to_string(),
        }
    }
}

// Resolve a model name to an artifact file, trying the bare name first and
// then the usual ggml file suffixes.
pub fn resolve_model_file(model_name: &str, model_path: &str) -> Result<PathBuf, ModelError> {
    let base = Path::new(model_path);
    let candidates = [
        model_name.to_string(),
        format!("{}.bin", model_name),
        format!("{}.gguf", model_name),
    ];
    for candidate in &candidates {
        let file = base.join(candidate);
        if file.is_file() {
            return Ok(file);
        }
    }
    Err(ModelError::NotFound(format!("{} under {}", model_name, model_path)))
}

#[async_trait]
impl ModelLoader for GgmlLoader {
    async fn load(&self, model_name: &str, model_path: &str) -> Result<Box<dyn TextModel>, ModelError> {
        let model_file = resolve_model_file(model_name, model_path)?;
        Ok(Box::new(GgmlModel {
            model_file,
            endpoint: self.runtime_endpoint.clone(),
            client: Client::new(),
        }))
    }
}

pub struct GgmlModel {
    model_file: PathBuf,
    endpoint: String,
    client: Client,
}

#[async_trait]
impl TextModel for GgmlModel {
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String, ModelError> {
        // 1. Build the request body for the inference runtime
        let request_body = json!({
            "model": self.model_file.display().to_string(),
            "prompt": prompt,
            "n_predict": params.n_predict,
            "top_k": params.top_k,
            "top_p": params.top_p,
            "temperature": params.temp,
            "n_batch": params.n_batch,
            "repeat_penalty": params.repeat_penalty,
            "repeat_last_n": params.repeat_last_n,
            "context_erase": params.context_erase,
            "stream": false,
        });

        // 2. Use reqwest to initiate a POST request
        let response = match self.client.post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await {
                Ok(resp) => resp,
                Err(err) => return Err(ModelError::Runtime(format!("Request failed: {}", err))),
            };

        // 3. Pull the generated text out of the runtime reply
        let json_value: Value = response.json().await
            .map_err(|err| ModelError::InvalidResponse(format!("Failed to parse response as JSON: {}", err)))?;

        match json_value.get("content").and_then(|content| content.as_str()) {
            Some(text) => Ok(text.to_string()),
            None => Err(ModelError::InvalidResponse(format!("missing `content` field in {}", json_value))),
        }
    }
}
