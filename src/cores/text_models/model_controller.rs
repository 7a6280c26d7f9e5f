use async_trait::async_trait;

// Sampling knobs handed to a model for one generation call. `top_p` and
// `temp` come from the request, the rest are fixed server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingParams {
    pub n_predict: u32,        // Max tokens to generate.
    pub top_k: u32,
    pub top_p: f32,
    pub temp: f32,
    pub n_batch: u32,
    pub repeat_penalty: f32,
    pub repeat_last_n: u32,    // Lookback window for the repeat penalty.
    pub context_erase: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Model artifact could not be resolved under the configured path
    #[error("Model not found: {0}")]
    NotFound(String),
    /// Disk I/O failure while loading the model
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Inference runtime request failed
    #[error("Runtime error: {0}")]
    Runtime(String),
    /// Inference runtime replied with an undecodable body
    #[error("Invalid runtime response: {0}")]
    InvalidResponse(String),
}

// A loaded model, able to run one generation call at a time.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String, ModelError>;
}

// Loads a model handle from the configured storage path. A fresh handle is
// built per request, there is no pooling or reuse.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load(&self, model_name: &str, model_path: &str) -> Result<Box<dyn TextModel>, ModelError>;
}
