pub mod ggml;
pub mod model_controller;
