use serde::Deserialize;
use std::fs::{metadata, File};
use std::io::Read;
use serde_yaml;

// ---------------------------------------------- Config ----------------------------------------------
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model: String,             // Model loaded for every completion request.
    pub model_path: String,        // Directory holding the model artifacts.
    pub runtime_endpoint: String,  // llama.cpp-server-compatible completion URL.
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 4891,
            model: "ggml-gpt4all-j-v1.3-groovy".to_string(),
            model_path: "/root/.inferd/models".to_string(),
            runtime_endpoint: "http://127.0.0.1:8080/completion".to_string(),
        }
    }
}

impl Config {
    pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = if metadata("/etc/inferd/configs.yaml").is_ok() {
            "/etc/inferd/configs.yaml"
        } else {
            "src/configs/configs.yaml"
        };
        let mut file = File::open(config_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
