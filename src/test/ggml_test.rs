#[cfg(test)]
pub mod tests {
    use std::fs::File;

    use crate::cores::text_models::ggml::{resolve_model_file, GgmlLoader};
    use crate::cores::text_models::model_controller::{ModelError, ModelLoader};

    #[test]
    fn test_resolve_model_file_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();
        File::create(dir.path().join("groovy.bin")).unwrap();
        File::create(dir.path().join("mpt.gguf")).unwrap();

        // Bare name picks up the .bin artifact
        let resolved = resolve_model_file("groovy", &path).unwrap();
        assert_eq!(resolved, dir.path().join("groovy.bin"));

        // Exact file name is tried first
        let resolved = resolve_model_file("mpt.gguf", &path).unwrap();
        assert_eq!(resolved, dir.path().join("mpt.gguf"));

        let resolved = resolve_model_file("mpt", &path).unwrap();
        assert_eq!(resolved, dir.path().join("mpt.gguf"));
    }

    #[test]
    fn test_resolve_model_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();
        match resolve_model_file("no-such-model", &path) {
            Err(ModelError::NotFound(msg)) => assert!(msg.contains("no-such-model")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn test_load_missing_model_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();
        let loader = GgmlLoader::new("http://127.0.0.1:0/completion");
        let result = loader.load("no-such-model", &path).await;
        assert!(matches!(result, Err(ModelError::NotFound(_))));
    }
}
