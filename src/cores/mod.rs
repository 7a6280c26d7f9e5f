pub mod text_models;
