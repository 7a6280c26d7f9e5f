pub mod ggml_test;
