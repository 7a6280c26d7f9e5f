pub mod completions;
pub mod schemas;
