pub mod types;

pub use types::{Content, FileData, GenerateContentRequest, GenerationConfig, Part, Role};
