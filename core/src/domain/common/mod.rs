pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct RotiRepsConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub code_execution: bool,
    pub structured_output: bool,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            code_execution: true,
            structured_output: false,
        }
    }
}
