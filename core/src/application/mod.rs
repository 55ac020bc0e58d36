use crate::{
    domain::common::{RotiRepsConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type RotiRepsService = Service<GeminiLLMClient>;

pub fn create_service(config: RotiRepsConfig) -> RotiRepsService {
    let llm_client = GeminiLLMClient::from(&config.llm);

    tracing::debug!(
        model = %config.llm.gemini_model,
        code_execution = config.llm.code_execution,
        structured_output = config.llm.structured_output,
        "meal plan service configured"
    );

    Service::new(
        llm_client,
        config.llm.code_execution,
        config.llm.structured_output,
    )
}
