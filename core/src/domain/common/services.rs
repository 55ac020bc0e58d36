use crate::domain::meal_plan::ports::LLMClient;

/// Application service. Holds the outbound ports the domain services need.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) code_execution: bool,
    pub(crate) structured_output: bool,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, code_execution: bool, structured_output: bool) -> Self {
        Self {
            llm_client,
            code_execution,
            structured_output,
        }
    }
}
