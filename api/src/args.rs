use clap::{ArgAction, Args as ClapArgs, Parser};
use rotireps_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, RotiRepsConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "rotireps-api", version, about = "Roti & Reps meal plan API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/v1`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Exposes Prometheus metrics on `{root_path}/metrics`.
    #[arg(long = "metrics", env = "METRICS_ENABLED", default_value_t = false)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GOOGLE_GEMINI_API", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(
        long,
        env = "GEMINI_CODE_EXECUTION",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub code_execution: bool,

    /// Sends a JSON response schema to Gemini. Has no effect while code execution is enabled.
    #[arg(long, env = "GEMINI_STRUCTURED_OUTPUT", default_value_t = false)]
    pub structured_output: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3333,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            metrics_enabled: false,
        }
    }
}

impl From<LlmArgs> for LLMConfig {
    fn from(args: LlmArgs) -> Self {
        LLMConfig {
            gemini_api_key: args.gemini_api_key,
            gemini_model: args.gemini_model,
            gemini_base_url: args.gemini_base_url,
            code_execution: args.code_execution,
            structured_output: args.structured_output,
        }
    }
}

impl From<Args> for RotiRepsConfig {
    fn from(args: Args) -> Self {
        RotiRepsConfig {
            llm: args.llm.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from([
            "rotireps-api",
            "--gemini-api-key",
            "secret",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(args.llm.gemini_model, DEFAULT_GEMINI_MODEL);
        assert!(args.llm.code_execution);
        assert!(!args.llm.structured_output);

        let config = RotiRepsConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    }

    #[test]
    fn test_code_execution_can_be_disabled() {
        let args = Args::try_parse_from([
            "rotireps-api",
            "--gemini-api-key",
            "secret",
            "--code-execution",
            "false",
            "--structured-output",
        ])
        .unwrap();

        assert!(!args.llm.code_execution);
        assert!(args.llm.structured_output);
    }
}
