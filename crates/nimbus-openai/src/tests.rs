//! Snapshot tests for the OpenAI client configuration

#[cfg(test)]
mod snapshot_tests {
    use crate::OpenAiConfig;
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = OpenAiConfig {
            api_key: "test_api_key_redacted".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_api_key_redacted
        base_url: "https://api.openai.com/v1"
        "###);
    }

    #[test]
    fn test_explicit_config_uses_default_endpoint() {
        let config = OpenAiConfig::new("test_key".to_string());
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }
}
