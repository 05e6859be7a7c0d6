//! Integration tests for registrar-config

use registrar_config::domains::logging::{LogFormat, LogLevel};
use registrar_config::*;
use std::io::Write;
use std::time::Duration;
use temp_env::with_vars;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config_validation() {
    let config = RegistrarConfig::default();
    assert!(config.validate_all().is_ok());
}

#[test]
fn test_config_loader_from_env() {
    let vars = vec![
        ("REGISTRAR_API_ENDPOINT", Some("https://catalog.example.com/gql")),
        ("REGISTRAR_API_TOKEN", Some("token-123")),
        ("REGISTRAR_REPOSITORY", Some("airflow")),
        ("REGISTRAR_HTTP_TIMEOUT", Some("60")),
        ("REGISTRAR_LOG_LEVEL", Some("debug")),
        ("REGISTRAR_LOG_FORMAT", Some("json")),
    ];

    with_vars(vars, || {
        let loader = ConfigLoader::new();
        let config = loader.from_env().unwrap();

        assert_eq!(config.api.endpoint, "https://catalog.example.com/gql");
        assert_eq!(config.api.token.as_deref(), Some("token-123"));
        assert_eq!(config.api.repository.as_deref(), Some("airflow"));
        assert_eq!(config.http.timeout, Duration::from_secs(60));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    });
}

#[test]
fn test_invalid_env_values_are_rejected() {
    with_vars(vec![("REGISTRAR_HTTP_TIMEOUT", Some("soon"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    });

    with_vars(vec![("REGISTRAR_LOG_LEVEL", Some("loud"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    });

    with_vars(vec![("REGISTRAR_API_ENDPOINT", Some("not a url"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(err, ConfigError::DomainError { .. }));
    });
}

#[test]
fn test_yaml_config_serialization() {
    let config = RegistrarConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();

    let parsed: RegistrarConfig = serde_yaml::from_str(&yaml).unwrap();
    assert!(parsed.validate_all().is_ok());
    assert_eq!(parsed, config);
}

#[test]
fn test_comprehensive_config_file() {
    let file = write_config(
        r#"
api:
  endpoint: "https://catalog.example.com/gql"
  token: "file-token"
  repository: "postgres"

http:
  timeout: 45
  max_redirects: 5
  user_agent: "Test Agent"
  verify_ssl: false

logging:
  level: warn
  format: json
"#,
    );

    with_vars(Vec::<(&str, Option<&str>)>::new(), || {
        let config = ConfigLoader::new().from_file(file.path()).unwrap();

        assert_eq!(config.api.endpoint, "https://catalog.example.com/gql");
        assert_eq!(config.api.token.as_deref(), Some("file-token"));
        assert_eq!(config.api.repository.as_deref(), Some("postgres"));
        assert_eq!(config.http.timeout, Duration::from_secs(45));
        assert_eq!(config.http.max_redirects, 5);
        assert_eq!(config.http.user_agent, "Test Agent");
        assert!(!config.http.verify_ssl);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Json);
    });
}

#[test]
fn test_env_overrides_file_values() {
    let file = write_config("api:\n  token: from-file\nhttp:\n  timeout: 10\n");

    with_vars(
        vec![
            ("REGISTRAR_API_TOKEN", Some("from-env")),
            ("REGISTRAR_HTTP_TIMEOUT", Some("20")),
        ],
        || {
            let config = ConfigLoader::new().from_file(file.path()).unwrap();
            assert_eq!(config.api.token.as_deref(), Some("from-env"));
            assert_eq!(config.http.timeout, Duration::from_secs(20));
        },
    );
}

#[test]
fn test_empty_and_unknown_sections() {
    let empty = write_config("");
    let unknown = write_config("server:\n  port: 8080\nlogging:\n  level: trace\n");

    with_vars(Vec::<(&str, Option<&str>)>::new(), || {
        let loader = ConfigLoader::new();
        assert_eq!(loader.from_file(empty.path()).unwrap(), RegistrarConfig::default());

        let config = loader.from_file(unknown.path()).unwrap();
        assert_eq!(config.logging.level, LogLevel::Trace);
    });
}

#[test]
fn test_missing_and_malformed_files() {
    let loader = ConfigLoader::new();

    let err = loader.from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::FileReadError(_)));

    let malformed = write_config("http:\n  timeout: [1, 2\n");
    let err = loader.from_file(malformed.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_load_fallback_chain() {
    let file = write_config("api:\n  repository: from-file\n");

    with_vars(Vec::<(&str, Option<&str>)>::new(), || {
        let loader = ConfigLoader::new();
        let from_file = loader.load(Some(file.path())).unwrap();
        assert_eq!(from_file.api.repository.as_deref(), Some("from-file"));

        let from_env = loader.load(None::<&std::path::Path>).unwrap();
        assert_eq!(from_env.api.repository, None);
    });
}

#[test]
fn test_custom_prefix_loader() {
    let vars = vec![
        ("CUSTOM_HTTP_TIMEOUT", Some("120")),
        ("CUSTOM_REPOSITORY", Some("grafana")),
    ];

    with_vars(vars, || {
        let loader = ConfigLoader::with_prefix("CUSTOM");
        let config = loader.from_env().unwrap();

        assert_eq!(config.http.timeout, Duration::from_secs(120));
        assert_eq!(config.api.repository.as_deref(), Some("grafana"));
    });
}

#[test]
fn test_validation_errors() {
    let mut config = RegistrarConfig::default();
    config.http.timeout = Duration::from_secs(0);
    assert!(config.validate_all().is_err());

    config = RegistrarConfig::default();
    config.api.endpoint = "file:///tmp/socket".to_string();
    assert!(config.validate_all().is_err());
}

#[test]
fn test_generate_sample_config() {
    let sample = RegistrarConfig::generate_sample();
    assert!(sample.contains("api:"));
    assert!(sample.contains("http:"));
    assert!(sample.contains("logging:"));
    assert!(!sample.contains("token"));

    let parsed: RegistrarConfig = serde_yaml::from_str(&sample).unwrap();
    assert!(parsed.validate_all().is_ok());
}
