use anyhow::Result;
use httpmock::prelude::*;
use vibesort::config::file::load_credential_file;
use vibesort::utils::error::credential_guidance;
use vibesort::{EnvConfig, OpenAiSorter, SortEngine, SortError};

#[tokio::test]
async fn test_missing_credential_fails_without_touching_the_network() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/responses");
        then.status(200).json_body(serde_json::json!({ "output": [] }));
    });

    let config = EnvConfig {
        api_key: None,
        model: "gpt-4o-2024-08-06".to_string(),
        base_url: server.base_url(),
        request_timeout_secs: 5,
    };

    let engine = SortEngine::new(OpenAiSorter::new(config));
    let err = engine.sort(&[6.0, 2.0, 9.0]).await.unwrap_err();

    assert!(matches!(err, SortError::MissingCredential));
    assert_eq!(api_mock.hits(), 0);
    Ok(())
}

#[test]
fn test_guidance_names_both_setup_methods() {
    let guidance = credential_guidance();
    assert!(guidance.contains("export OPENAI_API_KEY"));
    assert!(guidance.contains("vibesort.toml"));
    assert!(guidance.contains("api_key"));
    assert!(guidance.contains("https://platform.openai.com/api-keys"));
}

#[test]
fn test_credential_file_round_trip() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("vibesort.toml");
    std::fs::write(&path, "api_key = \"sk-from-file\"\n")?;

    let key = load_credential_file(path.to_str().unwrap())?;
    assert_eq!(key.as_deref(), Some("sk-from-file"));
    Ok(())
}
