use clap::Parser;
use contact_page::cli::commands::cmd_submit;
use contact_page::cli::config::{AppConfig, Cli, Commands, load_config};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_submit_defaults() {
    let cli = Cli::parse_from(["contact-page", "submit"]);
    assert_eq!(cli.verbose, 0);
    assert!(cli.endpoint.is_none());
    match cli.command {
        Commands::Submit {
            full_name,
            email,
            phone,
            message,
            transport,
        } => {
            assert_eq!(full_name, "Jane Doe");
            assert_eq!(email, "user@example.com");
            assert_eq!(phone, "555-0100");
            assert_eq!(message, "Hello from the harness");
            assert!(transport.is_none());
        }
        _ => panic!("Expected Submit command"),
    }
}

#[test]
fn cli_parse_submit_overrides() {
    let cli = Cli::parse_from([
        "contact-page",
        "submit",
        "--endpoint",
        "https://example.com/contacts/send",
        "--email",
        "jane@example.com",
        "--transport",
        "mock",
        "-v",
    ]);
    assert_eq!(cli.verbose, 1);
    assert_eq!(
        cli.endpoint.as_deref(),
        Some("https://example.com/contacts/send")
    );
    match cli.command {
        Commands::Submit {
            email, transport, ..
        } => {
            assert_eq!(email, "jane@example.com");
            assert_eq!(transport.as_deref(), Some("mock"));
        }
        _ => panic!("Expected Submit command"),
    }
}

#[test]
fn cli_parse_smoke() {
    let cli = Cli::parse_from(["contact-page", "smoke"]);
    assert!(matches!(cli.command, Commands::Smoke));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn missing_config_file_yields_defaults() {
    let config = load_config(Some("does-not-exist.yaml"));
    assert!(config.endpoint.is_none());
    assert_eq!(config.transport, "http");
}

#[test]
fn config_yaml_parses_with_partial_fields() {
    let config: AppConfig =
        serde_yaml::from_str("endpoint: https://example.com/contacts/send\n").unwrap();
    assert_eq!(
        config.endpoint.as_deref(),
        Some("https://example.com/contacts/send")
    );
    assert_eq!(config.transport, "http", "Transport falls back to default");
}

// ============================================================================
// End-to-end over the mock transport
// ============================================================================

#[test]
fn cmd_submit_confirms_over_mock_transport() {
    let values = [
        ("full_name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("phone", "555-0100"),
        ("message", "Hello"),
    ];
    let confirmed = cmd_submit("mock://contact", &values, "mock", 0).unwrap();
    assert!(confirmed, "Mock transport answers ok, flow confirms");
}

#[test]
fn cmd_submit_rejects_unknown_transport() {
    let result = cmd_submit("mock://contact", &[], "carrier-pigeon", 0);
    assert!(result.is_err());
}
