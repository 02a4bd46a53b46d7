//! Integration tests for CLI argument handling
//!
//! Tests the --show and --dump flags and species parsing from command line.

mod support;

use std::process::Command;

use support::{evolution_body, evolution_url, pokemon_body, species_body};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .env_remove("POKEDEX_API_URL")
        .env_remove("POKEDEX_IMAGE_URL")
        .output()
        .expect("Failed to execute pokedex")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"), "Help should mention pokedex");
    assert!(stdout.contains("--dump"), "Help should mention --dump flag");
    assert!(stdout.contains("--show"), "Help should mention --show flag");
}

#[test]
fn test_invalid_species_prints_error_and_exits() {
    let output = run_cli(&["--dump", "bad key!"]);
    assert!(!output.status.success(), "Expected invalid species to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid species"),
        "Should print error message about invalid species: {}",
        stderr
    );
}

#[test]
fn test_show_and_dump_conflict() {
    let output = run_cli(&["--show", "1", "--dump", "1"]);
    assert!(!output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dump_prints_record_json() {
    let server = MockServer::start().await;
    let evo = evolution_url(&server, 1);
    for (route, body) in [
        ("/pokemon-species/1", species_body(1, "bulbasaur", &["bulbasaur"], &evo)),
        ("/pokemon/bulbasaur", pokemon_body("bulbasaur")),
        ("/evolution-chain/1/", evolution_body(&["bulbasaur", "ivysaur"])),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        run_cli(&["--dump", "1", "--api-url", &uri, "--no-cache"])
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["id"], 1);
    assert_eq!(record["name"], "bulbasaur");
    assert_eq!(record["data"][0]["weight"], "6.90 kg");
    assert_eq!(record["evo"]["species"]["name"], "bulbasaur");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dump_missing_species_exits_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        run_cli(&["--dump", "missingno", "--api-url", &uri, "--no-cache"])
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missingno"), "stderr: {}", stderr);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use pokedex::cli::{parse_species_key, Cli, StartupConfig, StartupMode};

    #[test]
    fn test_cli_no_args_browses() {
        let cli = Cli::parse_from(["pokedex"]);
        assert!(cli.show.is_none());
        assert!(cli.dump.is_none());
        assert!(!cli.no_cache);
    }

    #[test]
    fn test_cli_show_flag_with_name() {
        let cli = Cli::parse_from(["pokedex", "--show", "eevee"]);
        assert_eq!(cli.show.as_deref(), Some("eevee"));
    }

    #[test]
    fn test_parse_species_key_invalid_returns_error() {
        assert!(parse_species_key("not a name").is_err());
    }

    #[test]
    fn test_startup_config_default_is_browse() {
        let config = StartupConfig::default();
        assert_eq!(config.mode, StartupMode::Browse);
    }

    #[test]
    fn test_startup_config_from_cli_show() {
        let cli = Cli::parse_from(["pokedex", "--show", "Pikachu"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.mode, StartupMode::Show("pikachu".to_string()));
    }

    #[test]
    fn test_startup_config_from_cli_no_cache() {
        let cli = Cli::parse_from(["pokedex", "--no-cache", "--api-url", "http://localhost:8000/"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(!config.use_cache);
        assert_eq!(config.dex.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_startup_config_from_cli_invalid_species() {
        let cli = Cli::parse_from(["pokedex", "--dump", "???"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
