//! Integration tests for configuration and build configuration loading

use serveconf::config::ConfigLoader;
use serveconf::{BuildConfiguration, CliArguments, Mode, Resolver, ServeError};
use tempfile::TempDir;

#[test]
fn test_config_file_drives_port_precedence() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("serveconf.toml");
    std::fs::write(
        &config_file,
        r#"
[resolver]
default_port = 3000
default_mode = "production"

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.logging.level, "warn");

    let build_file = temp_dir.path().join("build.json");
    std::fs::write(&build_file, r#"{"devServer": {"port": 9000}}"#).unwrap();
    let mut build = BuildConfiguration::load(&build_file).unwrap();

    let args = CliArguments::new().with("port", 3000u16);
    let options = Resolver::new(config.resolver)
        .merge(&mut build, &args)
        .into_options();

    assert_eq!(options.port, Some(9000));
    assert_eq!(build.first().unwrap().mode, Some(Mode::Production));
}

#[test]
fn test_workspace_file_is_layered_over_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("serveconf.toml"),
        "[resolver]\ndefault_host = \"dev.local\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.resolver.default_host, "dev.local");
    assert_eq!(config.resolver.default_port, 8080);
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "[resolver]\ndefault_port = 0\n").unwrap();

    match ConfigLoader::load_from_file(&config_file) {
        Err(ServeError::ConfigError(msg)) => assert!(msg.contains("Default port cannot be 0")),
        other => panic!("expected config error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_toml_build_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let build_file = temp_dir.path().join("build.toml");
    std::fs::write(
        &build_file,
        r#"
mode = "none"

[output]
publicPath = "static/"

[devServer]
host = "0.0.0.0"
"#,
    )
    .unwrap();

    let mut build = BuildConfiguration::load(&build_file).unwrap();
    let options = Resolver::default()
        .merge(&mut build, &CliArguments::new())
        .into_options();
    assert_eq!(options.public_path.as_deref(), Some("/static/"));
    assert_eq!(options.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(build.first().unwrap().mode, Some(Mode::None));
}
