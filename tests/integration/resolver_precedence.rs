//! Integration tests for merge precedence and normalization

use super::test_utils::{build_config, merge, resolver};
use serde_json::json;
use serveconf::{
    BuildConfiguration, CliArguments, CliValue, ContentBase, Mode, Resolver, ResolverContext,
    StatsValue,
};
use std::path::PathBuf;

#[test]
fn test_port_default_cli_yields_to_config() {
    let args = CliArguments::new().with("port", 8080u16);
    let options = merge(json!({"devServer": {"port": 9000}}), &args).into_options();
    assert_eq!(options.port, Some(9000));
}

#[test]
fn test_port_explicit_cli_wins() {
    let args = CliArguments::new().with("port", 9090u16);
    let options = merge(json!({"devServer": {"port": 9000}}), &args).into_options();
    assert_eq!(options.port, Some(9090));
}

#[test]
fn test_port_default_cli_without_config() {
    let args = CliArguments::new().with("port", 8080u16);
    let options = merge(json!({}), &args).into_options();
    assert_eq!(options.port, Some(8080));
}

#[test]
fn test_port_compares_against_context_default() {
    let args = CliArguments::new().with("port", 8080u16);
    let mut config = build_config(json!({"devServer": {"port": 9000}}));
    let options = Resolver::new(ResolverContext::with_default_port(3000))
        .merge(&mut config, &args)
        .into_options();
    assert_eq!(options.port, Some(8080));
}

#[test]
fn test_content_base_digit_is_port() {
    let args = CliArguments::new().with("contentBase", "5");
    let options = merge(json!({}), &args).into_options();
    assert_eq!(options.content_base, Some(ContentBase::Port(5)));
    assert_eq!(serde_json::to_value(&options).unwrap()["contentBase"], json!(5));
}

#[test]
fn test_content_base_relative_path() {
    let args = CliArguments::new().with("contentBase", "./public");
    let options = merge(json!({}), &args).into_options();
    match options.content_base {
        Some(ContentBase::Path(path)) => {
            assert!(path.is_absolute());
            assert!(path.ends_with("public"));
            assert_eq!(path, PathBuf::from("/work/site/public"));
        }
        other => panic!("expected path, got {:?}", other),
    }
}

#[test]
fn test_content_base_url_unchanged() {
    let args = CliArguments::new().with("contentBase", "http://example.com");
    let options = merge(json!({}), &args).into_options();
    assert_eq!(
        options.content_base,
        Some(ContentBase::Url("http://example.com".to_string()))
    );
}

#[test]
fn test_content_base_list() {
    let args = CliArguments::new().with(
        "contentBase",
        CliValue::List(vec!["a".to_string(), "b".to_string()]),
    );
    let options = merge(json!({}), &args).into_options();
    assert_eq!(
        options.content_base,
        Some(ContentBase::Paths(vec![
            PathBuf::from("/work/site/a"),
            PathBuf::from("/work/site/b"),
        ]))
    );
}

#[test]
fn test_content_base_disabled() {
    let args = CliArguments::new().with("contentBase", false);
    let options = merge(json!({"devServer": {"contentBase": "static"}}), &args).into_options();
    assert_eq!(options.content_base, Some(ContentBase::Disabled));
}

#[test]
fn test_content_base_from_config_untouched_without_cli() {
    let options = merge(json!({"devServer": {"contentBase": "static"}}), &CliArguments::new())
        .into_options();
    assert_eq!(
        options.content_base,
        Some(ContentBase::Path(PathBuf::from("static")))
    );
}

#[test]
fn test_public_path_gets_leading_separator() {
    let options = merge(json!({"output": {"publicPath": "assets"}}), &CliArguments::new())
        .into_options();
    assert_eq!(options.public_path.as_deref(), Some("/assets"));
}

#[test]
fn test_public_path_absolute_url_kept() {
    let options = merge(
        json!({"output": {"publicPath": "https://cdn.example.com/assets/"}}),
        &CliArguments::new(),
    )
    .into_options();
    assert_eq!(
        options.public_path.as_deref(),
        Some("https://cdn.example.com/assets/")
    );
}

#[test]
fn test_public_path_without_output() {
    let options = merge(json!({}), &CliArguments::new()).into_options();
    assert_eq!(options.public_path.as_deref(), Some("/"));
}

#[test]
fn test_public_path_declared_wins() {
    let options = merge(
        json!({"output": {"publicPath": "assets"}, "devServer": {"publicPath": "dev"}}),
        &CliArguments::new(),
    )
    .into_options();
    assert_eq!(options.public_path.as_deref(), Some("dev"));
}

#[test]
fn test_hot_configured_false_wins_over_cli() {
    let args = CliArguments::new().with("hot", true);
    let options = merge(json!({"devServer": {"hot": false}}), &args).into_options();
    assert_eq!(options.hot, Some(false));
}

#[test]
fn test_hot_from_cli_when_undeclared() {
    let args = CliArguments::new().with("hot", true);
    let options = merge(json!({}), &args).into_options();
    assert_eq!(options.hot, Some(true));
}

#[test]
fn test_client_log_level_precedence() {
    let args = CliArguments::new().with("clientLogLevel", "warning");
    let options = merge(json!({"devServer": {"clientLogLevel": "none"}}), &args).into_options();
    assert_eq!(options.client_log_level.as_deref(), Some("warning"));

    let options = merge(json!({}), &args).into_options();
    assert_eq!(options.client_log_level.as_deref(), Some("warning"));
}

#[test]
fn test_declared_quiet_follows_cli() {
    let args = CliArguments::new().with("quiet", false).with("info", true);
    let options = merge(json!({"devServer": {"quiet": true}}), &args).into_options();
    assert_eq!(options.quiet, Some(false));
    assert_eq!(options.no_info, None);
}

#[test]
fn test_empty_list_gains_default_target() {
    let mut build = BuildConfiguration::Multi(Vec::new());
    let resolution = resolver().merge(&mut build, &CliArguments::new());
    assert_eq!(build.targets().len(), 1);
    assert_eq!(build.targets()[0].mode, Some(Mode::Development));
    assert_eq!(resolution.options.public_path.as_deref(), Some("/"));
}

#[test]
fn test_color_stats_record() {
    let args = CliArguments::new().with("color", true);
    let options = merge(json!({}), &args).into_options();
    assert_eq!(
        serde_json::to_value(&options.stats).unwrap(),
        json!({"cached": false, "cachedAssets": false, "colors": true})
    );
}

#[test]
fn test_stats_default_without_color() {
    let options = merge(json!({"stats": "errors-only"}), &CliArguments::new()).into_options();
    match options.stats {
        Some(StatsValue::Record(record)) => {
            assert!(!record.cached);
            assert!(!record.cached_assets);
            assert_eq!(record.rest.get("preset"), Some(&json!("errors-only")));
        }
        other => panic!("expected record, got {:?}", other),
    }
}

#[test]
fn test_unrecognized_arguments_are_dropped() {
    let args = CliArguments::new()
        .with("bonjour", true)
        .with("lazy", true)
        .with("socket", "/tmp/dev.sock");
    let options = merge(json!({"devServer": {"lazy": false}}), &args).into_options();

    let wire = serde_json::to_value(&options).unwrap();
    assert!(wire.get("bonjour").is_none());
    assert!(wire.get("socket").is_none());
    assert_eq!(wire["lazy"], json!(true));
}

#[test]
fn test_filename_and_watch_options_from_build() {
    let options = merge(
        json!({
            "output": {"filename": "bundle.js"},
            "watchOptions": {"aggregateTimeout": 300},
            "devServer": {"watchOptions": {"poll": true}}
        }),
        &CliArguments::new(),
    )
    .into_options();
    assert_eq!(options.filename.as_deref(), Some("bundle.js"));
    assert_eq!(options.watch_options, Some(json!({"poll": true})));
}

#[test]
fn test_open_page_defaults_when_opening() {
    let options = merge(json!({"devServer": {"open": true}}), &CliArguments::new()).into_options();
    assert_eq!(options.open_page.as_deref(), Some(""));

    let options = merge(json!({"devServer": {"open": false}}), &CliArguments::new()).into_options();
    assert_eq!(options.open_page, None);
}

#[test]
fn test_attach_makes_options_visible_through_build() {
    let mut config = build_config(json!({"devServer": {"compress": true}}));
    let resolution = resolver().merge(&mut config, &CliArguments::new().with("port", 8080u16));
    resolution.attach_to(&mut config);

    let attached = config.first().unwrap().dev_server.clone().unwrap();
    assert_eq!(attached, resolution.options);
    assert_eq!(attached.port, Some(8080));
    assert_eq!(attached.extra.get("compress"), Some(&json!(true)));
}
