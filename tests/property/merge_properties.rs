//! Property-based tests for idempotence, fallback and precedence guarantees

use proptest::prelude::*;
use serde_json::json;
use serveconf::resolver::resolve_port;
use serveconf::{BuildConfiguration, CliArguments, CliValue, Resolver, ResolverContext};

fn resolver() -> Resolver {
    Resolver::new(ResolverContext::with_default_port(8080)).with_base_dir("/work/site")
}

fn cli_value() -> impl Strategy<Value = CliValue> {
    prop_oneof![
        any::<bool>().prop_map(CliValue::Bool),
        (0i64..70_000).prop_map(CliValue::Int),
        "[a-z0-9./:,]{0,12}".prop_map(CliValue::Text),
        prop::collection::vec("[a-z]{1,6}", 0..3).prop_map(CliValue::List),
    ]
}

fn arg_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("host".to_string()),
        Just("allowedHosts".to_string()),
        Just("open".to_string()),
        Just("openPage".to_string()),
        Just("color".to_string()),
        Just("contentBase".to_string()),
        Just("port".to_string()),
        Just("hot".to_string()),
        Just("hotOnly".to_string()),
        Just("info".to_string()),
        Just("quiet".to_string()),
        Just("compress".to_string()),
        "[a-z]{3,8}",
    ]
}

fn cli_arguments() -> impl Strategy<Value = CliArguments> {
    prop::collection::vec((arg_name(), cli_value()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn build_json() -> impl Strategy<Value = serde_json::Value> {
    (
        prop::option::of(1u16..=u16::MAX),
        prop::option::of(any::<bool>()),
        prop::option::of("[a-z/]{0,8}"),
        any::<bool>(),
    )
        .prop_map(|(port, hot, public_path, compress)| {
            let mut dev_server = serde_json::Map::new();
            if let Some(port) = port {
                dev_server.insert("port".to_string(), json!(port));
            }
            if let Some(hot) = hot {
                dev_server.insert("hot".to_string(), json!(hot));
            }
            if compress {
                dev_server.insert("compress".to_string(), json!(false));
            }
            let mut build = json!({ "devServer": dev_server });
            if let Some(public_path) = public_path {
                build["output"] = json!({ "publicPath": public_path });
            }
            build
        })
}

proptest! {
    #[test]
    fn merge_is_idempotent(build in build_json(), args in cli_arguments()) {
        let mut first: BuildConfiguration = serde_json::from_value(build.clone()).unwrap();
        let mut second: BuildConfiguration = serde_json::from_value(build).unwrap();

        let a = resolver().merge(&mut first, &args);
        let b = resolver().merge(&mut second, &args);

        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn undeclared_unknown_arguments_never_appear(
        name in "[a-z]{3,8}",
        value in cli_value(),
    ) {
        prop_assume!(serveconf::ArgKey::from_name(&name) == serveconf::ArgKey::Passthrough);
        prop_assume!(!["filename", "stats"].contains(&name.as_str()));

        let mut build: BuildConfiguration = serde_json::from_value(json!({})).unwrap();
        let args = CliArguments::new().with(name.clone(), value);
        let options = resolver().merge(&mut build, &args).into_options();

        let wire = serde_json::to_value(&options).unwrap();
        prop_assert!(wire.get(&name).is_none());
    }

    #[test]
    fn configured_hot_always_wins(configured in any::<bool>(), cli in any::<bool>()) {
        let mut build: BuildConfiguration =
            serde_json::from_value(json!({"devServer": {"hot": configured}})).unwrap();
        let args = CliArguments::new().with("hot", cli);
        let options = resolver().merge(&mut build, &args).into_options();
        prop_assert_eq!(options.hot, Some(configured));
    }

    #[test]
    fn port_precedence(arg in prop::option::of(1u16..=u16::MAX), opt in prop::option::of(1u16..=u16::MAX), default in 1u16..=u16::MAX) {
        let resolved = resolve_port(arg, opt, default);
        if arg == Some(default) {
            prop_assert_eq!(resolved, opt.or(arg));
        } else if arg.is_some() {
            prop_assert_eq!(resolved, arg);
        } else {
            prop_assert_eq!(resolved, opt);
        }
    }

    #[test]
    fn stats_always_carries_cache_flags(args in cli_arguments()) {
        let mut build: BuildConfiguration = serde_json::from_value(json!({})).unwrap();
        let options = resolver().merge(&mut build, &args).into_options();
        let stats = serde_json::to_value(&options.stats).unwrap();
        if !stats.is_boolean() {
            prop_assert!(stats["cached"].is_boolean());
            prop_assert!(stats["cachedAssets"].is_boolean());
        }
    }
}
