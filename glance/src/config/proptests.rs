//! Property-based tests for the configuration system.

use super::loader::ConfigLoader;
use super::schema::Config;
use super::tree::{OptionKind, OptionValue, LEAF_PATHS};
use proptest::prelude::*;

// A value for whatever kind of leaf sits at `path`
fn value_for(path: &'static str) -> BoxedStrategy<OptionValue> {
    match Config::default().kind_of(path) {
        Some(OptionKind::Int { min, max }) => (min - 5..=max + 5).prop_map(OptionValue::Int).boxed(),
        Some(OptionKind::Mode(names)) => prop::sample::select(names)
            .prop_map(|name| OptionValue::Mode(name.to_string()))
            .boxed(),
        _ => any::<bool>().prop_map(OptionValue::Bool).boxed(),
    }
}

fn assignment_strategy() -> impl Strategy<Value = (&'static str, OptionValue)> {
    prop::sample::select(LEAF_PATHS).prop_flat_map(|path| (Just(path), value_for(path)))
}

// Configs with a random subset of leaves changed
fn config_strategy() -> impl Strategy<Value = Config> {
    prop::collection::vec(assignment_strategy(), 0..30).prop_map(|assignments| {
        let mut config = Config::default();
        for (path, value) in assignments {
            config.set(path, value).unwrap();
        }
        config
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Saving then loading gives back the same configuration, cleanly
    #[test]
    fn config_document_round_trip(config in config_strategy()) {
        let document = ConfigLoader::to_document(&config).unwrap();
        let (parsed, misses) = ConfigLoader::parse_str(&document).unwrap();
        prop_assert!(misses.is_empty());
        prop_assert_eq!(parsed, config);
    }

    // A set value reads back, clamped for integers
    #[test]
    fn set_then_get((path, value) in assignment_strategy()) {
        let mut config = Config::default();
        config.set(path, value.clone()).unwrap();

        let expected = match (config.kind_of(path), value) {
            (Some(OptionKind::Int { min, max }), OptionValue::Int(n)) => OptionValue::Int(n.clamp(min, max)),
            (_, value) => value,
        };
        prop_assert_eq!(config.get(path), Some(expected));
    }

    // Setting a leaf leaves every other leaf alone
    #[test]
    fn set_touches_one_leaf((path, value) in assignment_strategy()) {
        let before = Config::default();
        let mut after = before.clone();
        after.set(path, value).unwrap();

        for &other in LEAF_PATHS.iter().filter(|&&other| other != path) {
            prop_assert_eq!(after.get(other), before.get(other), "{} changed", other);
        }
    }

    // Text form of a value parses back to the same value
    #[test]
    fn display_parses_back((path, value) in assignment_strategy()) {
        let mut config = Config::default();
        config.set_from_str(path, &value.to_string()).unwrap();
        let mut direct = Config::default();
        direct.set(path, value).unwrap();
        prop_assert_eq!(config, direct);
    }
}
