//! Integration tests for the data-factory crate.
//!
//! These tests exercise the public facade end to end: seeding, locale
//! fallback, bundle overrides loaded from disk, and custom value sources.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use std::collections::HashMap;

use data_factory::{
    BundleValues, DEFAULT_SEED, DataFactory, DataFactorySettings, Domain, GenerationError,
    Locale, RandomSource, ResourceBundle, SeededRandom, ValueSource, ValuesError, selection,
};
use rstest::rstest;
use test_support::{unique_temp_dir, write_bundle};

const OVERRIDE_ADDRESS_JSON: &str = r#"{
    "version": 1,
    "name": "address",
    "locales": {
        "root": {
            "streetNames": "Coral",
            "addressSuffixes": "Reef",
            "cities": "Atlantis"
        }
    }
}"#;

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).expect("valid tag")
}

/// Values stored in exactly one embedded table; `tag` may be `root`.
fn embedded_values(domain: Domain, tag: &str, category: &str) -> Vec<String> {
    let bundle = ResourceBundle::embedded(domain).expect("embedded bundle");
    bundle
        .table_value(tag, category)
        .expect("category present")
        .split(',')
        .map(str::to_owned)
        .collect()
}

#[rstest]
#[case(Domain::Address, "cities")]
#[case(Domain::Names, "firstNames")]
#[case(Domain::Content, "emailHosts")]
fn root_tables_are_readable_by_tag(#[case] domain: Domain, #[case] category: &str) {
    assert!(!embedded_values(domain, "root", category).is_empty());
}

/// One call to every facade generator.
fn snapshot(factory: &mut DataFactory) -> Vec<String> {
    let base = factory.date(2020, 1, 1).expect("valid date");
    let max = factory.date(2021, 1, 1).expect("valid date");
    vec![
        factory.street_name().expect("street"),
        factory.street_suffix().expect("suffix"),
        factory.city().expect("city"),
        factory.name().expect("name"),
        factory.email_address().expect("email"),
        factory.business_name().expect("business"),
        factory.word().expect("word"),
        factory.random_chars(1, 20).expect("chars"),
        factory.random_unicode_chars(1, 5).expect("unicode"),
        factory.date_offset(base, -30, 30).expect("offset").to_string(),
        factory.date_between(base, max).expect("between").to_string(),
        factory.birth_date().expect("birth date").to_string(),
        factory.chance(50).expect("chance").to_string(),
    ]
}

#[rstest]
#[case("en")]
#[case("zh-CN")]
fn reseeding_reproduces_every_generator(#[case] tag: &str) {
    let mut factory = DataFactory::new(locale(tag));

    factory.reseed(31_337);
    let first = snapshot(&mut factory);
    factory.reseed(31_337);
    let second = snapshot(&mut factory);

    assert_eq!(first, second);
}

#[test]
fn fresh_factories_share_the_default_seed() {
    let mut first = DataFactory::new(locale("zh-CN"));
    let mut second = DataFactory::with_random(locale("zh-CN"), SeededRandom::new(DEFAULT_SEED));

    assert_eq!(snapshot(&mut first), snapshot(&mut second));
}

#[test]
fn different_seeds_diverge() {
    let mut first = DataFactory::new(locale("en"));
    let mut second = DataFactory::new(locale("en"));
    first.reseed(1);
    second.reseed(2);

    let first_chars = first.random_chars_exact(32).expect("chars");
    let second_chars = second.random_chars_exact(32).expect("chars");

    assert_ne!(first_chars, second_chars);
}

#[rstest]
#[case::region_fallback("zh-TW", "root")]
#[case::language_only("fr", "root")]
#[case::exact("zh-CN", "zh-CN")]
fn cities_resolve_through_the_fallback_chain(#[case] tag: &str, #[case] resolved: &str) {
    let expected = embedded_values(Domain::Address, resolved, "cities");
    let mut factory = DataFactory::new(locale(tag));

    for _ in 0..25 {
        let city = factory.city().expect("city");
        assert!(expected.contains(&city), "{city} not from {resolved}");
    }
}

#[test]
fn email_hosts_fall_back_to_root_for_chinese() {
    let hosts = embedded_values(Domain::Content, "root", "emailHosts");
    let mut factory = DataFactory::new(locale("zh-CN"));

    let email = factory.email_address().expect("email");
    let (_, host) = email.split_once('@').expect("has @");

    assert!(hosts.iter().any(|candidate| candidate == host), "{email}");
}

#[test]
fn bundle_directory_overrides_embedded_data() {
    let dir = unique_temp_dir("override").expect("temp dir");
    write_bundle(&dir, "address.json", OVERRIDE_ADDRESS_JSON).expect("write bundle");
    let settings = DataFactorySettings {
        locale: Some("en-GB".to_owned()),
        bundle_dir: Some(dir.into_std_path_buf()),
        ..DataFactorySettings::default()
    };

    let mut factory = settings.build_factory().expect("valid settings");

    assert_eq!(factory.city().expect("city"), "Atlantis");
    assert_eq!(factory.street_name().expect("street"), "Coral");
    assert_eq!(factory.street_suffix().expect("suffix"), "Reef");
    let first_names = embedded_values(Domain::Names, "root", "firstNames");
    assert!(first_names.contains(&factory.first_name().expect("first name")));
}

#[rstest]
#[case::malformed("{ not json", "parse")]
#[case::version(r#"{"version": 9, "name": "address", "locales": {"root": {}}}"#, "version")]
#[case::empty(r#"{"version": 1, "name": "address", "locales": {}}"#, "empty")]
fn invalid_bundle_files_are_reported(#[case] contents: &str, #[case] expected: &str) {
    let dir = unique_temp_dir("invalid").expect("temp dir");
    write_bundle(&dir, "address.json", contents).expect("write bundle");
    let settings = DataFactorySettings {
        locale: Some("en".to_owned()),
        bundle_dir: Some(dir.into_std_path_buf()),
        ..DataFactorySettings::default()
    };

    let err = settings.build_factory().err().expect("invalid bundle");

    match (expected, err) {
        ("parse", ValuesError::ParseError { .. })
        | ("version", ValuesError::UnsupportedVersion { expected: 1, actual: 9 })
        | ("empty", ValuesError::EmptyLocales { .. }) => {}
        (_, other) => panic!("unexpected error for {expected}: {other:?}"),
    }
}

/// In-memory source keyed by the fallback chain.
struct MapSource {
    entries: HashMap<(String, String), String>,
}

impl ValueSource for MapSource {
    fn lookup(&self, locale: &Locale, category: &str) -> Option<&str> {
        locale.fallback_chain().into_iter().find_map(|key| {
            self.entries
                .get(&(key, category.to_owned()))
                .map(String::as_str)
        })
    }
}

#[test]
fn custom_sources_back_the_facade() {
    let entries = HashMap::from([
        (
            ("de".to_owned(), "firstNames".to_owned()),
            "Anna,Lena".to_owned(),
        ),
        (
            ("root".to_owned(), "lastNames".to_owned()),
            "Schmidt".to_owned(),
        ),
    ]);
    let values = BundleValues::new(MapSource { entries }, locale("de-AT"));
    let mut factory = DataFactory::new(locale("de-AT")).with_name_values(values);

    let name = factory.name().expect("name");

    assert!(
        name == "Anna Schmidt" || name == "Lena Schmidt",
        "unexpected name {name}"
    );
}

#[test]
fn missing_categories_surface_as_values_errors() {
    let values = BundleValues::new(
        MapSource {
            entries: HashMap::new(),
        },
        locale("en"),
    );
    let mut factory = DataFactory::new(locale("en")).with_content_values(values);

    assert_eq!(
        factory.word(),
        Err(GenerationError::Values(ValuesError::CategoryNotFound {
            locale: "en".to_owned(),
            category: "words".to_owned(),
        }))
    );
}

/// Source that replays scripted draws so selection order is observable.
struct ScriptedRandom {
    draws: Vec<usize>,
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: usize) -> Result<usize, GenerationError> {
        let draw = self.draws.pop().ok_or(GenerationError::InvalidInput {
            message: "scripted draws exhausted",
        })?;
        if draw >= bound {
            return Err(GenerationError::InvalidRange {
                message: format!("draw {draw} out of bound {bound}"),
            });
        }
        Ok(draw)
    }

    fn next_double(&mut self) -> f64 {
        0.5
    }

    fn reseed(&mut self, _seed: u64) {}
}

#[test]
fn injected_random_sources_drive_selection() {
    // Draws pop from the end: gate draw 10, then index 2.
    let mut random = ScriptedRandom { draws: vec![2, 10] };
    let items = ["a", "b", "c"];

    let picked = selection::choose_with_probability(&mut random, &items[..], 50).expect("valid");

    assert_eq!(picked, Some(&"c"));
}

#[test]
fn facade_validates_lists_before_drawing() {
    let mut factory = DataFactory::with_random(locale("en"), ScriptedRandom { draws: Vec::new() });
    let empty: [u8; 0] = [];

    assert_eq!(
        factory.choose(&empty[..]),
        Err(GenerationError::InvalidInput {
            message: "list cannot be empty"
        })
    );
    assert_eq!(
        factory.choose(None::<&[u8]>),
        Err(GenerationError::InvalidInput {
            message: "list cannot be null"
        })
    );
}
