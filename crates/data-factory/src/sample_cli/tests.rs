//! Unit tests for the sample CLI helpers.

use env_lock::lock_env;
use rstest::{fixture, rstest};

use super::*;
use crate::config::DEFAULT_COUNT;
use crate::locale::Locale;

const VARIABLES: [&str; 4] = [
    "DATA_FACTORY_LOCALE",
    "DATA_FACTORY_SEED",
    "DATA_FACTORY_COUNT",
    "DATA_FACTORY_BUNDLE_DIR",
];

fn parse(args: &[&str]) -> SampleArgs {
    SampleArgs::try_parse_from(std::iter::once(PROGRAM_NAME).chain(args.iter().copied()))
        .expect("parse args")
}

#[fixture]
fn factory() -> DataFactory {
    let mut factory = DataFactory::new(Locale::parse("en-GB").expect("valid tag"));
    factory.reseed(2026);
    factory
}

#[test]
fn defaults_to_person_records_without_overrides() {
    let args = parse(&[]);

    assert_eq!(args.kind, SampleKind::Person);
    assert!(args.locale.is_none());
    assert!(args.seed.is_none());
    assert!(args.count.is_none());
}

#[test]
fn rejects_unknown_kinds() {
    let result = SampleArgs::try_parse_from([PROGRAM_NAME, "--kind", "weather"]);

    assert!(result.is_err());
}

#[test]
fn flags_override_loaded_settings() {
    let args = parse(&["--locale", "zh-CN", "--count", "2"]);
    let loaded = DataFactorySettings {
        locale: Some("en".to_owned()),
        seed: Some(9),
        count: 50,
        bundle_dir: None,
    };

    let settings = args.apply(loaded);

    assert_eq!(settings.locale.as_deref(), Some("zh-CN"));
    assert_eq!(settings.seed, Some(9));
    assert_eq!(settings.count(), 2);
}

#[rstest]
#[case::person(SampleKind::Person, "@")]
#[case::address(SampleKind::Address, ", ")]
#[case::business(SampleKind::Business, " (")]
#[case::text(SampleKind::Text, " ")]
fn renders_each_kind(mut factory: DataFactory, #[case] kind: SampleKind, #[case] marker: &str) {
    let line = sample_line(&mut factory, kind).expect("sample line");

    assert!(line.contains(marker), "{line:?} lacks {marker:?}");
}

#[rstest]
fn writes_one_line_per_record(mut factory: DataFactory) {
    let mut out = Vec::new();

    write_samples(&mut out, &mut factory, SampleKind::Address, 4).expect("write samples");

    let text = String::from_utf8(out).expect("utf-8 output");
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn seeded_runs_print_identical_output() {
    let _guard = lock_env(VARIABLES.map(|name| (name, None::<String>)));
    let args = parse(&["--locale", "zh-CN", "--seed", "17", "--count", "3"]);

    let mut first = Vec::new();
    let mut second = Vec::new();
    run(&args, &mut first).expect("first run");
    run(&args, &mut second).expect("second run");

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).expect("utf-8").lines().count(), 3);
}

#[test]
fn runs_with_nothing_configured_but_flags() {
    let _guard = lock_env(VARIABLES.map(|name| (name, None::<String>)));
    let args = parse(&["--locale", "zh-CN", "--count", "2"]);

    let mut out = Vec::new();
    run(&args, &mut out).expect("flags alone are enough");

    assert_eq!(String::from_utf8(out).expect("utf-8").lines().count(), 2);
}

#[test]
fn missing_count_flag_keeps_the_loaded_count() {
    let settings = parse(&[]).apply(DataFactorySettings::default());

    assert_eq!(settings.count(), DEFAULT_COUNT);
}

#[test]
fn invalid_locale_flag_is_a_setup_error() {
    let _guard = lock_env(VARIABLES.map(|name| (name, None::<String>)));
    let args = parse(&["--locale", "123"]);

    let err = run(&args, &mut Vec::<u8>::new()).expect_err("invalid locale");

    assert_eq!(
        err.to_string(),
        "factory setup error: invalid locale tag: '123'"
    );
}
