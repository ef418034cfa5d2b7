use argbind::{BindStatus, Binder, BinderConfig, Error, OptionName, Value, ValueKind};

#[derive(Default)]
struct Settings {
    text: String,
    count: i64,
    verbose: bool,
}

#[test]
fn single_character_names_are_short_options() {
    let name = OptionName::parse("-t").expect("parse -t");
    assert!(matches!(name, OptionName::Short('t')));
    assert_eq!(name.id(), "t");
    assert_eq!(name.to_string(), "-t");
}

#[test]
fn longer_names_are_long_options_regardless_of_dash_count() {
    let name = OptionName::parse("--text").expect("parse --text");
    assert!(matches!(name, OptionName::Long(_)));
    assert_eq!(name.id(), "text");
    assert_eq!(name.to_string(), "--text");

    let name = OptionName::parse("-xy").expect("parse -xy");
    assert!(matches!(name, OptionName::Long(_)));
    assert_eq!(name.to_string(), "--xy");
}

#[test]
fn unusable_names_are_rejected() {
    for raw in ["", "-", "--", "   "] {
        let result = OptionName::parse(raw);
        assert!(
            matches!(result, Err(Error::InvalidOptionName { .. })),
            "`{raw}` should not parse"
        );
    }
}

#[test]
fn duplicate_registration_is_rejected_by_id() {
    let mut binder = Binder::new("settings", BinderConfig::default());
    binder
        .register("-t", "text", |settings: &mut Settings| {
            Some(&mut settings.text)
        })
        .expect("first registration");

    // `--t` strips to the same id as `-t`.
    let result = binder.register("--t", "text", |settings: &mut Settings| {
        Some(&mut settings.text)
    });
    assert!(matches!(result, Err(Error::DuplicateOption { .. })));
}

#[test]
fn distinct_ids_register_cleanly() {
    let mut binder = Binder::new("settings", BinderConfig::default());
    binder
        .register("-t", "text", |settings: &mut Settings| {
            Some(&mut settings.text)
        })
        .expect("register -t");
    binder
        .register("--text", "text", |settings: &mut Settings| {
            Some(&mut settings.text)
        })
        .expect("register --text");
    binder
        .register("-c", "count", |settings: &mut Settings| {
            Some(&mut settings.count)
        })
        .expect("register -c");
    binder
        .register("-v", "verbose", |settings: &mut Settings| {
            Some(&mut settings.verbose)
        })
        .expect("register -v");

    assert_eq!(binder.descriptors().len(), 4);
}

#[test]
fn empty_and_broken_paths_are_rejected() {
    for path in ["", "a..b", ".a", "a."] {
        let mut binder = Binder::new("settings", BinderConfig::default());
        let result = binder.register("-t", path, |settings: &mut Settings| {
            Some(&mut settings.text)
        });
        assert!(
            matches!(result, Err(Error::InvalidPath { .. })),
            "path `{path}` should not register"
        );
    }
}

#[test]
fn default_must_match_the_descriptor_kind() {
    let mut binder = Binder::new("settings", BinderConfig::default());
    let result = binder
        .register("-c", "count", |settings: &mut Settings| {
            Some(&mut settings.count)
        })
        .expect("register -c")
        .default_value("notanumber");

    match result {
        Err(error @ Error::TypeMismatch { .. }) => {
            let message = error.to_string();
            assert!(message.contains("-c"));
            assert!(message.contains("integer"));
            assert!(message.contains("string"));
        }
        other => panic!("expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn matching_default_is_stored_on_the_descriptor() {
    let mut binder = Binder::new("settings", BinderConfig::default());
    binder
        .register("-c", "count", |settings: &mut Settings| {
            Some(&mut settings.count)
        })
        .expect("register -c")
        .default_value(7)
        .expect("default for -c");

    let descriptor = &binder.descriptors()[0];
    assert_eq!(descriptor.kind(), ValueKind::Int);
    assert_eq!(descriptor.default(), Some(&Value::Int(7)));
    assert_eq!(descriptor.path().to_string(), "count");
}

#[test]
fn bool_options_accept_flag_and_value_forms() {
    let mut binder = Binder::new("settings", BinderConfig::default());
    binder
        .register("-v", "verbose", |settings: &mut Settings| {
            Some(&mut settings.verbose)
        })
        .expect("register -v");

    let mut settings = Settings::default();
    let outcome = binder.initialize_str(&mut settings, "-v");
    assert_eq!(outcome.status(), BindStatus::Success);
    assert!(settings.verbose);

    let outcome = binder.initialize_str(&mut settings, "-v false");
    assert_eq!(outcome.status(), BindStatus::Success);
    assert!(!settings.verbose);

    let outcome = binder.initialize_str(&mut settings, "-v true");
    assert_eq!(outcome.status(), BindStatus::Success);
    assert!(settings.verbose);
}
