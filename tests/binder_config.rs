use argbind::{BindStatus, Binder, BinderConfig, DiagnosticKind, ParseStatus};

#[derive(Default)]
struct Settings {
    text: String,
}

fn settings_binder(config: BinderConfig) -> Binder<Settings> {
    let mut binder = Binder::new("cfgtest", config);
    binder
        .register("-t", "text", |settings: &mut Settings| {
            Some(&mut settings.text)
        })
        .expect("register -t");
    binder
}

#[test]
fn defaults_skip_the_binary_name_and_disable_help() {
    let config = BinderConfig::default();
    assert!(config.no_binary_name);
    assert!(!config.enable_help);
}

#[test]
fn enabled_help_surfaces_the_rendered_text_as_a_failed_parse() {
    let mut binder = settings_binder(BinderConfig {
        no_binary_name: true,
        enable_help: true,
    });
    let mut settings = Settings {
        text: "before".to_string(),
    };

    let outcome = binder.initialize_str(&mut settings, "--help");

    assert_eq!(outcome.status(), BindStatus::Failure);
    assert_eq!(binder.parse_status(), ParseStatus::ParseFailed);
    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].kind(), DiagnosticKind::ParseSyntax);
    assert!(outcome.diagnostics()[0].message().contains("Usage"));
    assert_eq!(settings.text, "before");
}

#[test]
fn disabled_help_rejects_the_flag_as_unknown() {
    let mut binder = settings_binder(BinderConfig::default());
    let mut settings = Settings::default();

    let outcome = binder.initialize_str(&mut settings, "--help");

    assert_eq!(outcome.status(), BindStatus::Failure);
    assert_eq!(binder.parse_status(), ParseStatus::ParseFailed);
    assert_eq!(outcome.diagnostics()[0].kind(), DiagnosticKind::ParseSyntax);
    assert!(outcome.diagnostics()[0].message().contains("--help"));
}

#[test]
fn leading_program_token_is_consumed_when_configured() {
    let mut binder = settings_binder(BinderConfig {
        no_binary_name: false,
        enable_help: false,
    });
    let mut settings = Settings::default();

    let outcome = binder.initialize(&mut settings, ["prog", "-t", "hello"]);

    assert_eq!(outcome.status(), BindStatus::Success);
    assert_eq!(settings.text, "hello");
}
