mod common;

use common::Fixture;
use marquee_css::StyleError;
use marquee_layout::LayoutError;
use marquee_theme::{ResourceKind, Theme, ThemeError, ThemeLoader};
use serial_test::serial;

const DESCRIPTOR: &str = "\
# Midnight theme
[Marquee Theme]
Name=Midnight
Name[de]=Mitternacht
Comment=Dark theme with blue accents
Comment[de]=Dunkles Thema mit blauen Akzenten
Style=base.css;accent.css
LayoutPrimary=primary.xml
";

const BASE_CSS: &str = "\
Stage { background: #000; }
Button.primary { color: grey; }
";

const ACCENT_CSS: &str = "Button { color: blue; }\n";

const PRIMARY_XML: &str = r#"<interface>
  <object class="Stage" id="stage">
    <child>
      <object class="Button" id="apps">
        <property name="label">Applications</property>
      </object>
    </child>
  </object>
</interface>
"#;

fn install_midnight(fixture: &Fixture) {
    fixture.install_user(
        "midnight",
        DESCRIPTOR,
        &[
            ("base.css", BASE_CSS),
            ("accent.css", ACCENT_CSS),
            ("primary.xml", PRIMARY_XML),
        ],
    );
}

#[test]
#[serial]
fn loads_styles_and_layout() {
    let fixture = Fixture::new();
    install_midnight(&fixture);

    let mut theme: Theme = Theme::with_locator(fixture.locator())
        .with_loader(ThemeLoader::with_languages(Vec::<String>::new()));
    theme.load("midnight").unwrap();

    assert_eq!(theme.display_name(), Some("Midnight"));

    let styling = theme.styling().unwrap();
    assert_eq!(styling.sources().len(), 2);
    assert_eq!(styling.sources()[1].priority, 1);

    // A plain type selector from a later file outranks a more specific one
    // from an earlier file.
    let last = styling.cascade_order().last().copied().unwrap();
    assert_eq!(last.selector().to_string(), "Button");
    assert_eq!(last.get("color").unwrap().value, "blue");

    let layout = theme.layout().unwrap();
    assert_eq!(layout.objects().len(), 1);
    assert_eq!(layout.find("apps").unwrap().property("label"), Some("Applications"));
}

#[test]
#[serial]
fn translated_fields_follow_language_list() {
    let fixture = Fixture::new();
    install_midnight(&fixture);

    let mut theme: Theme = Theme::with_locator(fixture.locator())
        .with_loader(ThemeLoader::with_languages(["de_AT", "de"]));
    theme.load("midnight").unwrap();

    assert_eq!(theme.display_name(), Some("Mitternacht"));
    assert_eq!(theme.comment(), Some("Dunkles Thema mit blauen Akzenten"));
}

#[test]
#[serial]
fn untranslated_language_falls_back() {
    let fixture = Fixture::new();
    install_midnight(&fixture);

    let mut theme: Theme = Theme::with_locator(fixture.locator())
        .with_loader(ThemeLoader::with_languages(["fr"]));
    theme.load("midnight").unwrap();

    assert_eq!(theme.display_name(), Some("Midnight"));
}

#[test]
#[serial]
fn css_error_is_wrapped_with_its_file() {
    let fixture = Fixture::new();
    let dir = fixture.install_user(
        "midnight",
        DESCRIPTOR,
        &[
            ("base.css", BASE_CSS),
            ("accent.css", "Button { color }\n"),
            ("primary.xml", PRIMARY_XML),
        ],
    );

    let mut theme: Theme = Theme::with_locator(fixture.locator());
    let err = theme.load("midnight").unwrap_err();

    match err {
        ThemeError::ResourceLoadError { kind, file, source } => {
            assert_eq!(kind, ResourceKind::Style);
            assert_eq!(file, dir.join("accent.css"));
            let style_error = source.downcast_ref::<StyleError>().unwrap();
            assert!(matches!(style_error, StyleError::Parse { line: 1, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(theme.styling().is_none());
}

#[test]
#[serial]
fn missing_resource_file_is_a_load_error() {
    let fixture = Fixture::new();
    fixture.install_user(
        "midnight",
        DESCRIPTOR,
        &[("base.css", BASE_CSS), ("accent.css", ACCENT_CSS)],
    );

    let mut theme: Theme = Theme::with_locator(fixture.locator());
    match theme.load("midnight").unwrap_err() {
        ThemeError::ResourceLoadError { kind, source, .. } => {
            assert_eq!(kind, ResourceKind::Layout);
            assert!(matches!(
                source.downcast_ref::<LayoutError>(),
                Some(LayoutError::Io { .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!theme.is_loaded());
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn default_theme_uses_process_environment() {
    let fixture = Fixture::new();
    install_midnight(&fixture);

    std::env::set_var("XDG_DATA_HOME", fixture.user_data_dir());
    std::env::set_var("HOME", fixture.home_dir());
    std::env::set_var("LANG", "de_DE.UTF-8");
    for name in ["LC_ALL", "LC_MESSAGES", "LANGUAGE"] {
        std::env::remove_var(name);
    }

    let mut theme = Theme::new();
    theme.load("midnight").unwrap();

    assert_eq!(theme.display_name(), Some("Mitternacht"));
    assert!(theme.path().unwrap().starts_with(fixture.user_data_dir()));
}
