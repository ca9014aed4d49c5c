use super::*;

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn initial_defaults_to_light() {
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn initial_follows_system_dark_when_nothing_stored() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
}

#[test]
fn stored_preference_overrides_system_dark() {
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
}

#[test]
fn stored_preference_overrides_system_light() {
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
}

#[test]
fn garbage_stored_value_falls_back_to_system() {
    assert_eq!(resolve_initial(Some("solarized"), true), Theme::Dark);
    assert_eq!(resolve_initial(Some(""), false), Theme::Light);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips_between_the_two_values() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_twice_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// String forms
// =============================================================

#[test]
fn string_form_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn icon_tracks_theme() {
    assert!(Theme::Light.icon_class().contains("fa-moon"));
    assert!(Theme::Dark.icon_class().contains("fa-sun"));
}
