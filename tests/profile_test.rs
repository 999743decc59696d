use std::io::Write;

use tempfile::NamedTempFile;

use cantine::config::PROFILE_ENV;
use cantine::utils::validation::Validate;
use cantine::{MenuError, SiteProfile};

#[test]
fn profile_file_selected_via_the_environment() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "menu_url = \"https://cantine.example.org/semaine/\"").unwrap();
    writeln!(file, "fragment_delimiter = \"<br>\"").unwrap();

    std::env::set_var(PROFILE_ENV, file.path());
    let loaded = SiteProfile::load();
    std::env::remove_var(PROFILE_ENV);

    let profile = loaded.unwrap();
    assert_eq!(profile.menu_url, "https://cantine.example.org/semaine/");
    assert_eq!(profile.fragment_delimiter, "<br>");
    // Everything the file does not mention keeps its default.
    assert_eq!(profile.day_tokens.monday, "lundi");
    assert_eq!(profile.order_url, SiteProfile::default().order_url);
    profile.validate().unwrap();
}

#[test]
fn marker_tables_can_be_remapped_for_another_site() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
menu_url = "https://resto.example.org/carte/"
order_url = "https://resto.example.org/commander/"

[day_markers]
marker = "day-title"
start = "day-title'>"
end = "</h3>"

[day_tokens]
monday = "lun"
tuesday = "mar"
wednesday = "mer"
thursday = "jeu"
friday = "ven"
"#
    )
    .unwrap();

    let profile = SiteProfile::from_file(file.path()).unwrap();

    assert_eq!(profile.day_markers.marker, "day-title");
    assert_eq!(profile.day_tokens.friday, "ven");
    // The dish markers were not overridden.
    assert_eq!(profile.dish_markers, SiteProfile::default().dish_markers);
    profile.validate().unwrap();
}

#[test]
fn missing_profile_file_is_an_io_error() {
    let err = SiteProfile::from_file("/no/such/profile.toml").unwrap_err();
    assert!(matches!(err, MenuError::Io(_)));
}

#[test]
fn broken_profile_file_is_an_invalid_profile() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "menu_url = [not toml").unwrap();

    let err = SiteProfile::from_file(file.path()).unwrap_err();
    assert!(matches!(err, MenuError::InvalidProfile { .. }));
}
