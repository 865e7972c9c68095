use serde::{Deserialize, Serialize};

use super::ConfigParsingError;
use super::core_config::{AppConfig, ListViewConfig, NoCustomConfig};
use crate::model::common::SortDirection;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestAppConfig {
    database_url: String,
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = AppConfig::<NoCustomConfig>::from_yaml(["{}"]).unwrap();
    assert_eq!(config.core.list_view, ListViewConfig::default());
    assert_eq!(config.core.list_view.default_page_size, 15);
    assert_eq!(config.core.list_view.default_sort_field, "id");
    assert_eq!(
        config.core.list_view.default_sort_direction,
        SortDirection::Descending
    );
}

#[test]
fn test_later_yaml_overrides_earlier() {
    let base = r#"
listView:
  defaultPageSize: 25
  search: false
app:
  databaseUrl: "sqlite::memory:"
"#;
    let overlay = r#"
listView:
  defaultSortField: name
  defaultSortDirection: ASC
"#;

    let config = AppConfig::<TestAppConfig>::from_yaml([base, overlay]).unwrap();
    assert_eq!(config.core.list_view.default_page_size, 25);
    assert!(!config.core.list_view.search);
    assert!(config.core.list_view.filters);
    assert_eq!(config.core.list_view.default_sort_field, "name");
    assert_eq!(
        config.core.list_view.default_sort_direction,
        SortDirection::Ascending
    );
    assert_eq!(config.app.database_url, "sqlite::memory:");
}

#[test]
fn test_zero_page_size_is_rejected() {
    let result = AppConfig::<NoCustomConfig>::from_yaml(["listView:\n  defaultPageSize: 0\n"]);
    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(_))
    ));
}

#[test]
fn test_unsupported_file_extension() {
    let result = AppConfig::<NoCustomConfig>::from_files(&["config.toml"]);
    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(_))
    ));
}
