//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct
//! precedence: Environment variables > Config file > Defaults

use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;
use vendorhub_core::config::{ConfigSource, LayeredConfig};
use vendorhub_core::models::{DistanceUnit, GeoPoint};

fn clear_env() {
    env::remove_var("VENDORHUB_DISTANCE_UNIT");
    env::remove_var("VENDORHUB_NEAREST_LIMIT");
    env::remove_var("VENDORHUB_DEFAULT_CENTER");
}

#[test]
#[serial]
fn test_default_configuration() {
    clear_env();

    let config = LayeredConfig::with_defaults();

    assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers);
    assert_eq!(config.distance_unit.source, ConfigSource::Default);
    assert_eq!(config.nearest_limit.value, 10);
    assert_eq!(config.nearest_limit.source, ConfigSource::Default);
    assert_eq!(config.default_center.value, GeoPoint::new(78.9629, 20.5937));
    assert_eq!(config.default_center.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    clear_env();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
distance_unit = "Miles"
nearest_limit = 25
default_center = [77.209, 28.6139]
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap();

    assert_eq!(config.distance_unit.value, DistanceUnit::Miles);
    assert_eq!(config.distance_unit.source, ConfigSource::File);
    assert_eq!(config.nearest_limit.value, 25);
    assert_eq!(config.nearest_limit.source, ConfigSource::File);
    assert_eq!(config.default_center.value, GeoPoint::new(77.209, 28.6139));
    assert_eq!(config.default_center.source, ConfigSource::File);
}

#[test]
#[serial]
fn test_partial_file_configuration() {
    clear_env();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
nearest_limit = 3
# Only override the limit, leave the rest as defaults
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap();

    assert_eq!(config.nearest_limit.value, 3);
    assert_eq!(config.nearest_limit.source, ConfigSource::File);
    // These should still be defaults
    assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers);
    assert_eq!(config.distance_unit.source, ConfigSource::Default);
    assert_eq!(config.default_center.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();

    env::set_var("VENDORHUB_DISTANCE_UNIT", "miles");
    env::set_var("VENDORHUB_NEAREST_LIMIT", "7");
    env::set_var("VENDORHUB_DEFAULT_CENTER", "72.8777,19.076");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
distance_unit = "Kilometers"
nearest_limit = 25
default_center = [77.209, 28.6139]
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    // Environment should override file
    assert_eq!(config.distance_unit.value, DistanceUnit::Miles);
    assert_eq!(config.distance_unit.source, ConfigSource::Environment);
    assert_eq!(config.nearest_limit.value, 7);
    assert_eq!(config.nearest_limit.source, ConfigSource::Environment);
    assert_eq!(config.default_center.value, GeoPoint::new(72.8777, 19.076));
    assert_eq!(config.default_center.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_keep_lower_layers() {
    clear_env();

    env::set_var("VENDORHUB_DISTANCE_UNIT", "furlongs");
    env::set_var("VENDORHUB_NEAREST_LIMIT", "lots");
    env::set_var("VENDORHUB_DEFAULT_CENTER", "somewhere");

    let config = LayeredConfig::with_defaults().load_from_env();

    // Invalid values are ignored with a warning; defaults stay in place
    assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers);
    assert_eq!(config.distance_unit.source, ConfigSource::Default);
    assert_eq!(config.nearest_limit.value, 10);
    assert_eq!(config.default_center.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_configuration_precedence_order() {
    clear_env();

    env::set_var("VENDORHUB_NEAREST_LIMIT", "7");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "nearest_limit = 25").unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.nearest_limit.value, 7);
    assert_eq!(config.nearest_limit.source, ConfigSource::Environment);

    // Verify precedence levels
    assert!(ConfigSource::Environment.precedence() > ConfigSource::File.precedence());
    assert!(ConfigSource::File.precedence() > ConfigSource::Default.precedence());

    clear_env();
}
