#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let cfg = SkyConfig::default();
    assert_eq!(cfg.star_count, 200);
    assert_eq!(cfg.max_distance, 140.0);
    assert_eq!(cfg.max_neighbors, 2);
    assert!(cfg.show_lines);
    assert_eq!(cfg.default_seed, "orion");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = SkyConfig::from_json(r#"{"star_count": 50, "show_lines": false}"#).unwrap();
    assert_eq!(cfg.star_count, 50);
    assert!(!cfg.show_lines);
    assert_eq!(cfg.max_neighbors, 2);
    assert_eq!(cfg.default_seed, "orion");
}

#[test]
fn empty_object_is_default() {
    assert_eq!(SkyConfig::from_json("{}").unwrap(), SkyConfig::default());
}

#[test]
fn mistyped_field_is_an_error() {
    assert!(SkyConfig::from_json(r#"{"star_count": "many"}"#).is_err());
    assert!(SkyConfig::from_json("not json").is_err());
}

#[test]
fn link_params_mirror_config() {
    let cfg = SkyConfig { max_distance: 90.0, max_neighbors: 4, ..SkyConfig::default() };
    let params = cfg.link_params();
    assert_eq!(params.max_distance, 90.0);
    assert_eq!(params.max_neighbors, 4);
}
