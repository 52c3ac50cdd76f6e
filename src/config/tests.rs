use super::validation::validate_config;
use super::*;

fn create_test_config(latitude: Option<f64>, longitude: Option<f64>) -> EngineConfig {
    EngineConfig {
        latitude,
        longitude,
        timezone: Some("America/New_York".to_string()),
        ..EngineConfig::default()
    }
}

#[test]
fn test_default_config_needs_only_coordinates() {
    let config = create_test_config(Some(40.7128), Some(-74.0060));
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_missing_latitude_rejected() {
    let config = create_test_config(None, Some(-74.0060));
    let result = validate_config(&config);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("latitude"));
}

#[test]
fn test_missing_longitude_rejected() {
    let config = create_test_config(Some(40.7128), None);
    let result = validate_config(&config);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("longitude"));
}

#[test]
fn test_out_of_range_coordinates_rejected() {
    assert!(validate_config(&create_test_config(Some(90.1), Some(0.0))).is_err());
    assert!(validate_config(&create_test_config(Some(-90.1), Some(0.0))).is_err());
    assert!(validate_config(&create_test_config(Some(0.0), Some(180.1))).is_err());
    assert!(validate_config(&create_test_config(Some(0.0), Some(-180.1))).is_err());

    // Boundary values are valid
    assert!(validate_config(&create_test_config(Some(90.0), Some(-180.0))).is_ok());
}

#[test]
fn test_inverted_color_temp_range_rejected() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.min_color_temp = 6500;
    config.max_color_temp = 2000;
    let result = validate_config(&config);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("must not exceed max_color_temp")
    );
}

#[test]
fn test_color_temp_limits_enforced() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.min_color_temp = 499;
    assert!(validate_config(&config).is_err());

    config.min_color_temp = 500;
    assert!(validate_config(&config).is_ok());

    config.max_color_temp = 25001;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_inverted_brightness_range_rejected() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.min_brightness = 80;
    config.max_brightness = 20;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_zero_brightness_rejected() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.min_brightness = 0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_max_steps_limits() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.max_steps = 0;
    assert!(validate_config(&config).is_err());

    config.max_steps = 1;
    assert!(validate_config(&config).is_ok());

    config.max_steps = 101;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_non_finite_segment_params_rejected() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.morning_brightness.mid = f64::NAN;
    assert!(validate_config(&config).is_err());

    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.evening_color_temp.gain = f64::INFINITY;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_non_positive_steepness_rejected() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.morning_color_temp.steep = 0.0;
    let result = validate_config(&config);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("steep"));
}

#[test]
fn test_negative_decay_rejected() {
    let mut config = create_test_config(Some(40.7), Some(-74.0));
    config.evening_brightness.decay = -0.01;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_config_roundtrips_through_serde() {
    let mut config = create_test_config(Some(51.5074), Some(-0.1278));
    config.max_steps = 12;
    config.curve_mode = CurveMode::SunPosition;
    config.evening_color_temp.gain = 2.5;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn test_partial_config_fills_defaults() {
    let json = r#"{ "latitude": 40.7, "longitude": -74.0 }"#;
    let config: EngineConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.min_color_temp, 500);
    assert_eq!(config.max_color_temp, 6500);
    assert_eq!(config.max_steps, 8);
    assert_eq!(config.curve_mode, CurveMode::Logistic);
    // Evening CCT carries its own hotter default gain
    assert_eq!(config.evening_color_temp.gain, 3.0);
    assert_eq!(config.morning_color_temp.gain, 1.0);
}

#[test]
fn test_curve_mode_parses_snake_case() {
    let config: EngineConfig =
        serde_json::from_str(r#"{ "latitude": 0.0, "longitude": 0.0, "curve_mode": "sun_position" }"#)
            .unwrap();
    assert_eq!(config.curve_mode, CurveMode::SunPosition);
}
