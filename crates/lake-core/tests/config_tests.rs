use lake_core::*;

#[test]
fn defaults_validate() {
    assert!(RippleConfig::default().validate().is_ok());
    assert!(FadeConfig::default().validate().is_ok());
}

#[test]
fn every_listed_key_is_accepted() {
    let mut cfg = RippleConfig::default();
    for key in RippleConfig::KEYS {
        let value = if *key == "ring-color" { "#ffffff" } else { "0.5" };
        cfg.apply_override(key, value)
            .unwrap_or_else(|e| panic!("{}: {}", key, e));
    }
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.decay, 0.5);
    assert_eq!(cfg.ring_color, 0xffffff);
}

#[test]
fn overrides_parse_numbers_and_colors() {
    let mut cfg = RippleConfig::default();
    cfg.apply_override("decay", " 0.9 ").unwrap();
    cfg.apply_override("ring-color", "0x102030").unwrap();
    assert_eq!(cfg.decay, 0.9);
    assert_eq!(cfg.css_color(), "#102030");
    assert_eq!(RippleConfig::default().css_color(), "#81d8d0");
}

#[test]
fn bad_overrides_are_reported() {
    let mut cfg = RippleConfig::default();
    assert_eq!(
        cfg.apply_override("wobble", "1"),
        Err(ConfigError::UnknownKey("wobble".into()))
    );
    assert!(matches!(
        cfg.apply_override("decay", "fast"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(cfg.apply_override("ring-color", "#fff").is_err());
    assert!(cfg.apply_override("ring-color", "#gggggg").is_err());
    // failed overrides leave the value alone
    assert_eq!(cfg, RippleConfig::default());
}

#[test]
fn out_of_range_values_fail_validation() {
    let mut cfg = RippleConfig::default();
    cfg.decay = 1.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfRange { key: "decay", .. })
    ));

    let mut cfg = RippleConfig::default();
    cfg.speed_divisor = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = RippleConfig::default();
    cfg.blur_base = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = RippleConfig::default();
    cfg.growth_base = f32::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn fade_band_override() {
    let mut cfg = FadeConfig::default();
    cfg.apply_override("activation-band", "0.6").unwrap();
    assert_eq!(cfg.activation_band, 0.6);
    cfg.activation_band = 1.5;
    assert!(cfg.validate().is_err());
    assert!(cfg.apply_override("decay", "0.5").is_err());
}

#[test]
fn error_messages_name_the_key() {
    let e = ConfigError::OutOfRange {
        key: "decay",
        value: 2.0,
        expected: "0 < x < 1",
    };
    assert_eq!(e.to_string(), "`decay` = 2 is out of range (0 < x < 1)");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    use lake_core::constants::*;
    assert!(SPAWN_SPEED_THRESHOLD < SPEED_CAP);
    assert!(CULL_LIFE_BELOW < LIFE_DECAY_PER_FRAME);
    assert!(ALPHA_BASE + ALPHA_PER_INTENSITY <= 1.0);
    assert!(ACTIVATION_BAND > 0.0 && ACTIVATION_BAND <= 1.0);
}
