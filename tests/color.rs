mod tests {
    use proptest::prelude::*;
    use rgb7seg::color::{Gamma, Hsv, Palette, Rgb, hsv_to_pwm, hsv_to_rgb, rgb_to_pwm};
    use rgb7seg::color::{NAME_CAPACITY, PALETTE_CAPACITY};
    use rgb7seg::error::{ColorError, Component, PaletteError};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), [1.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), [1.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(Hsv::new(0.5, 1.0, 1.0)), [0.0, 1.0, 1.0]);
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 0.5)), [0.5, 0.5, 0.5]);

        let [r, g, b] = hsv_to_rgb(Hsv::new(1.0 / 3.0, 1.0, 1.0));
        assert!(r.abs() < 1e-6);
        assert!((g - 1.0).abs() < 1e-6);
        assert!(b.abs() < 1e-6);
    }

    #[test]
    fn test_zero_value_is_black() {
        for (hue, sat) in [(0.0, 0.0), (0.3, 1.0), (1.0, 0.0), (0.9, 0.4)] {
            let color = Hsv::new(hue, sat, 0.0);
            assert_eq!(hsv_to_rgb(color), [0.0; 3]);
            assert_eq!(hsv_to_pwm(color, &Gamma::DEFAULT), BLACK);
        }
    }

    #[test]
    fn test_pwm_of_saturated_red() {
        assert_eq!(hsv_to_pwm(Hsv::new(0.0, 1.0, 1.0), &Gamma::DEFAULT), RED);
    }

    #[test]
    fn test_gamma_is_applied_before_scaling() {
        // 0.5 ^ 2.5 * 255 = 45.07, 0.5 ^ 2.4 * 255 = 48.31
        let pwm = hsv_to_pwm(Hsv::new(0.0, 0.0, 0.5), &Gamma::DEFAULT);
        assert_eq!(pwm, Rgb { r: 45, g: 48, b: 48 });
    }

    #[test]
    fn test_rgb_to_pwm_rounds_half_up() {
        assert_eq!(rgb_to_pwm([0.0, 1.0, 0.5]), Rgb { r: 0, g: 255, b: 128 });
        assert_eq!(rgb_to_pwm([1.0 / 255.0, 0.49 / 255.0, 0.0]), Rgb { r: 1, g: 0, b: 0 });
    }

    #[test]
    fn test_gamma_validation() {
        assert_eq!(Gamma::DEFAULT.invalid_exponent(), None);
        assert_eq!(Gamma::uniform(1.0).invalid_exponent(), None);
        assert_eq!(Gamma::uniform(0.0).invalid_exponent(), Some(0.0));
        let gamma = Gamma {
            blue: -2.0,
            ..Gamma::DEFAULT
        };
        assert_eq!(gamma.invalid_exponent(), Some(-2.0));
        assert!(
            Gamma::uniform(f32::INFINITY)
                .invalid_exponent()
                .is_some()
        );
    }

    #[test]
    fn test_hsv_validation() {
        assert!(Hsv::try_new(1.0, 1.0, 1.0).is_ok());
        assert_eq!(
            Hsv::try_new(1.2, 0.0, 0.0),
            Err(ColorError::OutOfRange {
                component: Component::Hue,
                value: 1.2
            })
        );
        assert_eq!(
            Hsv::try_new(0.0, -0.1, 0.0),
            Err(ColorError::OutOfRange {
                component: Component::Saturation,
                value: -0.1
            })
        );
        assert!(matches!(
            Hsv::try_new(0.0, 0.0, f32::NAN),
            Err(ColorError::OutOfRange {
                component: Component::Value,
                ..
            })
        ));
    }

    #[test]
    fn test_hsv_from_components() {
        let components: &[f32] = &[0.5, 0.25, 1.0];
        assert_eq!(Hsv::try_from(components), Ok(Hsv::new(0.5, 0.25, 1.0)));
        let short: &[f32] = &[0.5, 0.25];
        assert_eq!(Hsv::try_from(short), Err(ColorError::Length(2)));
        let long: &[f32] = &[0.5, 0.25, 1.0, 1.0];
        assert_eq!(Hsv::try_from(long), Err(ColorError::Length(4)));
        assert_eq!(Hsv::try_from((0.1f32, 0.2f32, 0.3f32)), Ok(Hsv::new(0.1, 0.2, 0.3)));
        assert!(Hsv::try_from([0.1f32, 2.0, 0.3]).is_err());
    }

    #[test]
    fn test_html_palette() {
        let palette = Palette::html();
        assert_eq!(palette.len(), 14);
        assert_eq!(palette.get("white"), Some(Hsv::new(0.0, 0.0, 0.25)));
        assert_eq!(palette.get("black"), Some(Hsv::BLACK));
        assert_eq!(palette.get("navy"), Some(Hsv::new(2.0 / 3.0, 1.0, 0.25)));
        assert_eq!(palette.get("orange"), None);
        for (_, color) in palette.iter() {
            assert!(color.validate().is_ok());
        }
    }

    #[test]
    fn test_custom_palette() {
        let mut palette = Palette::new();
        assert!(palette.is_empty());
        assert_eq!(palette.insert("amber", Hsv::new(0.1, 1.0, 0.5)), Ok(None));
        assert_eq!(
            palette.insert("amber", Hsv::new(0.11, 1.0, 0.5)),
            Ok(Some(Hsv::new(0.1, 1.0, 0.5)))
        );
        assert!(palette.contains("amber"));
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_palette_names_known_at_runtime() {
        let mut palette = Palette::new();
        let mut name = std::string::String::from("zone");
        name.push('7');

        palette.insert(&name, Hsv::new(0.6, 0.5, 0.5)).unwrap();
        drop(name);

        assert_eq!(palette.get("zone7"), Some(Hsv::new(0.6, 0.5, 0.5)));
        assert!(palette.contains("zone7"));
        assert!(!palette.contains("zone"));
        assert_eq!(palette.iter().next().map(|(name, _)| name), Some("zone7"));
    }

    #[test]
    fn test_palette_rejects_long_name_and_overflow() {
        let mut palette = Palette::new();
        let long = "x".repeat(NAME_CAPACITY + 1);
        assert_eq!(
            palette.insert(&long, Hsv::BLACK),
            Err(PaletteError::NameTooLong(NAME_CAPACITY + 1))
        );
        assert!(palette.is_empty());

        for index in 0..PALETTE_CAPACITY {
            palette.insert(&format!("color{index}"), Hsv::BLACK).unwrap();
        }
        assert_eq!(palette.insert("extra", Hsv::BLACK), Err(PaletteError::Full));
        assert_eq!(
            palette.insert("color3", Hsv::new(0.5, 0.5, 0.5)),
            Ok(Some(Hsv::BLACK))
        );
    }

    proptest! {
        #[test]
        fn test_pwm_is_monotonic_in_value(
            hue in 0.0f32..=1.0,
            sat in 0.0f32..=1.0,
            low in 0.0f32..=1.0,
            high in 0.0f32..=1.0,
        ) {
            let (low, high) = if low <= high { (low, high) } else { (high, low) };
            let dim = hsv_to_pwm(Hsv::new(hue, sat, low), &Gamma::DEFAULT);
            let bright = hsv_to_pwm(Hsv::new(hue, sat, high), &Gamma::DEFAULT);
            prop_assert!(dim.r <= bright.r);
            prop_assert!(dim.g <= bright.g);
            prop_assert!(dim.b <= bright.b);
        }

        #[test]
        fn test_conversion_is_deterministic(hue in 0.0f32..=1.0, sat in 0.0f32..=1.0, val in 0.0f32..=1.0) {
            let color = Hsv::new(hue, sat, val);
            prop_assert_eq!(hsv_to_pwm(color, &Gamma::DEFAULT), hsv_to_pwm(color, &Gamma::DEFAULT));
        }

        #[test]
        fn test_grayscale_with_uniform_gamma(hue in 0.0f32..=1.0, val in 0.0f32..=1.0, exponent in 0.5f32..3.0) {
            let gamma = Gamma::uniform(exponent);
            let corrected = gamma.correct(hsv_to_rgb(Hsv::new(hue, 0.0, val)));
            prop_assert_eq!(corrected[0], corrected[1]);
            prop_assert_eq!(corrected[1], corrected[2]);
        }
    }
}
