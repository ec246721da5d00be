use crate::{tests::helpers::*, ColorScheme, Error, Level, Rgb};

#[test]
fn test_default_scheme_covers_every_level() {
    let colors = ColorScheme::default();

    for level in Level::ALL {
        assert!(colors.level(level).is_ok(), "no color for {level}");
    }
    assert_eq!(colors.level(Level::Fatal).unwrap(), Rgb(226, 42, 68));
    assert_eq!(colors.message, Rgb(236, 236, 236));
    assert_eq!(colors.argument_name, Rgb(140, 140, 140));
}

#[test]
fn test_level_color_override() {
    let mut colors = ColorScheme::default();
    colors.set_level(Level::Info, Rgb(0, 128, 255));

    assert_eq!(colors.level(Level::Info).unwrap(), Rgb(0, 128, 255));
}

#[test]
fn test_rgb_parsing() {
    assert_eq!("#5e5ffe".parse::<Rgb>().unwrap(), Rgb(94, 95, 254));
    assert_eq!("94, 95, 254".parse::<Rgb>().unwrap(), Rgb(94, 95, 254));
    assert_eq!(Rgb(94, 95, 254).to_string(), "#5e5ffe");

    for bad in ["#12345", "#gggggg", "1,2", "1,2,300", ""] {
        let err = bad.parse::<Rgb>().expect_err("Invalid color should fail");
        assert!(matches!(err, Error::InvalidColor(_)), "{bad}");
    }
}

#[test]
fn test_partial_scheme_from_json() {
    let colors: ColorScheme = serde_json::from_str(r#"{ "message": [1, 2, 3] }"#)
        .expect("Failed to parse color scheme");

    assert_eq!(colors.message, Rgb(1, 2, 3));
    assert_eq!(colors.prefix, ColorScheme::default().prefix);
    assert_eq!(colors.levels.len(), 5);
}

#[test]
fn test_partial_level_colors_keep_defaults() {
    let colors: ColorScheme = serde_json::from_str(r#"{ "levels": { "info": [1, 2, 3] } }"#)
        .expect("Failed to parse color scheme");
    let defaults = ColorScheme::default();

    assert_eq!(colors.levels.len(), 5);
    assert_eq!(colors.level(Level::Info).unwrap(), Rgb(1, 2, 3));
    assert_eq!(
        colors.level(Level::Warning).unwrap(),
        defaults.level(Level::Warning).unwrap()
    );

    // Other levels still render
    let (mut logger, buffer) = capture_logger(plain_options());
    logger.colors = colors;
    logger.warning("w", None).expect("Warning should keep its color");
    assert_eq!(plain(&buffer), "WARN w\n");
}
