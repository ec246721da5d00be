use crate::{Error, Level};

#[test]
fn test_level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Fatal);

    let mut shuffled = vec![Level::Error, Level::Debug, Level::Fatal, Level::Info, Level::Warning];
    shuffled.sort();
    assert_eq!(shuffled, Level::ALL);
}

#[test]
fn test_level_tags() {
    let tags: Vec<&str> = Level::ALL.iter().map(|l| l.tag()).collect();
    assert_eq!(tags, ["DEBU ", "INFO ", "WARN ", "ERRO ", "FATA "]);
    assert!(tags.iter().all(|t| t.len() == 5));
}

#[test]
fn test_level_parsing() {
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!(" Fatal ".parse::<Level>().unwrap(), Level::Fatal);

    let err = "verbose".parse::<Level>().expect_err("Unknown level should fail");
    assert!(matches!(err, Error::UnknownLevel(name) if name == "verbose"));
}

#[test]
fn test_level_from_log() {
    assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    assert_eq!(Level::from(log::Level::Debug), Level::Debug);
    assert_eq!(Level::from(log::Level::Warn), Level::Warning);
    assert_eq!(Level::from(log::Level::Error), Level::Error);
}

#[test]
fn test_level_serde_names() {
    let json = serde_json::to_string(&Level::Warning).expect("Failed to serialize level");
    assert_eq!(json, "\"warning\"");

    let level: Level = serde_json::from_str("\"warn\"").expect("Failed to parse alias");
    assert_eq!(level, Level::Warning);
}
