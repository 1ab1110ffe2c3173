use gemini_client::{GeminiError, MimeType};

const SUPPORTED: [(&str, MimeType); 5] = [
    ("image/png", MimeType::Png),
    ("image/jpeg", MimeType::Jpeg),
    ("image/heic", MimeType::Heic),
    ("image/heif", MimeType::Heif),
    ("image/webp", MimeType::Webp),
];

#[test]
fn test_validate_supported_types() {
    for (candidate, expected) in SUPPORTED {
        assert_eq!(MimeType::validate(candidate).unwrap(), expected);
        assert_eq!(candidate.parse::<MimeType>().unwrap(), expected);
        assert_eq!(expected.as_str(), candidate);
    }
}

#[test]
fn test_validate_rejects_unknown_type() {
    let err = MimeType::validate("image/gif").unwrap_err();
    assert!(matches!(err, GeminiError::InvalidMimeType(_)));

    let message = err.to_string();
    assert!(message.contains("[image/gif]"));

    // The message lists every supported type exactly once.
    for (candidate, _) in SUPPORTED {
        assert_eq!(message.matches(candidate).count(), 1, "{message}");
    }
}

#[test]
fn test_validate_is_case_sensitive() {
    assert!(MimeType::validate("IMAGE/PNG").is_err());
    assert!(MimeType::validate("").is_err());
}
