use lingo_types::Language;

/// Supported target languages, in display order
const CATALOG: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("cs", "Czech"),
];

pub fn languages() -> Vec<Language> {
    CATALOG
        .iter()
        .map(|(code, name)| Language::new(*code, *name))
        .collect()
}

/// Look up a catalog entry by code, case-insensitively
pub fn find(code: &str) -> Option<Language> {
    let code = code.trim();
    CATALOG
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(code, name)| Language::new(*code, *name))
}

pub fn default_language() -> Language {
    Language::new("en", "English")
}
