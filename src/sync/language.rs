use crate::config::materializer::FALLBACK_EXTENSION;

const EXTENSIONS: [(&str, &str); 7] = [
    ("cpp", "cpp"),
    ("c++", "cpp"),
    ("python", "py"),
    ("python3", "py"),
    ("java", "java"),
    ("javascript", "js"),
    ("c", "c"),
];
const LABELS: [(&str, &str); 4] = [
    ("cpp", "C++"),
    ("python", "Python"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
];
const EXTENSION_LABELS: [(&str, &str); 6] = [
    ("cpp", "C++"),
    ("py", "Python"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("c", "C"),
    ("txt", "Text"),
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn extension_of(language: &str) -> Option<&'static str> {
    lookup(&EXTENSIONS, language)
}

/// Reported language first, then the configured primary language, then plain text.
pub fn resolve_extension(language: &str, primary: &str) -> &'static str {
    extension_of(language)
        .or_else(|| extension_of(primary))
        .unwrap_or(FALLBACK_EXTENSION)
}

pub fn label_of(language: &str) -> String {
    lookup(&LABELS, language)
        .map(str::to_owned)
        .unwrap_or_else(|| language.to_owned())
}

pub fn label_of_extension(extension: &str) -> String {
    lookup(&EXTENSION_LABELS, extension)
        .map(str::to_owned)
        .unwrap_or_else(|| extension.to_owned())
}
