//! Identifier derivation from icon file names.

use std::path::Path;

/// Prefix used when a derived name would not start with a letter.
const FALLBACK_PREFIX: &str = "Icon";

/// The pair of names derived from an icon file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconName {
    /// File name without the `.svg` suffix (e.g., "home-outline")
    pub filename: String,

    /// Exported component identifier (e.g., "HomeOutline")
    pub component_name: String,
}

impl IconName {
    /// Derive the name pair from an icon path.
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_filename(strip_svg_suffix(&file_name))
    }

    /// Derive the name pair from a bare file name (without extension).
    pub fn from_filename(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            component_name: to_pascal_case(filename),
        }
    }
}

fn strip_svg_suffix(file_name: &str) -> &str {
    let split = file_name.len().saturating_sub(4);
    match file_name.get(split..) {
        Some(ext) if ext.eq_ignore_ascii_case(".svg") => &file_name[..split],
        _ => file_name,
    }
}

/// Convert a file name to a PascalCase identifier.
///
/// Words are split at separators, at lower-to-upper transitions, at the end
/// of an acronym (`XMLHttp` -> `Xml`, `Http`) and where a letter follows a
/// digit. A result that would start with a digit is prefixed with `Icon`.
pub fn to_pascal_case(input: &str) -> String {
    let mut out: String = split_words(input)
        .iter()
        .map(|word| capitalize(word))
        .collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, FALLBACK_PREFIX);
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !is_word_char(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_ascii_digit() && c.is_alphabetic())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));

            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Check whether a string is usable as a JavaScript identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn converts_separated_names() {
        assert_eq!(to_pascal_case("arrow-left"), "ArrowLeft");
        assert_eq!(to_pascal_case("arrow_left_2"), "ArrowLeft2");
        assert_eq!(to_pascal_case("home outline"), "HomeOutline");
        assert_eq!(to_pascal_case("chevron.down"), "ChevronDown");
    }

    #[test]
    fn splits_on_case_transitions() {
        assert_eq!(to_pascal_case("homeOutline"), "HomeOutline");
        assert_eq!(to_pascal_case("XMLHttp"), "XmlHttp");
        assert_eq!(to_pascal_case("ARROW"), "Arrow");
        assert_eq!(to_pascal_case("icon2x"), "Icon2X");
    }

    #[test]
    fn prefixes_names_that_start_with_digits() {
        assert_eq!(to_pascal_case("24-hours"), "Icon24Hours");
        assert_eq!(to_pascal_case("---"), "Icon");
        assert_eq!(to_pascal_case(""), "Icon");
    }

    #[test]
    fn derived_names_are_valid_capitalized_identifiers() {
        for input in [
            "arrow-left",
            "2fa",
            "user_circle--filled",
            "weird  name",
            "café-au-lait",
            "__",
        ] {
            let name = to_pascal_case(input);
            assert!(is_valid_identifier(&name), "{input} -> {name}");
            assert!(name.starts_with(char::is_uppercase), "{input} -> {name}");
            assert_eq!(name, to_pascal_case(input));
        }
    }

    #[test]
    fn derives_pair_from_path() {
        let name = IconName::from_path(&PathBuf::from("/icons/svg/home-outline.svg"));
        assert_eq!(name.filename, "home-outline");
        assert_eq!(name.component_name, "HomeOutline");
    }

    #[test]
    fn strips_uppercase_extension() {
        let name = IconName::from_path(&PathBuf::from("Logo.SVG"));
        assert_eq!(name.filename, "Logo");
        assert_eq!(name.component_name, "Logo");
    }

    #[test]
    fn rejects_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("a-b"));
        assert!(is_valid_identifier("ArrowLeft2"));
    }
}
