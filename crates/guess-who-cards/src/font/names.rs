//! Logical font name → Google Fonts family name

/// Style suffixes stripped before deriving a family name, longest first so
/// that compound styles are not left half-stripped
pub const STYLE_SUFFIXES: &[&str] = &[
    "-BoldOblique",
    "-BoldItalic",
    "-ExtraLight",
    "-ExtraBold",
    "-SemiBold",
    "-Regular",
    "-Oblique",
    "-Italic",
    "-Medium",
    "-Light",
    "-Black",
    "-Bold",
    "-Thin",
];

/// Remove one trailing style suffix (case-sensitive), if present
pub fn strip_style_suffix(name: &str) -> &str {
    STYLE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

/// Insert a space at every lowercase → uppercase boundary
pub fn split_camel_case(name: &str) -> String {
    let mut words = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if prev_lower && ch.is_uppercase() {
            words.push(' ');
        }
        words.push(ch);
        prev_lower = ch.is_lowercase();
    }
    words
}

/// Human family name for a logical font name.
///
/// `BodoniModa-Bold` → `Bodoni Moda`, `PlayfairDisplay` → `Playfair Display`.
pub fn derive_family_name(name: &str) -> String {
    split_camel_case(strip_style_suffix(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_family_name() {
        assert_eq!(derive_family_name("BodoniModa-Bold"), "Bodoni Moda");
        assert_eq!(derive_family_name("PlayfairDisplay"), "Playfair Display");
        assert_eq!(derive_family_name("Lobster"), "Lobster");
        assert_eq!(derive_family_name("OpenSans-BoldItalic"), "Open Sans");
        assert_eq!(derive_family_name("EBGaramond-Regular"), "EBGaramond");
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert_eq!(strip_style_suffix("Roboto-bold"), "Roboto-bold");
        assert_eq!(strip_style_suffix("Roboto-Bold"), "Roboto");
    }

    #[test]
    fn test_only_one_suffix_stripped() {
        assert_eq!(strip_style_suffix("Foo-Bold-Italic"), "Foo-Bold");
    }
}
