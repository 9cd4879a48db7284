//! PascalCase/camelCase to kebab-case conversion.

/// Convert a PascalCase or camelCase identifier to kebab-case.
///
/// A hyphen is inserted at every lowercase-or-digit to uppercase boundary,
/// then the whole string is lowercased. Idempotent on already-kebab input.
///
/// ```
/// use san_scaffold::scaffold::to_kebab_case;
///
/// assert_eq!(to_kebab_case("CitySelector"), "city-selector");
/// assert_eq!(to_kebab_case("AudioPlayer"), "audio-player");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            out.extend(ch.to_lowercase());
        }
    }

    out
}
