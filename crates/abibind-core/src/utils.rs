/// Upper-case the first character, leaving the rest untouched.
///
/// Contract names are often mixed-case acronyms, so full PascalCase
/// normalization would mangle them.
///
/// # Examples
/// ```
/// use abibind_core::utils::upper_first;
/// assert_eq!(upper_first("gCOTI"), "GCOTI");
/// assert_eq!(upper_first("MyToken"), "MyToken");
/// ```
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert PascalCase, camelCase or kebab-case to SCREAMING_SNAKE_CASE.
///
/// A word boundary is placed before an uppercase letter that follows a
/// lowercase letter or digit, and before the last letter of an uppercase run
/// when a lowercase letter follows it (`HTTPServer` → `HTTP_SERVER`).
///
/// # Examples
/// ```
/// use abibind_core::utils::to_screaming_snake_case;
/// assert_eq!(to_screaming_snake_case("MyToken"), "MY_TOKEN");
/// assert_eq!(to_screaming_snake_case("GCOTI"), "GCOTI");
/// ```
pub fn to_screaming_snake_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.' | ' ')
    }

    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_ascii_uppercase() && i > 0 && !result.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.push(c.to_ascii_uppercase());
    }

    while result.ends_with('_') {
        result.pop();
    }
    result
}

/// Whether `s` can be used as a bare TypeScript property or parameter name.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
