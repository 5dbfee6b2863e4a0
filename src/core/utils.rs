//! String transformation utilities for code generation

/// Converts a whitespace-separated name to camelCase.
///
/// A character following whitespace is upper-cased, all whitespace is
/// removed, and the first character of the result is lower-cased. Other
/// characters keep their case.
///
/// # Examples
/// ```
/// use csscaffold::core::utils::camelize;
///
/// assert_eq!(camelize("Item Model"), "itemModel");
/// assert_eq!(camelize("Product"), "product");
/// assert_eq!(camelize(""), "");
/// ```
pub fn camelize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;

    for ch in s.chars() {
        if ch.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }

    let mut chars = result.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Turns an arbitrary path segment into a valid C# identifier.
///
/// Characters other than letters, digits and `_` become `_`, and a leading
/// digit is prefixed with `_`. Returns `None` for an empty segment.
///
/// # Examples
/// ```
/// use csscaffold::core::utils::to_identifier;
///
/// assert_eq!(to_identifier("my-app").as_deref(), Some("my_app"));
/// assert_eq!(to_identifier("2fa").as_deref(), Some("_2fa"));
/// assert_eq!(to_identifier(""), None);
/// ```
pub fn to_identifier(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return None;
    }

    let mut result: String = segment
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    Some(result)
}
