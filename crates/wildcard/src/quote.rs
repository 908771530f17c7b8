/// Escapes all special characters in `text`.
///
/// Each `\`, `?`, `*` and `[` is prefixed with a backslash, so the result compiles
/// to a pattern that matches `text` and nothing else.
///
/// # Examples
///
/// ```
/// use wildcard::quote;
///
/// assert_eq!(quote("plain"), "plain");
/// assert_eq!(quote(r"a*b?c[d]\e"), r"a\*b\?c\[d]\\e");
/// ```
pub fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if matches!(ch, '\\' | '?' | '*' | '[') {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}
