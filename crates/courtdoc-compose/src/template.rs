//! Field substitution for boilerplate templates
//!
//! Boilerplate paragraphs carry `{key}` placeholders. [`fill`] substitutes
//! them from a key/value slice; a key with no binding renders as an empty
//! string, matching the universal optional-field policy. No escaping syntax:
//! the boilerplate never needs a literal brace.

/// Substitute `{key}` placeholders in a template string.
///
/// Unknown keys render empty. An unterminated `{` is copied through verbatim.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                if let Some((_, value)) = vars.iter().find(|(k, _)| *k == key) {
                    output.push_str(value);
                }
                rest = &after[end + 1..];
            }
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    output.push_str(rest);
    output
}
