// Shared prompt fragments and the placeholder filler used by every task template.
// Task-specific templates live in tasks::prompts.

/// Closing instruction appended to every JSON task prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Respond with the JSON object ONLY. \
Do NOT include any text before or after it. \
Do NOT wrap it in markdown code fences.";

/// Replaces `{name}` placeholders in a single pass.
///
/// Values are inserted verbatim and never rescanned, so caller text that
/// happens to contain `{skills}` is not expanded. Braces that do not name a
/// known placeholder (the JSON schemas in the templates) are left alone.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let hit = vars.iter().find_map(|(key, value)| {
            after
                .strip_prefix(key)
                .and_then(|r| r.strip_prefix('}'))
                .map(|remaining| (*value, remaining))
        });
        match hit {
            Some((value, remaining)) => {
                out.push_str(value);
                rest = remaining;
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_known_placeholders() {
        let out = fill("from {a} to {b}", &[("a", "Student"), ("b", "Engineer")]);
        assert_eq!(out, "from Student to Engineer");
    }

    #[test]
    fn test_fill_leaves_json_braces() {
        let out = fill(r#"{"topic": "{topic}"}"#, &[("topic", "graphs")]);
        assert_eq!(out, r#"{"topic": "graphs"}"#);
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        let out = fill("{a} {b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(out, "{b} x");
    }

    #[test]
    fn test_fill_handles_unicode_and_trailing_brace() {
        let out = fill("é {name} ü {", &[("name", "Zoë")]);
        assert_eq!(out, "é Zoë ü {");
    }
}
