// Prompt-building utilities shared by every stage.
// Each stage keeps its own template constants in a prompts.rs alongside it.

/// Renders a prompt template with named values in a single pass.
///
/// `{name}` is replaced by the value bound to `name`; `{{` and `}}` produce literal braces.
/// Placeholders without a binding are kept verbatim. Substituted text is never re-scanned,
/// so a scraped page that happens to contain `{name}` stays untouched.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find(['{', '}']) {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            match placeholder(tail).and_then(|name| lookup(values, name).map(|v| (name, v))) {
                Some((name, value)) => {
                    out.push_str(value);
                    rest = &tail[name.len() + 2..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        } else {
            out.push('}');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Returns the identifier of a `{identifier}` token at the start of `text`.
fn placeholder(text: &str) -> Option<&str> {
    let end = text.find('}')?;
    let name = &text[1..end];
    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some(name)
}

fn lookup<'a>(values: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    values.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}
