//! Config files describe components as short templates — `"level"` or `"{file}:{line}"` —
//! rather than a nested enum. One template becomes one `LogComponent`.

use super::component::LogComponent;

/// Parses one template into a component.
///
/// A bare placeholder name (`"message"`) or a single `{placeholder}` yields that component,
/// pure literal text yields `Text`, and anything mixed yields a `Group`. Unknown `{names}`
/// pass through as literal text.
#[must_use]
pub fn parse(template: &str) -> LogComponent {
    if let Some(component) = LogComponent::from_placeholder(template) {
        return component;
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = template.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '{'
            && let Some(end) = chars[i..].iter().position(|&c| c == '}')
        {
            let end = i + end;
            let name: String = chars[i + 1..end].iter().collect();

            if let Some(component) = LogComponent::from_placeholder(&name) {
                if !current.is_empty() {
                    parts.push(LogComponent::Text(std::mem::take(&mut current)));
                }
                parts.push(component);
            } else {
                current.push('{');
                current.push_str(&name);
                current.push('}');
            }

            i = end + 1;
            continue;
        }

        current.push(chars[i]);
        i += 1;
    }

    if !current.is_empty() {
        parts.push(LogComponent::Text(current));
    }

    if parts.len() == 1
        && let Some(only) = parts.pop()
    {
        return only;
    }

    if parts.is_empty() {
        LogComponent::Text(String::new())
    } else {
        LogComponent::Group(parts)
    }
}

/// Parses every template in order.
#[must_use]
pub fn parse_all<S: AsRef<str>>(templates: &[S]) -> Vec<LogComponent> {
    templates.iter().map(|t| parse(t.as_ref())).collect()
}
