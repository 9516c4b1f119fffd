//! HTML rendering for the view routes
//!
//! Small hand-built pages: a shared shell, bound values rendered as a
//! `key=value, ...` line, and HTML escaping for request-supplied text.

use crate::model::Person;

/// Render bound values as the canonical `key=value, key=value` line.
pub fn format_bound_values(values: &[(&str, String)]) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render an optional value the way the demo displays absent bindings.
pub fn display_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Wrap page content in the shared HTML shell.
fn render_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
<h1>{title}</h1>
{content}
</body>
</html>"#
    )
}

/// Result page for routes that bind values and render them back.
pub fn render_result_page(values: &[(&str, String)]) -> String {
    let line = escape_html(&format_bound_values(values));
    render_page("Binding Result", &format!("<p>{line}</p>"))
}

/// Listing page for the fixed person records.
pub fn render_people_page(people: &[Person]) -> String {
    let rows = people
        .iter()
        .map(|person| {
            format!(
                "<li>{}</li>",
                escape_html(&format!("name={}, age={}", person.name, person.age))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    render_page("People", &format!("<ul>\n{rows}\n</ul>"))
}

/// Index page listing the demo endpoints.
pub fn render_index_page() -> String {
    let content = r"<p>Request binding demo endpoints:</p>
<ul>
<li><code>GET /people</code></li>
<li><code>GET /get/res1?name=Alice&amp;age=10</code> (required query)</li>
<li><code>GET /get/res2?name=Alice</code> (optional query)</li>
<li><code>GET /get/res3/{name}/{age}</code> (path segments)</li>
<li><code>GET /get/res5/{name}?age=10</code> (path + query)</li>
<li><code>GET /introduce/{name}</code>, <code>GET /introduce?name=..&amp;age=..</code></li>
<li><code>POST /post/res1..res4, /post/res7</code> (form fields)</li>
<li><code>GET|POST /dto/res1..res3</code> (record with accessors)</li>
<li><code>GET|POST /vo/res1..res3</code> (record without accessors)</li>
<li><code>GET|POST /axios/res1..res5, /axios/vo/res1..res5</code></li>
</ul>";
    render_page("Request Binding Demo", content)
}

/// Escape text for inclusion in HTML body content.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bound_values() {
        let line = format_bound_values(&[
            ("name", "Alice".to_string()),
            ("age", "10".to_string()),
        ]);
        assert_eq!(line, "name=Alice, age=10");
    }

    #[test]
    fn test_display_opt() {
        assert_eq!(display_opt(Some(10)), "10");
        assert_eq!(display_opt(None::<i32>), "null");
    }

    #[test]
    fn test_result_page_contains_bound_line() {
        let page = render_result_page(&[("name", "Alice".to_string())]);
        assert!(page.contains("name=Alice"));
        assert!(page.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_people_page_lists_records() {
        let people = vec![Person::new("Hong Gildong", 10)];
        let page = render_people_page(&people);
        assert!(page.contains("name=Hong Gildong, age=10"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a"&'b'</b>"#),
            "&lt;b&gt;&quot;a&quot;&amp;&#39;b&#39;&lt;/b&gt;"
        );
    }
}
