//! Server-side rendering boundary.
//!
//! The workflow controllers talk to rendering through a single contract: a
//! template name plus a JSON context holding named view-model keys (`title`,
//! an entity instance, auxiliary lists, `errors`). The renderer walks the
//! context generically and produces a plain HTML page; it holds no workflow
//! logic and never touches the store.

use axum::response::Html;
use serde_json::Value;

/// Render a template name and context into an HTML response body.
pub fn render(template: &str, context: Value) -> Html<String> {
    let title = context
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Libris");

    let mut body = String::with_capacity(1024);
    body.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    body.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    body.push_str("</head>\n");
    body.push_str(&format!("<body class=\"template-{}\">\n", escape_text(template)));
    body.push_str(&format!("<h1>{}</h1>\n", escape_text(title)));

    if let Value::Object(map) = &context {
        if let Some(errors) = map.get("errors") {
            render_errors(&mut body, errors);
        }
        for (key, value) in map {
            if key == "title" || key == "errors" {
                continue;
            }
            body.push_str(&format!("<section id=\"{}\">\n", escape_text(key)));
            render_value(&mut body, value);
            body.push_str("</section>\n");
        }
    }

    body.push_str("</body>\n</html>\n");
    Html(body)
}

/// Field-tagged validation failures as an inline list.
fn render_errors(out: &mut String, errors: &Value) {
    let Value::Array(items) = errors else { return };
    if items.is_empty() {
        return;
    }
    out.push_str("<ul class=\"errors\">\n");
    for item in items {
        let field = item.get("field").and_then(Value::as_str).unwrap_or("");
        let message = item.get("message").and_then(Value::as_str).unwrap_or("");
        out.push_str(&format!(
            "<li data-field=\"{}\">{}</li>\n",
            escape_text(field),
            escape_text(message)
        ));
    }
    out.push_str("</ul>\n");
}

fn render_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("<p></p>\n"),
        Value::Bool(b) => out.push_str(&format!("<p>{}</p>\n", b)),
        Value::Number(n) => out.push_str(&format!("<p>{}</p>\n", n)),
        Value::String(s) => out.push_str(&format!("<p>{}</p>\n", escape_text(s))),
        Value::Array(items) => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                render_value(out, item);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        Value::Object(map) => {
            out.push_str("<dl>\n");
            for (key, value) in map {
                out.push_str(&format!("<dt>{}</dt>\n<dd>", escape_text(key)));
                render_value(out, value);
                out.push_str("</dd>\n");
            }
            out.push_str("</dl>\n");
        }
    }
}

/// Escape a text node for embedding in markup.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_title_and_template() {
        let Html(body) = render("author_list", json!({ "title": "Author List" }));
        assert!(body.contains("<title>Author List</title>"));
        assert!(body.contains("<h1>Author List</h1>"));
        assert!(body.contains("template-author_list"));
    }

    #[test]
    fn test_render_errors_listed() {
        let Html(body) = render(
            "genre_form",
            json!({
                "title": "Create Genre",
                "errors": [
                    { "field": "name", "message": "Genre name must contain at least 3 characters" },
                ],
            }),
        );
        assert!(body.contains("class=\"errors\""));
        assert!(body.contains("Genre name must contain at least 3 characters"));
        assert!(body.contains("data-field=\"name\""));
    }

    #[test]
    fn test_render_escapes_text_nodes() {
        let Html(body) = render("error", json!({ "title": "<script>" }));
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_sections_for_named_keys() {
        let Html(body) = render(
            "genre_detail",
            json!({
                "title": "Genre Detail",
                "genre": { "name": "Fantasy" },
                "genre_books": [ { "title": "The Hobbit" } ],
            }),
        );
        assert!(body.contains("<section id=\"genre\">"));
        assert!(body.contains("<section id=\"genre_books\">"));
        assert!(body.contains("Fantasy"));
        assert!(body.contains("The Hobbit"));
    }
}
