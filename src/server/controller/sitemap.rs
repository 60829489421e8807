//! The HTML index served at `/`.
//!
//! Built once at startup from the OpenAPI document, so it always lists exactly the
//! routes the router registered.

use utoipa::openapi::{path::Operation, OpenApi};

/// Renders an HTML page listing every documented path and method.
///
/// Paths without parameters are rendered as links.
pub fn render(api: &OpenApi) -> String {
    let mut rows = String::new();

    for (path, item) in api.paths.paths.iter() {
        let methods: [(&str, &Option<Operation>); 5] = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in methods {
            let Some(operation) = operation else {
                continue;
            };

            let target = if path.contains('{') {
                format!("<code>{}</code>", escape(path))
            } else {
                format!("<a href=\"{0}\">{0}</a>", escape(path))
            };
            let summary = operation.summary.as_deref().unwrap_or_default();

            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                method,
                target,
                escape(summary)
            ));
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n\
         <h1>{title}</h1>\n<p>Interactive documentation: <a href=\"/docs\">/docs</a></p>\n\
         <table>\n<tr><th>Method</th><th>Path</th><th>Description</th></tr>\n{rows}</table>\n\
         </body>\n</html>\n",
        title = escape(&api.info.title),
        rows = rows
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
