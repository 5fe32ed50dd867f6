use actix_web::{http::StatusCode, HttpResponse};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLESHEET: &str = r#"
body { font-family: "Source Sans Pro", Helvetica, Arial, sans-serif; margin: 0; color: #31333f; }
nav { background: #f0f2f6; padding: 0.75rem 2rem; }
nav a { margin-right: 1.5rem; color: #31333f; text-decoration: none; }
nav a.active { font-weight: 700; border-bottom: 2px solid #ff4b4b; }
main { max-width: 900px; margin: 0 auto; padding: 1.5rem 2rem 4rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #e6e9ef; padding: 0.4rem 0.6rem; text-align: left; vertical-align: top; }
th { background: #f8f9fb; }
section.block { margin-top: 2.5rem; }
.notice { padding: 0.75rem 1rem; border-radius: 0.4rem; margin: 0.75rem 0; }
.notice.warning { background: #fffce7; color: #926c05; }
.notice.error { background: #ffecec; color: #7d353b; }
.summary { margin-top: 0.5rem; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    About,
    Insights,
}

impl NavItem {
    fn href(&self) -> &'static str {
        match self {
            NavItem::About => "/",
            NavItem::Insights => "/insights",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NavItem::About => "About the Dataset",
            NavItem::Insights => "Insights",
        }
    }
}

/// Wraps a page body in the shared document shell (navigation, styles, plotly.js).
pub fn render_page(title: &str, active: NavItem, body: &str) -> String {
    let nav = [NavItem::About, NavItem::Insights]
        .iter()
        .map(|item| {
            let class = if *item == active { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"{}\"{}>{}</a>",
                item.href(),
                class,
                escape_html(item.label())
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLESHEET}</style>\n\
         <script src=\"{PLOTLY_CDN}\"></script>\n</head>\n<body>\n\
         <nav>{nav}</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Makes serialized JSON safe to inline inside a `<script>` element.
pub fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

pub fn html_response(status: StatusCode, document: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(document)
}
