mod page;

pub use page::{escape_html, html_response, render_page, script_json, NavItem};
