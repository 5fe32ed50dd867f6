use crate::schema_reference::application::domain::column_catalog::ColumnCatalog;
use crate::shared::web::escape_html;

pub fn render_about(catalog: &ColumnCatalog) -> String {
    let overview = catalog.overview;

    let capabilities: String = overview
        .capabilities
        .iter()
        .map(|item| format!("<li>{}</li>\n", escape_html(item)))
        .collect();

    let rows: String = catalog
        .columns
        .iter()
        .map(|column| {
            format!(
                "<tr><td><code>{}</code></td><td>{}</td></tr>\n",
                escape_html(column.name),
                escape_html(column.description)
            )
        })
        .collect();

    format!(
        "<h1>{title}</h1>\n<p>{intro}</p>\n<p>The portal allows jobseekers to:</p>\n\
         <ul>\n{capabilities}</ul>\n<p>{focus}</p>\n\
         <h2>Dataset Column Descriptions</h2>\n<table>\n\
         <thead><tr><th>Column Name</th><th>Description</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>\n",
        title = escape_html(overview.title),
        intro = escape_html(overview.introduction),
        focus = escape_html(overview.focus),
    )
}
