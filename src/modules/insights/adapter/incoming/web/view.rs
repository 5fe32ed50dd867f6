use tracing::error;

use crate::insights::application::domain::{
    preprocessing::{RemovedColumns, REMOVED_COLUMNS_INTRO, REMOVED_COLUMNS_TITLE},
    report::{InsightBlock, InsightsReport, Notice, NoticeLevel},
};
use crate::shared::web::{escape_html, script_json};

pub fn render_insights(report: &InsightsReport) -> String {
    let mut body = String::new();

    body.push_str(&render_removed_columns(report.removed_columns));
    for block in &report.blocks {
        body.push_str(&render_block(block));
    }

    body
}

/// Whole-page failure panel shown instead of the blocks.
pub fn render_dataset_error(message: &str) -> String {
    format!(
        "<h2>Insights unavailable</h2>\n<div class=\"notice error\">{}</div>\n",
        escape_html(message)
    )
}

fn render_removed_columns(groups: &[RemovedColumns]) -> String {
    let rows: String = groups
        .iter()
        .map(|group| {
            let columns = group
                .columns
                .iter()
                .map(|c| format!("<code>{}</code>", escape_html(c)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                columns,
                escape_html(group.reason)
            )
        })
        .collect();

    format!(
        "<h2>{}</h2>\n<p>{}</p>\n<table>\n<thead><tr><th>Column</th>\
         <th>Reason to Leave As It Is &amp; Not Use in Analysis</th></tr></thead>\n\
         <tbody>\n{}</tbody>\n</table>\n",
        escape_html(REMOVED_COLUMNS_TITLE),
        escape_html(REMOVED_COLUMNS_INTRO),
        rows
    )
}

fn render_block(block: &InsightBlock) -> String {
    let mut html = format!(
        "<section class=\"block\" id=\"{id}\">\n<h2>{title}</h2>\n",
        id = block.id,
        title = escape_html(block.title)
    );

    if let Some(headline) = &block.headline {
        html.push_str(&format!("<p><strong>{}</strong></p>\n", escape_html(headline)));
    }

    if let Some(notice) = &block.notice {
        html.push_str(&render_notice(notice));
    }

    if let Some(chart) = &block.chart {
        match serde_json::to_string(chart) {
            Ok(figure) => html.push_str(&format!(
                "<div id=\"chart-{id}\"></div>\n<script>(function() {{ const fig = {fig}; \
                 Plotly.newPlot(\"chart-{id}\", fig.data, fig.layout, {{responsive: true}}); }})();</script>\n",
                id = block.id,
                fig = script_json(&figure)
            )),
            Err(e) => {
                error!(block = block.id, error = %e, "Failed to serialize chart");
                html.push_str(&render_notice(&Notice {
                    level: NoticeLevel::Error,
                    message: "Chart could not be rendered.".to_string(),
                }));
            }
        }
    }

    if let Some(summary) = block.summary {
        html.push_str(&format!(
            "<p class=\"summary\"><strong>Summary:</strong><br>{}</p>\n",
            escape_html(summary)
        ));
    }

    html.push_str("</section>\n");
    html
}

fn render_notice(notice: &Notice) -> String {
    format!(
        "<div class=\"notice {}\">{}</div>\n",
        notice.level.as_str(),
        escape_html(&notice.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{report_without_column, sample_report};

    #[test]
    fn render_insights_lists_removed_columns_then_blocks() {
        let html = render_insights(&sample_report());

        let table = html.find("Final Summary of Removed Columns").unwrap();
        let first_block = html.find("id=\"login_behavior\"").unwrap();
        assert!(table < first_block);
        assert!(html.contains("<code>usernameEdistrict</code>"));
        assert_eq!(html.matches("<section class=\"block\"").count(), 9);
        assert_eq!(html.matches("Plotly.newPlot").count(), 9);
        assert!(html.contains("Average time to login: 1.00 days"));
    }

    #[test]
    fn render_insights_shows_notice_in_place_of_chart() {
        let html = render_insights(&report_without_column("js_browser_name"));

        assert!(html.contains(
            "<div class=\"notice warning\">Column &#39;js_browser_name&#39; not found in the dataset.</div>"
        ));
        assert!(!html.contains("id=\"chart-browsers\""));
        assert!(html.contains("Most of the jobseekers use Chrome browser"));
    }

    #[test]
    fn render_notice_uses_level_class() {
        let html = render_notice(&Notice {
            level: NoticeLevel::Error,
            message: "<boom>".to_string(),
        });

        assert_eq!(html, "<div class=\"notice error\">&lt;boom&gt;</div>\n");
    }

    #[test]
    fn render_dataset_error_escapes_message() {
        let html = render_dataset_error("Dataset file not found: <data>.csv");

        assert!(html.contains("notice error"));
        assert!(html.contains("&lt;data&gt;.csv"));
    }
}
