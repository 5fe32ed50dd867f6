use serde::Serialize;

use crate::insights::application::domain::charts::ChartSpec;
use crate::insights::application::domain::preprocessing::RemovedColumns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// A visible message shown in place of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn missing_columns(level: NoticeLevel, missing: &[&str]) -> Self {
        let message = match missing {
            [single] => format!("Column '{single}' not found in the dataset."),
            _ => format!(
                "Required columns {} not found in the dataset.",
                missing
                    .iter()
                    .map(|column| format!("'{column}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };
        Self { level, message }
    }
}

/// Output of one analysis block: a chart or a notice, plus static text.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightBlock {
    pub id: &'static str,
    pub title: &'static str,
    pub headline: Option<String>,
    pub chart: Option<ChartSpec>,
    pub notice: Option<Notice>,
    pub summary: Option<&'static str>,
}

impl InsightBlock {
    pub fn new(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            headline: None,
            chart: None,
            notice: None,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: &'static str) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_headline(mut self, headline: String) -> Self {
        self.headline = Some(headline);
        self
    }

    pub fn with_chart(mut self, chart: ChartSpec) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightsReport {
    pub row_count: usize,
    pub removed_columns: &'static [RemovedColumns],
    pub blocks: Vec<InsightBlock>,
}
