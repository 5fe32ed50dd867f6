use chrono::NaiveDateTime;

use crate::insights::application::domain::{
    blocks::build_blocks, preprocessing::REMOVED_COLUMNS, report::InsightsReport,
};
use crate::jobseeker::application::domain::entities::{columns, JobseekerRecord, JobseekerTable};

pub const ALL_COLUMNS: [&str; 7] = [
    columns::UNIQUE_ID,
    columns::INSERT_DATE,
    columns::FIRST_LOGIN_DATE,
    columns::LOGIN_ATTEMPTS,
    columns::IS_VERIFIED,
    columns::BROWSER_NAME,
    columns::BROWSER_VERSION,
];

fn timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()
}

fn jobseeker(
    id: &str,
    inserted: &str,
    first_login: &str,
    attempts: f64,
    verified_flag: f64,
    browser: &str,
    version: &str,
) -> JobseekerRecord {
    JobseekerRecord {
        unique_id: Some(id.to_string()),
        insert_date: timestamp(inserted),
        first_login_date: timestamp(first_login),
        login_attempts: Some(attempts),
        is_verified: Some(verified_flag),
        browser_name: Some(browser.to_string()),
        browser_version: Some(version.to_string()),
    }
}

/// Three registrants: two logged in (after 2 and 0 days), one never did.
pub fn sample_records() -> Vec<JobseekerRecord> {
    vec![
        jobseeker("JS1", "2016-01-05 09:00:00", "2016-01-07 10:00:00", 2.0, 0.0, "Chrome", "47.0"),
        jobseeker("JS2", "2016-01-05 11:30:00", "", 1.0, 1.0, "Firefox", "43.0"),
        jobseeker("JS3", "2016-01-06 08:00:00", "2016-01-06 08:15:00", 1.0, 0.0, "Chrome", "47.0"),
    ]
}

pub fn sample_table() -> JobseekerTable {
    JobseekerTable::new(
        ALL_COLUMNS.iter().map(|c| c.to_string()).collect(),
        sample_records(),
    )
}

pub fn sample_report() -> InsightsReport {
    report_for(&sample_table())
}

/// Same rows, but the CSV header lacks `column`.
pub fn report_without_column(column: &str) -> InsightsReport {
    let table = JobseekerTable::new(
        ALL_COLUMNS
            .iter()
            .filter(|c| **c != column)
            .map(|c| c.to_string())
            .collect(),
        sample_records(),
    );
    report_for(&table)
}

fn report_for(table: &JobseekerTable) -> InsightsReport {
    InsightsReport {
        row_count: table.len(),
        removed_columns: &REMOVED_COLUMNS,
        blocks: build_blocks(table),
    }
}
