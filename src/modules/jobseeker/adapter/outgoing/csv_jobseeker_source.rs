use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::jobseeker::application::domain::entities::{
    columns, JobseekerRecord, JobseekerTable,
};
use crate::jobseeker::application::domain::parsing::{parse_number, parse_text, parse_timestamp};
use crate::jobseeker::application::ports::outgoing::{JobseekerSource, JobseekerSourceError};

#[derive(Debug, Clone)]
pub struct CsvJobseekerSource {
    path: PathBuf,
}

impl CsvJobseekerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobseekerSource for CsvJobseekerSource {
    async fn load(&self) -> Result<JobseekerTable, JobseekerSourceError> {
        let path = self.path.clone();

        let table = tokio::task::spawn_blocking(move || read_table(&path))
            .await
            .map_err(|e| JobseekerSourceError::Unreadable(e.to_string()))??;

        info!(
            path = %self.path.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "Jobseeker dataset loaded"
        );

        let duplicates = duplicate_unique_ids(&table);
        if duplicates > 0 {
            warn!(duplicates, "Dataset contains repeated js_unique_id values");
        }

        Ok(table)
    }
}

/// Header positions of the columns the dashboard reads.
struct ColumnIndex {
    unique_id: Option<usize>,
    insert_date: Option<usize>,
    first_login_date: Option<usize>,
    login_attempts: Option<usize>,
    is_verified: Option<usize>,
    browser_name: Option<usize>,
    browser_version: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Self {
        let position = |name: &str| headers.iter().position(|header| header == name);

        Self {
            unique_id: position(columns::UNIQUE_ID),
            insert_date: position(columns::INSERT_DATE),
            first_login_date: position(columns::FIRST_LOGIN_DATE),
            login_attempts: position(columns::LOGIN_ATTEMPTS),
            is_verified: position(columns::IS_VERIFIED),
            browser_name: position(columns::BROWSER_NAME),
            browser_version: position(columns::BROWSER_VERSION),
        }
    }

    fn record(&self, row: &StringRecord) -> JobseekerRecord {
        // Short rows are padded with missing values.
        let cell = |index: Option<usize>| index.and_then(|i| row.get(i));

        JobseekerRecord {
            unique_id: cell(self.unique_id).and_then(parse_text),
            insert_date: cell(self.insert_date).and_then(parse_timestamp),
            first_login_date: cell(self.first_login_date).and_then(parse_timestamp),
            login_attempts: cell(self.login_attempts).and_then(parse_number),
            is_verified: cell(self.is_verified).and_then(parse_number),
            browser_name: cell(self.browser_name).and_then(parse_text),
            browser_version: cell(self.browser_version).and_then(parse_text),
        }
    }
}

fn read_table(path: &Path) -> Result<JobseekerTable, JobseekerSourceError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => JobseekerSourceError::FileNotFound(path.display().to_string()),
        _ => JobseekerSourceError::Unreadable(format!("{}: {}", path.display(), e)),
    })?;

    parse_table(file)
}

fn parse_table<R: Read>(input: R) -> Result<JobseekerTable, JobseekerSourceError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| JobseekerSourceError::Malformed(format!("Failed to read CSV header: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|header| header.is_empty()) {
        return Err(JobseekerSourceError::Malformed(
            "CSV header is empty".to_string(),
        ));
    }

    let index = ColumnIndex::from_headers(&headers);
    let mut records = Vec::new();

    for (row_number, result) in reader.records().enumerate() {
        let row = result.map_err(|e| {
            JobseekerSourceError::Malformed(format!(
                "Failed to parse CSV row {}: {}",
                row_number + 1,
                e
            ))
        })?;

        if row.len() > headers.len() {
            return Err(JobseekerSourceError::Malformed(format!(
                "Row {} has {} fields, header has {}",
                row_number + 1,
                row.len(),
                headers.len()
            )));
        }

        records.push(index.record(&row));
    }

    Ok(JobseekerTable::new(headers, records))
}

fn duplicate_unique_ids(table: &JobseekerTable) -> usize {
    let mut seen = HashSet::new();
    table
        .records()
        .iter()
        .filter_map(|record| record.unique_id.as_deref())
        .filter(|id| !seen.insert(*id))
        .count()
}
