//! Pure aggregations over the jobseeker table.
//!
//! Each function reads the table and returns a new value; none of them feeds
//! another. Missing cells are excluded from whatever a function aggregates.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::jobseeker::application::domain::entities::{JobseekerTable, VerificationStatus};

pub const TOP_BROWSER_VERSIONS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedCount {
    pub group: String,
    pub series: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserVersionCount {
    pub browser: String,
    pub version: String,
    pub count: u64,
}

impl BrowserVersionCount {
    pub fn label(&self) -> String {
        format!("{} {}", self.browser, self.version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunnelCounts {
    pub signed_up: u64,
    pub verified: u64,
    pub logged_in: u64,
}

impl FunnelCounts {
    /// Stages in display order, widest bar last.
    pub fn stages(&self) -> [(&'static str, u64); 3] {
        [
            ("Logged In", self.logged_in),
            ("Verified", self.verified),
            ("Signed Up", self.signed_up),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Counts per label, largest first; ties keep label order.
fn ranked_counts<I>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let total: u64 = counts.values().sum();
    let mut ranked: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label,
            count,
            percent: percent_of(count, total),
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

pub fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

pub fn login_breakdown(table: &JobseekerTable) -> Vec<CategoryCount> {
    ranked_counts(
        table
            .records()
            .iter()
            .map(|record| record.login_status().label().to_string()),
    )
}

/// Days from signup to first login for rows with both dates, negatives dropped.
pub fn days_to_login(table: &JobseekerTable) -> Vec<i64> {
    table
        .records()
        .iter()
        .filter_map(|record| record.days_to_login())
        .filter(|days| *days >= 0)
        .collect()
}

pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|v| *v as f64).sum();
    Some(sum / values.len() as f64)
}

pub fn login_attempts(table: &JobseekerTable) -> Vec<f64> {
    table
        .records()
        .iter()
        .filter_map(|record| record.login_attempts)
        .collect()
}

pub fn verification_breakdown(table: &JobseekerTable) -> Vec<CategoryCount> {
    ranked_counts(
        table
            .records()
            .iter()
            .filter_map(|record| record.verification_status())
            .map(|status| status.label().to_string()),
    )
}

/// Row counts per (verification status, login status), ordered by labels.
/// Rows whose flag has no verification category are left out.
pub fn verification_vs_login(table: &JobseekerTable) -> Vec<GroupedCount> {
    let mut counts: BTreeMap<(&'static str, &'static str), u64> = BTreeMap::new();

    for record in table.records() {
        if let Some(status) = record.verification_status() {
            let key = (status.label(), record.login_status().label());
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|((group, series), count)| GroupedCount {
            group: group.to_string(),
            series: series.to_string(),
            count,
        })
        .collect()
}

pub fn browser_counts(table: &JobseekerTable) -> Vec<CategoryCount> {
    ranked_counts(
        table
            .records()
            .iter()
            .filter_map(|record| record.browser_name.clone()),
    )
}

/// The `limit` most frequent (browser, version) pairs, most frequent first.
pub fn top_browser_versions(table: &JobseekerTable, limit: usize) -> Vec<BrowserVersionCount> {
    let mut counts: BTreeMap<(&str, &str), u64> = BTreeMap::new();

    for record in table.records() {
        if let (Some(browser), Some(version)) = (&record.browser_name, &record.browser_version) {
            *counts.entry((browser.as_str(), version.as_str())).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<BrowserVersionCount> = counts
        .into_iter()
        .map(|((browser, version), count)| BrowserVersionCount {
            browser: browser.to_string(),
            version: version.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Stage counts computed independently of each other; a user can count as
/// logged in without counting as verified.
pub fn funnel_counts(table: &JobseekerTable) -> FunnelCounts {
    let records = table.records();

    let signed_up = records.iter().filter(|r| r.insert_date.is_some()).count() as u64;
    let verified = records
        .iter()
        .filter(|r| r.insert_date.is_some())
        .filter(|r| r.verification_status() == Some(VerificationStatus::Verified))
        .count() as u64;
    let logged_in = records
        .iter()
        .filter(|r| r.first_login_date.is_some())
        .count() as u64;

    FunnelCounts {
        signed_up,
        verified,
        logged_in,
    }
}

pub fn daily_registrations(table: &JobseekerTable) -> Vec<DailyCount> {
    let mut per_day: HashMap<NaiveDate, u64> = HashMap::new();

    for inserted in table.records().iter().filter_map(|r| r.insert_date) {
        *per_day.entry(inserted.date()).or_insert(0) += 1;
    }

    let mut series: Vec<DailyCount> = per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect();
    series.sort_by_key(|day| day.date);
    series
}

/// Histogram with at most `bins` bins. Whole-number data gets integer bin
/// widths with edges on half-integers, so every bin holds the same number of
/// distinct values. Other data is split into `bins` equal-width bins. The last
/// bin is closed so the maximum value is counted.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len() as u64,
        }];
    }

    let (origin, width, bin_count) = if values.iter().all(|v| v.fract() == 0.0) {
        let span = max - min + 1.0;
        let width = (span / bins as f64).ceil();
        (min - 0.5, width, (span / width).ceil() as usize)
    } else {
        (min, (max - min) / bins as f64, bins)
    };

    let mut counts = vec![0u64; bin_count];
    for value in values {
        let index = (((value - origin) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: origin + width * i as f64,
            end: origin + width * (i + 1) as f64,
            count,
        })
        .collect()
}
