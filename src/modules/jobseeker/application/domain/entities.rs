use chrono::NaiveDateTime;
use serde::Serialize;

/// Column names of the preprocessed jobseeker CSV read by the dashboard.
pub mod columns {
    pub const UNIQUE_ID: &str = "js_unique_id";
    pub const INSERT_DATE: &str = "clean_insertdate";
    pub const FIRST_LOGIN_DATE: &str = "clean_js_first_log_date";
    pub const LOGIN_ATTEMPTS: &str = "LoginAttempts";
    pub const IS_VERIFIED: &str = "is_verified";
    pub const BROWSER_NAME: &str = "js_browser_name";
    pub const BROWSER_VERSION: &str = "js_browser_version";
}

const SECONDS_PER_DAY: i64 = 86_400;

/// One portal registrant. Every field is optional: a missing or unparsable
/// cell is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobseekerRecord {
    pub unique_id: Option<String>,
    pub insert_date: Option<NaiveDateTime>,
    pub first_login_date: Option<NaiveDateTime>,
    pub login_attempts: Option<f64>,
    pub is_verified: Option<f64>,
    pub browser_name: Option<String>,
    pub browser_version: Option<String>,
}

impl JobseekerRecord {
    pub fn login_status(&self) -> LoginStatus {
        match self.first_login_date {
            Some(_) => LoginStatus::LoggedIn,
            None => LoginStatus::NeverLoggedIn,
        }
    }

    pub fn verification_status(&self) -> Option<VerificationStatus> {
        self.is_verified.and_then(VerificationStatus::from_flag)
    }

    /// Whole days between signup and first login, floored like a timedelta
    /// (a login one hour before signup is day -1). `None` when either date is
    /// missing. Negative values are returned as-is; callers decide to drop them.
    pub fn days_to_login(&self) -> Option<i64> {
        let (inserted, first_login) = (self.insert_date?, self.first_login_date?);
        let elapsed = first_login.signed_duration_since(inserted);
        // num_seconds truncates toward zero; a negative sub-second remainder
        // still belongs to the previous second.
        let seconds = if elapsed.subsec_nanos() < 0 {
            elapsed.num_seconds() - 1
        } else {
            elapsed.num_seconds()
        };
        Some(seconds.div_euclid(SECONDS_PER_DAY))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LoginStatus {
    LoggedIn,
    NeverLoggedIn,
}

impl LoginStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoginStatus::LoggedIn => "Logged In",
            LoginStatus::NeverLoggedIn => "Never Logged In",
        }
    }
}

/// Two-valued remap of the `is_verified` flag.
///
/// The portal export stores `0` for verified users and `1` for unverified
/// ones, so the mapping is inverted relative to the column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum VerificationStatus {
    Verified,
    NotVerified,
}

impl VerificationStatus {
    pub fn from_flag(flag: f64) -> Option<Self> {
        if flag == 0.0 {
            Some(VerificationStatus::Verified)
        } else if flag == 1.0 {
            Some(VerificationStatus::NotVerified)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::NotVerified => "Not Verified",
        }
    }
}

/// The loaded dataset: the CSV header plus one record per data row.
///
/// The header is kept so that a column absent from the file can be told apart
/// from a column whose cells are all empty.
#[derive(Debug, Clone, Default)]
pub struct JobseekerTable {
    columns: Vec<String>,
    records: Vec<JobseekerRecord>,
}

impl JobseekerTable {
    pub fn new(columns: Vec<String>, records: Vec<JobseekerRecord>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[JobseekerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Returns the subset of `required` that is absent from the header, in
    /// the order given.
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn login_status_follows_first_login_presence() {
        let never = JobseekerRecord {
            insert_date: Some(at("2016-01-05", "00:00:00")),
            ..Default::default()
        };
        let logged = JobseekerRecord {
            first_login_date: Some(at("2016-01-07", "00:00:00")),
            ..Default::default()
        };

        assert_eq!(never.login_status(), LoginStatus::NeverLoggedIn);
        assert_eq!(never.login_status().label(), "Never Logged In");
        assert_eq!(logged.login_status(), LoginStatus::LoggedIn);
        assert_eq!(logged.login_status().label(), "Logged In");
    }

    #[test]
    fn days_to_login_counts_whole_days() {
        let record = JobseekerRecord {
            insert_date: Some(at("2016-01-05", "00:00:00")),
            first_login_date: Some(at("2016-01-07", "00:00:00")),
            ..Default::default()
        };

        assert_eq!(record.days_to_login(), Some(2));
    }

    #[test]
    fn days_to_login_floors_partial_days() {
        let later_same_day = JobseekerRecord {
            insert_date: Some(at("2016-01-05", "09:00:00")),
            first_login_date: Some(at("2016-01-06", "08:59:59")),
            ..Default::default()
        };
        let hour_before_signup = JobseekerRecord {
            insert_date: Some(at("2016-01-05", "10:00:00")),
            first_login_date: Some(at("2016-01-05", "09:00:00")),
            ..Default::default()
        };

        assert_eq!(later_same_day.days_to_login(), Some(0));
        assert_eq!(hour_before_signup.days_to_login(), Some(-1));
    }

    #[test]
    fn days_to_login_floors_sub_second_login_before_signup() {
        let record = JobseekerRecord {
            insert_date: NaiveDateTime::parse_from_str(
                "2016-01-05 10:00:00.500",
                "%Y-%m-%d %H:%M:%S%.f",
            )
            .ok(),
            first_login_date: Some(at("2016-01-05", "10:00:00")),
            ..Default::default()
        };
        let half_second_after = JobseekerRecord {
            insert_date: Some(at("2016-01-05", "10:00:00")),
            first_login_date: NaiveDateTime::parse_from_str(
                "2016-01-05 10:00:00.500",
                "%Y-%m-%d %H:%M:%S%.f",
            )
            .ok(),
            ..Default::default()
        };

        assert_eq!(record.days_to_login(), Some(-1));
        assert_eq!(half_second_after.days_to_login(), Some(0));
    }

    #[test]
    fn days_to_login_requires_both_dates() {
        let record = JobseekerRecord {
            insert_date: Some(at("2016-01-05", "00:00:00")),
            ..Default::default()
        };

        assert_eq!(record.days_to_login(), None);
    }

    #[test]
    fn verification_flag_maps_zero_to_verified() {
        assert_eq!(
            VerificationStatus::from_flag(0.0),
            Some(VerificationStatus::Verified)
        );
        assert_eq!(
            VerificationStatus::from_flag(1.0),
            Some(VerificationStatus::NotVerified)
        );
        assert_eq!(VerificationStatus::from_flag(2.0), None);
        assert_eq!(VerificationStatus::Verified.label(), "Verified");
        assert_eq!(VerificationStatus::NotVerified.label(), "Not Verified");
    }

    #[test]
    fn missing_columns_reports_absent_headers_in_order() {
        let table = JobseekerTable::new(
            vec![columns::INSERT_DATE.to_string(), columns::IS_VERIFIED.to_string()],
            vec![],
        );

        assert!(table.has_column(columns::INSERT_DATE));
        assert!(!table.has_column(columns::BROWSER_NAME));
        assert_eq!(
            table.missing_columns(&[
                columns::BROWSER_NAME,
                columns::INSERT_DATE,
                columns::BROWSER_VERSION
            ]),
            vec![columns::BROWSER_NAME, columns::BROWSER_VERSION]
        );
        assert!(table.is_empty());
    }

    #[test]
    fn record_dates_keep_calendar_day() {
        let record = JobseekerRecord {
            insert_date: Some(at("2016-01-05", "23:59:59")),
            ..Default::default()
        };

        assert_eq!(
            record.insert_date.map(|d| d.date()),
            NaiveDate::from_ymd_opt(2016, 1, 5)
        );
    }
}
