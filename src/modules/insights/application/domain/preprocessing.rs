/// A group of raw columns left out of the analysis, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedColumns {
    pub columns: &'static [&'static str],
    pub reason: &'static str,
}

pub const REMOVED_COLUMNS_TITLE: &str = "Final Summary of Removed Columns – Data Preprocessing";

pub const REMOVED_COLUMNS_INTRO: &str = "This table highlights the final set of columns removed \
from the dataset after thorough preprocessing. These columns were excluded due to reasons like \
high null values, sensitive content, incorrect formatting, or lack of analytical relevance.";

pub const REMOVED_COLUMNS: [RemovedColumns; 8] = [
    RemovedColumns {
        columns: &["usernameEdistrict"],
        reason: "100% null",
    },
    RemovedColumns {
        columns: &[
            "Is_Archival",
            "ArogyaSetu",
            "satyapan_done",
            "CheckFlag",
            "AadharFlag",
            "old_reg_YN",
            "lock",
        ],
        reason: "Single value only",
    },
    RemovedColumns {
        columns: &[
            "NewPassword",
            "NewPassFlag",
            "userActiveDeactiveToken",
            "generated_1st_pwd",
            "current_pwd",
        ],
        reason: "Sensitive or hashed passwords",
    },
    RemovedColumns {
        columns: &["aft_satyapan_login_dt", "sw_unique_id_create_date"],
        reason: "Data in wrong format; expected date but is time",
    },
    RemovedColumns {
        columns: &[
            "Dob",
            "gender",
            "Aadhar_verify_dt",
            "csc_request_key",
            "csc_user_type",
        ],
        reason: "More than 93,000 rows are missing",
    },
    RemovedColumns {
        columns: &["daily_serial_no"],
        reason: "Likely sequential and not useful",
    },
    RemovedColumns {
        columns: &["username", "sw_unique_id"],
        reason: "Not sure what it shows",
    },
    RemovedColumns {
        columns: &["question_id", "security_answer", "userActiveDeactive"],
        reason: "Not relevant unless you're analyzing security patterns",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn removed_column_groups_do_not_overlap() {
        let mut seen = HashSet::new();
        for group in REMOVED_COLUMNS.iter() {
            assert!(!group.columns.is_empty());
            for column in group.columns {
                assert!(seen.insert(*column), "{column} listed twice");
            }
        }
        assert_eq!(seen.len(), 26);
    }
}
