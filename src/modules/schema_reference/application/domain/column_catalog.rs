//! The portal's data dictionary: every raw column and what it holds.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDescription {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetOverview {
    pub title: &'static str,
    pub introduction: &'static str,
    pub capabilities: &'static [&'static str],
    pub focus: &'static str,
}

/// Overview text plus the column dictionary, in portal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCatalog {
    pub overview: &'static DatasetOverview,
    pub columns: &'static [ColumnDescription],
}

impl ColumnCatalog {
    pub fn portal() -> Self {
        Self {
            overview: &DATASET_OVERVIEW,
            columns: &COLUMN_DESCRIPTIONS,
        }
    }
}

pub const DATASET_OVERVIEW: DatasetOverview = DatasetOverview {
    title: "Sewayojan Portal - Jobseeker Data Overview",
    introduction: "This dataset provides detailed information from the Jobseeker's side of the \
Sewayojan portal, an online employment platform launched by the Government of India.",
    capabilities: &[
        "Register and manage their profiles",
        "Search and apply for employment opportunities",
        "Track verification and submission statuses",
        "Monitor login attempts and account activity",
    ],
    focus: "This analysis focuses on understanding user registration behavior, login patterns, \
and other relevant indicators from the jobseeker perspective.",
};

pub const COLUMN_DESCRIPTIONS: [ColumnDescription; 43] = [
    ColumnDescription {
        name: "js_unique_id",
        description: "Unique identifier for each job seeker (JS).",
    },
    ColumnDescription {
        name: "request_date",
        description: "Date when the JS made the registration or request.",
    },
    ColumnDescription {
        name: "daily_serial_no",
        description: "Serial number assigned per day for tracking new entries.",
    },
    ColumnDescription {
        name: "eng_name_of_js",
        description: "Full name of the job seeker (in English).",
    },
    ColumnDescription {
        name: "phone_no_js",
        description: "Phone number of the job seeker.",
    },
    ColumnDescription {
        name: "js_email",
        description: "Email ID of the job seeker.",
    },
    ColumnDescription {
        name: "js_request_ip_address",
        description: "IP address from which the registration/request was made.",
    },
    ColumnDescription {
        name: "generated_1st_pwd",
        description: "System-generated initial password.",
    },
    ColumnDescription {
        name: "pwd_sent_mode",
        description: "Mode through which password was sent (SMS, email, etc.).",
    },
    ColumnDescription {
        name: "pwd_sent_date",
        description: "Date when the password was sent to the JS.",
    },
    ColumnDescription {
        name: "js_first_log_date",
        description: "Date when the JS logged in for the first time.",
    },
    ColumnDescription {
        name: "current_pwd",
        description: "Current active password for the JS (likely hashed/encrypted).",
    },
    ColumnDescription {
        name: "js_browser",
        description: "Browser name used by the JS (e.g., Chrome, Firefox).",
    },
    ColumnDescription {
        name: "js_browser_ver",
        description: "Version of the browser used.",
    },
    ColumnDescription {
        name: "csc_request_key",
        description: "Unique key associated with Common Service Center (if used).",
    },
    ColumnDescription {
        name: "csc_user_typ",
        description: "User type from CSC – operator, kiosk, etc.",
    },
    ColumnDescription {
        name: "question_id",
        description: "Security question ID selected during registration.",
    },
    ColumnDescription {
        name: "security_answer",
        description: "Answer provided for the security question.",
    },
    ColumnDescription {
        name: "prf_submitted",
        description: "Whether the profile has been submitted (Yes/No or flag).",
    },
    ColumnDescription {
        name: "aft_satyapan_login_dt",
        description: "Login date after identity verification (satyapan).",
    },
    ColumnDescription {
        name: "satyapan_done",
        description: "Flag indicating if verification (satyapan) is complete.",
    },
    ColumnDescription {
        name: "final_submittion_date",
        description: "Date when the final profile/form was submitted.",
    },
    ColumnDescription {
        name: "sw_unique_id",
        description: "Unique ID for the social worker (if any).",
    },
    ColumnDescription {
        name: "sw_unique_id_create_date",
        description: "Date when the SW ID was created.",
    },
    ColumnDescription {
        name: "LastloginDate",
        description: "Most recent login date of the JS.",
    },
    ColumnDescription {
        name: "LoginAttempts",
        description: "Number of login attempts made.",
    },
    ColumnDescription {
        name: "lock",
        description: "Whether the account is locked (due to failed attempts, etc.).",
    },
    ColumnDescription {
        name: "username",
        description: "Username used by the JS to log in.",
    },
    ColumnDescription {
        name: "old_reg_YN",
        description: "Indicates if this is an old (previously registered) user.",
    },
    ColumnDescription {
        name: "ArogyaSetu",
        description: "Indicates if Arogya Setu app status was checked (COVID-era).",
    },
    ColumnDescription {
        name: "userActiveDeactive",
        description: "Whether the user account is currently active or deactivated.",
    },
    ColumnDescription {
        name: "userActiveDeactiveToken",
        description: "Token or reason related to account activation/deactivation.",
    },
    ColumnDescription {
        name: "Is_Archival",
        description: "Whether the record has been archived.",
    },
    ColumnDescription {
        name: "usernameEdistrict",
        description: "Alternate username or identifier from an eDistrict platform.",
    },
    ColumnDescription {
        name: "AadharFlag",
        description: "Flag showing whether Aadhaar was provided.",
    },
    ColumnDescription {
        name: "Dob",
        description: "Date of birth of the job seeker.",
    },
    ColumnDescription {
        name: "gender",
        description: "Gender of the JS.",
    },
    ColumnDescription {
        name: "Aadhar_verify_dt",
        description: "Date on which Aadhaar was verified.",
    },
    ColumnDescription {
        name: "CheckFlag",
        description: "Likely used for internal validation or admin check purposes.",
    },
    ColumnDescription {
        name: "userreg",
        description: "Flag indicating successful user registration.",
    },
    ColumnDescription {
        name: "insertdate",
        description: "Date when the user’s data was inserted into the system.",
    },
    ColumnDescription {
        name: "NewPassword",
        description: "Recently created or updated password (likely hashed).",
    },
    ColumnDescription {
        name: "NewPassFlag",
        description: "Flag indicating if a new password was set.",
    },
];
