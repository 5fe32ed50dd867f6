use std::collections::BTreeSet;

use crate::insights::application::domain::{
    charts::{palette, Axis, ChartSpec, Layout},
    derivations::{self, TOP_BROWSER_VERSIONS},
    report::{InsightBlock, Notice, NoticeLevel},
};
use crate::jobseeker::application::domain::entities::{columns, JobseekerTable};

const DAYS_TO_LOGIN_BINS: usize = 180;
const LOGIN_ATTEMPT_BINS: usize = 30;

//
// ──────────────────────────────────────────────────────────
// Page order
// ──────────────────────────────────────────────────────────
//

/// Runs every analysis block against the same table, in page order.
/// A block whose columns are missing yields a notice; the others still run.
pub fn build_blocks(table: &JobseekerTable) -> Vec<InsightBlock> {
    vec![
        login_behavior(table),
        days_to_login(table),
        login_attempts(table),
        verification_status(table),
        verification_vs_login(table),
        browsers(table),
        browser_versions(table),
        signup_funnel(table),
        daily_registrations(table),
    ]
}

fn require(table: &JobseekerTable, required: &[&str], level: NoticeLevel) -> Option<Notice> {
    let missing = table.missing_columns(required);
    if missing.is_empty() {
        None
    } else {
        Some(Notice::missing_columns(level, &missing))
    }
}

//
// ──────────────────────────────────────────────────────────
// Blocks
// ──────────────────────────────────────────────────────────
//

fn login_behavior(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new(
        "login_behavior",
        "Login Behavior: Users Who Logged In vs Never Logged In",
    )
    .with_summary(
        "Out of all the users who signed up on the platform, 93.8% have logged in at least once, \
         while 6.2% have never logged in.",
    );

    if let Some(notice) = require(table, &[columns::FIRST_LOGIN_DATE], NoticeLevel::Error) {
        return block.with_notice(notice);
    }

    let breakdown = derivations::login_breakdown(table);

    block.with_chart(ChartSpec::donut(&breakdown, &palette::PASTEL, 550, 400))
}

fn days_to_login(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new(
        "days_to_login",
        "Distribution of Time Taken by Users to Log In After Signup",
    )
    .with_summary("Most of the people LogIn within 1-2 days after SignUp");

    if let Some(notice) = require(
        table,
        &[columns::INSERT_DATE, columns::FIRST_LOGIN_DATE],
        NoticeLevel::Error,
    ) {
        return block.with_notice(notice);
    }

    let days = derivations::days_to_login(table);
    let values: Vec<f64> = days.iter().map(|d| *d as f64).collect();
    let bins = derivations::histogram(&values, DAYS_TO_LOGIN_BINS);
    let layout = Layout::sized(Some(700), Some(450)).axes("Days to Login", "Number of Users");

    let block = block.with_chart(ChartSpec::histogram(&bins, "#00bcd4", layout));

    match derivations::mean(&days) {
        Some(average) => block.with_headline(format!("Average time to login: {average:.2} days")),
        None => block,
    }
}

fn login_attempts(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new("login_attempts", "Distribution of Login Attempts per User")
        .with_summary("Only 1-2 Login attempts are made per user");

    if let Some(notice) = require(table, &[columns::LOGIN_ATTEMPTS], NoticeLevel::Error) {
        return block.with_notice(notice);
    }

    let attempts = derivations::login_attempts(table);
    let bins = derivations::histogram(&attempts, LOGIN_ATTEMPT_BINS);
    let layout = Layout {
        xaxis: Some(Axis::titled("Number of Logins").with_range(0.0, 10.0)),
        yaxis: Some(Axis::titled("Number of Users")),
        bargap: Some(0.1),
        ..Layout::default()
    };

    block.with_chart(ChartSpec::histogram(&bins, "#96b6c5", layout))
}

fn verification_status(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new("verification_status", "Jobseeker Verification Status")
        .with_summary("More than 93% of users have verified email_id and phone_no");

    if let Some(notice) = require(table, &[columns::IS_VERIFIED], NoticeLevel::Error) {
        return block.with_notice(notice);
    }

    let breakdown = derivations::verification_breakdown(table);

    block.with_chart(ChartSpec::donut(&breakdown, &palette::SET2, 400, 400))
}

fn verification_vs_login(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new(
        "verification_vs_login",
        "Login Behavior vs Verification Status",
    )
    .with_summary("Verified people are more logged_in than not_verified ones");

    if let Some(notice) = require(
        table,
        &[columns::IS_VERIFIED, columns::FIRST_LOGIN_DATE],
        NoticeLevel::Error,
    ) {
        return block.with_notice(notice);
    }

    let grouped = derivations::verification_vs_login(table);
    let series_names: BTreeSet<&str> = grouped.iter().map(|g| g.series.as_str()).collect();

    let series: Vec<(String, Vec<String>, Vec<u64>)> = series_names
        .into_iter()
        .map(|name| {
            let (groups, counts): (Vec<String>, Vec<u64>) = grouped
                .iter()
                .filter(|g| g.series == name)
                .map(|g| (g.group.clone(), g.count))
                .unzip();
            (name.to_string(), groups, counts)
        })
        .collect();

    let layout = Layout::sized(Some(700), Some(450))
        .axes("Verification Status", "Number of Users")
        .legend_title("Login Behavior");

    block.with_chart(ChartSpec::grouped_bar(series, &palette::SET2, layout))
}

fn browsers(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new("browsers", "Most Commonly Used Browsers by Jobseekers")
        .with_summary(
            "Most of the jobseekers use Chrome browser, followed by Firefox and Edge.",
        );

    if let Some(notice) = require(table, &[columns::BROWSER_NAME], NoticeLevel::Warning) {
        return block.with_notice(notice);
    }

    let (labels, counts): (Vec<String>, Vec<u64>) = derivations::browser_counts(table)
        .into_iter()
        .map(|c| (c.label, c.count))
        .unzip();
    let layout = Layout::sized(None, Some(400)).axes("Browser", "Number of Users");

    block.with_chart(ChartSpec::labelled_bar(labels, counts, &palette::SET2, layout))
}

fn browser_versions(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new("browser_versions", "Top 10 Browser & Version Combinations");

    if let Some(notice) = require(
        table,
        &[columns::BROWSER_NAME, columns::BROWSER_VERSION],
        NoticeLevel::Error,
    ) {
        return block.with_notice(notice);
    }

    let (labels, counts): (Vec<String>, Vec<u64>) = derivations::top_browser_versions(table, TOP_BROWSER_VERSIONS)
        .into_iter()
        .map(|c| (c.label(), c.count))
        .unzip();
    let mut layout = Layout::sized(None, Some(450)).axes("Browser + Version", "Number of Users");
    layout.showlegend = Some(false);

    block.with_chart(ChartSpec::labelled_bar(labels, counts, &palette::VIVID, layout))
}

fn signup_funnel(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new(
        "signup_funnel",
        "User Drop-off Funnel: Signup → Verify → Login",
    )
    .with_summary(
        "Out of 100,000 users who signed up, 93.6% got verified and 93.8% logged in, indicating \
         a highly effective process with minimal drop-off.",
    );

    if let Some(notice) = require(
        table,
        &[
            columns::INSERT_DATE,
            columns::FIRST_LOGIN_DATE,
            columns::IS_VERIFIED,
        ],
        NoticeLevel::Error,
    ) {
        return block.with_notice(notice);
    }

    let funnel = derivations::funnel_counts(table);
    let layout = Layout::sized(None, Some(500)).axes("Number of Users", "Funnel Stage");

    block.with_chart(ChartSpec::funnel(&funnel.stages(), &palette::SET2, layout))
}

fn daily_registrations(table: &JobseekerTable) -> InsightBlock {
    let block = InsightBlock::new("daily_registrations", "Daily User Registrations Over Time")
        .with_summary(
            "There was a significant spike in daily user registrations starting January 2016, \
             with activity peaking above 1,200 registrations per day. Before this, registrations \
             were relatively stable and lower, suggesting a major campaign, launch, or policy \
             change that drove high user engagement in early 2016.",
        );

    if let Some(notice) = require(table, &[columns::INSERT_DATE], NoticeLevel::Error) {
        return block.with_notice(notice);
    }

    let (dates, counts): (Vec<_>, Vec<u64>) = derivations::daily_registrations(table)
        .into_iter()
        .map(|day| (day.date, day.count))
        .unzip();
    let layout = Layout::sized(Some(800), Some(500)).axes("Date", "Number of Registrations");

    block.with_chart(ChartSpec::line_with_markers(dates, counts, layout))
}
