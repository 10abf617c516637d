use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::domain::scan::ScanResult;

const HEADER: [&str; 8] = [
    "Profile Handle",
    "Profile Name",
    "Profile URL",
    "Post URL",
    "Post Type",
    "Post Date",
    "Comment Text",
    "Comment Timestamp",
];

// "May 28, 2024, 9:15 AM"
const DISPLAY_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
);

pub fn format_date_time(value: OffsetDateTime) -> String {
    value.format(DISPLAY_FORMAT).unwrap_or_else(|_| value.to_string())
}

pub fn escape_csv_value(value: &str) -> String {
    if value.contains(['"', ',', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn export_filename(username: &str) -> String {
    format!("public-instagram-comment-finder-{username}.csv")
}

/// Renders matches as CSV, header row first, rows joined by `\n`.
pub fn results_to_csv(results: &[ScanResult]) -> String {
    let header = HEADER.iter().map(|h| escape_csv_value(h)).collect::<Vec<_>>().join(",");
    let rows = results.iter().map(|r| {
        [
            r.profile_handle.clone(),
            r.profile_display_name.clone(),
            r.profile_url.clone(),
            r.post_url.clone(),
            r.post_type.as_str().to_string(),
            format_date_time(r.posted_at),
            r.comment_text.clone(),
            format_date_time(r.comment_timestamp),
        ]
        .iter()
        .map(|v| escape_csv_value(v))
        .collect::<Vec<_>>()
        .join(",")
    });

    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::PostType;
    use time::macros::datetime;

    #[test]
    fn escapes_quotes_commas_and_newlines() {
        assert_eq!(escape_csv_value("plain"), "plain");
        assert_eq!(escape_csv_value("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_value("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_value("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn dates_use_short_month_and_12h_clock() {
        assert_eq!(format_date_time(datetime!(2024-05-28 09:15 UTC)), "May 28, 2024, 9:15 AM");
        assert_eq!(format_date_time(datetime!(2024-06-02 17:40 UTC)), "Jun 2, 2024, 5:40 PM");
    }

    #[test]
    fn one_row_per_match() {
        let result = ScanResult {
            id: "coastalcafe_coastalcafe_2_0".into(),
            profile_handle: "coastalcafe".into(),
            profile_url: "https://www.instagram.com/coastalcafe/".into(),
            profile_display_name: "Coastal Cafe".into(),
            post_url: "https://www.instagram.com/reel/C9CoastalPourOver/".into(),
            thumbnail_url: String::new(),
            post_type: PostType::Reel,
            posted_at: datetime!(2024-06-02 15:05 UTC),
            comment_text: "Great breakdown on grind size changes!".into(),
            comment_timestamp: datetime!(2024-06-02 17:40 UTC),
        };

        let csv = results_to_csv(&[result]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Profile Handle,Profile Name,"));
        assert_eq!(
            lines[1],
            "coastalcafe,Coastal Cafe,https://www.instagram.com/coastalcafe/,\
https://www.instagram.com/reel/C9CoastalPourOver/,reel,\"Jun 2, 2024, 3:05 PM\",\
Great breakdown on grind size changes!,\"Jun 2, 2024, 5:40 PM\""
        );
    }
}
