use chrono::NaiveDateTime;

pub fn date_time_label(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn date_label(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn upload_url(filename: &str) -> String {
    format!("/uploads/{}", filename)
}

/// Empty or whitespace-only optional text collapses to `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn labels_use_minute_precision() {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 59)
            .unwrap();
        assert_eq!(date_time_label(&dt), "2024-05-01 10:30");
        assert_eq!(date_label(&dt), "2024-05-01");
    }

    #[test]
    fn blank_text_is_dropped() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(" hi ".to_string())), Some("hi".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
