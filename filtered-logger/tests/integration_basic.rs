//! End-to-end tests for the public redaction API.
//!
//! These tests exercise:
//! - `filter_datum` on raw messages,
//! - `RedactingFormatter` on rendered log lines, and
//! - `RedactingLogger` writing to an in-memory sink.

use chrono::{TimeZone, Utc};
use filtered_logger::{
    DatumFilter, Error, FieldSet, FormatterConfig, Level, LogEvent, PII_FIELDS, REDACTION,
    RedactingFormatter, RedactingLogger, SEPARATOR, filter_datum, user_data_logger,
};

fn redact(fields: &[&str], message: &str) -> String {
    filter_datum(fields, REDACTION, message, SEPARATOR).unwrap()
}

fn new_year(name: &str, message: &str) -> LogEvent<'static> {
    LogEvent::new(name.to_string(), Level::Info, message.to_string())
        .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

mod filter {
    use super::*;

    #[test]
    fn redacts_every_configured_field() {
        assert_eq!(
            redact(&["name", "email"], "name=John;email=a@b.com;"),
            "name=***;email=***;"
        );
    }

    #[test]
    fn leaves_unconfigured_fields() {
        assert_eq!(redact(&["name"], "phone=555;"), "phone=555;");
        assert_eq!(
            redact(&["name"], "no key value pairs here"),
            "no key value pairs here"
        );
    }

    #[test]
    fn empty_value_is_replaced() {
        assert_eq!(redact(&["password"], "password=;"), "password=***;");
    }

    #[test]
    fn last_value_runs_to_end_of_message() {
        assert_eq!(
            redact(&["ssn"], "ip=10.0.0.1;ssn=123-45-6789"),
            "ip=10.0.0.1;ssn=***"
        );
    }

    #[test]
    fn key_without_equals_is_not_matched() {
        assert_eq!(
            redact(&["email"], "email;email =x;"),
            "email;email =x;"
        );
    }

    #[test]
    fn redaction_is_idempotent() {
        let message = "name=egg;email=eggmin@eggsample.com;password=eggcellent;date_of_birth=12/12/1986;";
        let once = redact(&PII_FIELDS, message);
        assert_eq!(redact(&PII_FIELDS, &once), once);
    }

    #[test]
    fn custom_token_and_separator() {
        let redacted = filter_datum(&["token"], "[hidden]", "user=ann|token=abc|x=1", "|").unwrap();
        assert_eq!(redacted, "user=ann|token=[hidden]|x=1");
    }

    #[test]
    fn compiled_filter_is_shared_across_threads() {
        let filter = DatumFilter::new(&FieldSet::pii(), REDACTION, SEPARATOR).unwrap();
        std::thread::scope(|scope| {
            for i in 0..4 {
                let filter = &filter;
                scope.spawn(move || {
                    let message = format!("id={i};ssn=00{i};");
                    assert_eq!(filter.apply(&message), format!("id={i};ssn=***;"));
                });
            }
        });
    }
}

mod formatter {
    use super::*;

    #[test]
    fn formats_then_redacts_the_whole_line() {
        let formatter = RedactingFormatter::new(["name", "email"]).unwrap();
        assert_eq!(
            formatter.format(&new_year("user_data", "name=John;email=j@x.com;")),
            "[APP] user_data INFO 2024-01-01T00:00:00: name=***;email=***;"
        );
    }

    #[test]
    fn configured_layout() {
        let config = FormatterConfig::new(FieldSet::new(["password"]))
            .with_tag("AUDIT")
            .with_template("{level:<8}|{tag}|{asctime}|{message}")
            .with_timestamp_format("%H:%M")
            .with_redaction("<redacted>");
        let formatter = RedactingFormatter::from_config(&config).unwrap();
        assert_eq!(
            formatter.format(&new_year("ignored", "user=bob;password=pw;")),
            "INFO    |AUDIT|00:00|user=bob;password=<redacted>;"
        );
    }

    #[test]
    fn invalid_template_is_rejected() {
        let config = FormatterConfig::default().with_template("{who}: {message}");
        assert!(matches!(
            RedactingFormatter::from_config(&config),
            Err(Error::Template { .. })
        ));
    }
}

mod logger {
    use super::*;

    #[test]
    fn user_data_logger_writes_redacted_lines() {
        let logger = user_data_logger(Vec::new()).unwrap();
        logger
            .info("name=Bob; email=bob@dylan.com; ip=192.168.1.1;")
            .unwrap();
        logger.debug("ssn=000-00-0000;").unwrap();

        let out = String::from_utf8(logger.into_sink()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[APP] user_data INFO "));
        assert!(lines[0].ends_with(": name=***; email=***; ip=192.168.1.1;"));
    }

    #[test]
    fn custom_threshold_and_fields() {
        let formatter = RedactingFormatter::new(["token"]).unwrap();
        let logger = RedactingLogger::new("api", Level::Warning, formatter, Vec::new());

        logger.info("token=abc;").unwrap();
        logger.critical("token=abc; name=visible;").unwrap();

        let out = String::from_utf8(logger.into_sink()).unwrap();
        assert!(out.contains(" api CRITICAL "));
        assert!(out.contains("token=***; name=visible;"));
        assert_eq!(out.lines().count(), 1);
    }
}
