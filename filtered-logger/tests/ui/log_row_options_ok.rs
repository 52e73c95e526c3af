use filtered_logger::LogRow;

#[derive(LogRow)]
#[log_row(debug, separator = "|")]
struct Session {
    #[log_row(rename = "session_id")]
    id: u64,
    #[log_row(sensitive)]
    cookie: Option<String>,
    #[log_row(skip)]
    #[allow(dead_code)]
    internal: Vec<u8>,
    r#type: &'static str,
}

fn main() {
    let session = Session {
        id: 42,
        cookie: None,
        internal: vec![1, 2, 3],
        r#type: "web",
    };
    assert_eq!(Session::SEPARATOR, "|");
    assert_eq!(Session::COLUMNS, ["session_id", "cookie", "type"]);
    assert_eq!(session.log_message(), "session_id=42| cookie=| type=web|");
    assert!(format!("{session:?}").contains(r#"cookie: "***""#));
}
