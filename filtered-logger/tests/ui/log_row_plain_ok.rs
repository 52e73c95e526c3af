use filtered_logger::LogRow;

#[derive(LogRow)]
struct Login {
    #[log_row(sensitive)]
    user: String,
    ip: std::net::IpAddr,
    attempts: u8,
}

fn main() {
    let login = Login {
        user: "ann".into(),
        ip: std::net::IpAddr::from([10, 0, 0, 1]),
        attempts: 3,
    };
    assert_eq!(login.log_message(), "user=ann; ip=10.0.0.1; attempts=3;");
    assert_eq!(Login::SENSITIVE_COLUMNS, ["user"]);
}
