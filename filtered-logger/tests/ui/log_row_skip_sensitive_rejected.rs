use filtered_logger::LogRow;

#[derive(LogRow)]
struct Login {
    #[log_row(skip, sensitive)]
    password: String,
}

fn main() {}
