use filtered_logger::LogRow;

#[derive(LogRow)]
enum Event {
    Login { user: String },
}

fn main() {}
