use filtered_logger::LogRow;

#[derive(LogRow)]
struct Point(u32, u32);

fn main() {}
