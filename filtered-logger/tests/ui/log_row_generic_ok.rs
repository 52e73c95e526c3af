use std::marker::PhantomData;

use filtered_logger::LogRow;

// Neither `Display` nor `Debug`.
struct Celsius;

#[derive(LogRow)]
struct Measurement<V, U> {
    #[log_row(sensitive)]
    value: V,
    label: &'static str,
    #[log_row(skip)]
    #[allow(dead_code)]
    unit: PhantomData<U>,
}

fn main() {
    let reading = Measurement::<f64, Celsius> {
        value: 21.5,
        label: "room",
        unit: PhantomData,
    };
    assert_eq!(reading.log_message(), "value=21.5; label=room;");
}
