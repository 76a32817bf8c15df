use chrono::{DateTime, Utc};

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

/// Convert a UTC instant to the protobuf well-known timestamp.
pub fn to_timestamp(instant: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: instant.timestamp(),
        nanos: instant.timestamp_subsec_nanos() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_keeps_seconds_and_nanos() {
        let instant = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        let ts = to_timestamp(instant);
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 250_000_000);
    }
}
