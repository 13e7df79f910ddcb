//! Wall clock for status projection (abandoned-job detection, runtimes).

use records::Timestamp;

pub fn now() -> Timestamp {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i64;
        Timestamp::from_unix_millis(millis).unwrap_or(Timestamp::UNIX_EPOCH)
    }
    #[cfg(not(feature = "csr"))]
    {
        Timestamp::now()
    }
}
