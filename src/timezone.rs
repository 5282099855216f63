//! Conversion from a canonical timezone name to local dates.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Look up the current UTC offset for a canonical timezone name such as
/// "Pacific/Auckland". Returns `None` for unrecognised names.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|timezone| timezone.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in the given timezone.
///
/// # Errors
/// Returns [Error::InvalidTimezone] if the name is not a canonical timezone.
pub fn current_local_date(canonical_timezone: &str) -> Result<Date, Error> {
    let Some(local_offset) = get_local_offset(canonical_timezone) else {
        tracing::error!("Invalid timezone {canonical_timezone}");
        return Err(Error::InvalidTimezone(canonical_timezone.to_owned()));
    };

    Ok(OffsetDateTime::now_utc().to_offset(local_offset).date())
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{current_local_date, get_local_offset};

    #[test]
    fn utc_resolves_to_zero_offset() {
        let offset = get_local_offset("Etc/UTC").unwrap();

        assert!(offset.is_utc());
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert_eq!(get_local_offset("Narnia/Lantern_Waste"), None);
        assert_eq!(
            current_local_date("Narnia/Lantern_Waste"),
            Err(Error::InvalidTimezone("Narnia/Lantern_Waste".to_owned()))
        );
    }
}
