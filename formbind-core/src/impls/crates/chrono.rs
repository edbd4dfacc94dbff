use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::{BoxError, Form, Shape, TextDecodable};

impl TextDecodable for DateTime<FixedOffset> {
    fn decode_text(&mut self, text: &str) -> Result<(), BoxError> {
        *self = DateTime::parse_from_rfc3339(text)?;
        Ok(())
    }
}

impl TextDecodable for DateTime<Utc> {
    fn decode_text(&mut self, text: &str) -> Result<(), BoxError> {
        *self = DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc);
        Ok(())
    }
}

crate::text_decodable_via_from_str!(NaiveDate, NaiveDateTime);

impl Form for DateTime<FixedOffset> {
    const SHAPE: &'static Shape = &const {
        text_shape!(DateTime<FixedOffset>, "DateTime<FixedOffset>").zeroed::<DateTime<FixedOffset>>()
    };
}

impl Form for DateTime<Utc> {
    const SHAPE: &'static Shape =
        &const { text_shape!(DateTime<Utc>, "DateTime<Utc>").zeroed::<DateTime<Utc>>() };
}

impl Form for NaiveDate {
    const SHAPE: &'static Shape = &const { text_shape!(NaiveDate, "NaiveDate").zeroed::<NaiveDate>() };
}

impl Form for NaiveDateTime {
    const SHAPE: &'static Shape =
        &const { text_shape!(NaiveDateTime, "NaiveDateTime").zeroed::<NaiveDateTime>() };
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::TextDecodable;

    #[test]
    fn rfc3339_is_normalized_to_utc() {
        formbind_testhelpers::setup();

        let mut value = DateTime::<Utc>::default();
        value.decode_text("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(value, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());

        assert!(value.decode_text("March 1st").is_err());
    }
}
