use validator::Validate;

use super::{field, FieldError, FieldKind, FormData, FormErrors, FormSchema};
use crate::filters::parse_datetime;
use crate::models::NewShow;

pub fn schema() -> FormSchema {
    FormSchema {
        fields: vec![
            field("artist_id", FieldKind::Integer, true),
            field("venue_id", FieldKind::Integer, true),
            field("start_time", FieldKind::Datetime, true),
        ],
    }
}

pub fn validate(form: &FormData) -> Result<NewShow, FormErrors> {
    let raw_start = form.get("start_time");
    let start_time = raw_start.and_then(parse_datetime);

    let show = NewShow {
        artist_id: form.id("artist_id"),
        venue_id: form.id("venue_id"),
        start_time: start_time.unwrap_or_default(),
    };

    let mut errors = match show.validate() {
        Ok(()) => FormErrors::default(),
        Err(errors) => FormErrors::from_validation(&errors, &schema()),
    };
    // start_time is the last field in the form
    if start_time.is_none() {
        let message = match raw_start {
            None => "This field is required.",
            Some(_) => "Not a valid datetime value.",
        };
        errors.push(FieldError::new("start_time", message));
    }

    if errors.is_empty() {
        Ok(show)
    } else {
        Err(errors)
    }
}
