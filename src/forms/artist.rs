use validator::Validate;

use super::{field, genres_field, state_field, FieldKind, FormData, FormErrors, FormSchema};
use crate::models::NewArtist;

pub fn schema() -> FormSchema {
    FormSchema {
        fields: vec![
            field("name", FieldKind::Text, true),
            field("city", FieldKind::Text, true),
            state_field(),
            field("phone", FieldKind::Tel, false),
            genres_field(),
            field("facebook_link", FieldKind::Url, false),
            field("image_link", FieldKind::Url, false),
            field("website_link", FieldKind::Url, false),
            field("seeking_venue", FieldKind::Checkbox, false),
            field("seeking_description", FieldKind::Textarea, false),
        ],
    }
}

pub fn validate(form: &FormData) -> Result<NewArtist, FormErrors> {
    let artist = NewArtist {
        name: form.text("name"),
        city: form.text("city"),
        state: form.state("state"),
        phone: form.optional("phone"),
        genres: form.genres("genres"),
        facebook_link: form.optional("facebook_link"),
        image_link: form.optional("image_link"),
        website_link: form.optional("website_link"),
        seeking_venue: form.checkbox("seeking_venue"),
        seeking_description: form.optional("seeking_description"),
    };
    artist
        .validate()
        .map_err(|errors| FormErrors::from_validation(&errors, &schema()))?;
    Ok(artist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        FormData::from(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_valid_artist() {
        let artist = validate(&form(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
            ("seeking_venue", "y"),
        ]))
        .unwrap();

        assert_eq!(artist.genres, "Rock n Roll");
        assert!(artist.seeking_venue);
        assert_eq!(artist.phone, None);
    }

    #[test]
    fn test_unchecked_box_is_false() {
        let artist = validate(&form(&[
            ("name", "Matt Quevedo"),
            ("city", "New York"),
            ("state", "NY"),
            ("genres", "Jazz"),
            ("seeking_venue", "n"),
        ]))
        .unwrap();
        assert!(!artist.seeking_venue);
    }

    #[test]
    fn test_invalid_state() {
        let errors = validate(&form(&[
            ("name", "Matt Quevedo"),
            ("city", "New York"),
            ("state", "New York"),
            ("genres", "Jazz"),
        ]))
        .unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["state"]);
    }
}
