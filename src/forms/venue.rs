use validator::Validate;

use super::{field, genres_field, state_field, FieldKind, FormData, FormErrors, FormSchema};
use crate::models::NewVenue;

pub fn schema() -> FormSchema {
    FormSchema {
        fields: vec![
            field("name", FieldKind::Text, true),
            field("city", FieldKind::Text, true),
            state_field(),
            field("address", FieldKind::Text, true),
            field("phone", FieldKind::Tel, false),
            genres_field(),
            field("facebook_link", FieldKind::Url, false),
            field("image_link", FieldKind::Url, false),
            field("website_link", FieldKind::Url, false),
            field("seeking_talent", FieldKind::Checkbox, false),
            field("seeking_description", FieldKind::Textarea, false),
        ],
    }
}

pub fn validate(form: &FormData) -> Result<NewVenue, FormErrors> {
    let venue = NewVenue {
        name: form.text("name"),
        city: form.text("city"),
        state: form.state("state"),
        address: form.text("address"),
        phone: form.optional("phone"),
        genres: form.genres("genres"),
        facebook_link: form.optional("facebook_link"),
        image_link: form.optional("image_link"),
        website_link: form.optional("website_link"),
        seeking_talent: form.checkbox("seeking_talent"),
        seeking_description: form.optional("seeking_description"),
    };
    venue
        .validate()
        .map_err(|errors| FormErrors::from_validation(&errors, &schema()))?;
    Ok(venue)
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
    fn test_valid_venue() {
        let venue = validate(&form(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "ca"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("image_link", ""),
            ("website_link", "https://www.themusicalhop.com"),
            ("seeking_talent", "y"),
            ("seeking_description", "We are on the lookout for a local artist."),
        ]))
        .unwrap();

        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.state, "CA");
        assert_eq!(venue.genres, "Jazz,Reggae");
        assert_eq!(venue.image_link, None);
        assert!(venue.seeking_talent);
        assert_eq!(
            venue.seeking_description.as_deref(),
            Some("We are on the lookout for a local artist.")
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = validate(&form(&[("name", "Nowhere")])).unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["city", "state", "address", "genres"]);
    }

    #[test]
    fn test_bad_links_are_reported() {
        let errors = validate(&form(&[
            ("name", "Hop"),
            ("city", "SF"),
            ("state", "CA"),
            ("address", "1 Main"),
            ("genres", "Jazz"),
            ("facebook_link", "facebook.com/hop"),
            ("phone", "twelve"),
        ]))
        .unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["phone", "facebook_link"]);
    }

    #[test]
    fn test_schema_lists_every_column() {
        let names: Vec<&str> = schema().fields.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"seeking_talent"));
        assert!(names.contains(&"address"));
    }
}
