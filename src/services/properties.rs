//! Property management service

use chrono::{NaiveDate, Utc};

use crate::{
    config::UploadsConfig,
    error::{AppError, AppResult},
    models::{
        availability::ValidationResult,
        image::{self, ImageUpload, RegisterImage},
        period::season_containing,
        property::{NewProperty, Property, PropertyDetails, PropertyDraft, PropertyQuery, UpdateProperty},
        rate::{format_major_units, nightly_rate, RateQuote},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct PropertiesService {
    repository: Repository,
    uploads: UploadsConfig,
}

impl PropertiesService {
    pub fn new(repository: Repository, uploads: UploadsConfig) -> Self {
        Self { repository, uploads }
    }

    pub async fn list(&self, query: &PropertyQuery) -> AppResult<(Vec<Property>, i64)> {
        self.repository.properties.list(query).await
    }

    /// Property with its type, bookings and display fields
    pub async fn get_details(&self, id: i32) -> AppResult<PropertyDetails> {
        let property = self.repository.properties.get_by_id(id).await?;
        if let Some(ValidationResult::Invalid(v)) = property.validate_availability() {
            tracing::warn!("Property {} has an invalid availability window: {}", id, v.message);
        }
        let property_type = self.repository.property_types.get_by_id(property.type_id).await?;
        let bookings = self.repository.bookings.list_for_property(id).await?;

        Ok(PropertyDetails {
            formatted_price: property.formatted_price(),
            image_url: property
                .image_name
                .as_deref()
                .map(|name| image::image_url(&self.uploads.public_path, name)),
            property,
            property_type,
            bookings,
        })
    }

    /// Validate a draft and store it
    pub async fn create(&self, draft: PropertyDraft) -> AppResult<Property> {
        let new = self.validated(draft)?;
        self.check_references(&new).await?;

        let property = self.repository.properties.create(&new).await?;
        tracing::info!(
            "Property {} created ({} to {})",
            property.id,
            new.availability.start,
            new.availability.end
        );
        Ok(property)
    }

    /// Merge set fields over the stored record, then validate the result
    pub async fn update(&self, id: i32, data: &UpdateProperty) -> AppResult<Property> {
        let current = self.repository.properties.get_by_id(id).await?;
        let mut draft = current.to_draft();
        draft.apply(data);

        let new = self.validated(draft)?;
        self.check_references(&new).await?;
        self.repository.properties.update(id, &new).await
    }

    /// Delete a property together with its bookings
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let removed = self.repository.properties.delete(id).await?;
        tracing::info!("Property {} deleted with {} booking(s)", id, removed);
        Ok(())
    }

    /// Assign a stored file name for a new image; the storage service
    /// writes the bytes under that name.
    pub async fn register_image(&self, id: i32, data: &RegisterImage) -> AppResult<ImageUpload> {
        let mut property = self.repository.properties.get_by_id(id).await?;
        let image_name = image::generate_image_name(&data.original_name);
        property.set_image(image_name.clone(), Utc::now());
        self.repository.properties.save_image(&property).await?;

        tracing::info!("Property {} image set to {}", id, image_name);
        Ok(ImageUpload {
            image_url: image::image_url(&self.uploads.public_path, &image_name),
            image_name,
        })
    }

    /// Nightly rate for a guest composition on a given night
    pub async fn quote(
        &self,
        id: i32,
        adults: u32,
        children: u32,
        date: NaiveDate,
    ) -> AppResult<RateQuote> {
        let property = self.repository.properties.get_by_id(id).await?;
        quote_for(&property, adults, children, date)
    }

    fn validated(&self, draft: PropertyDraft) -> AppResult<NewProperty> {
        draft.into_validated().map_err(|violations| {
            tracing::warn!(
                "Property rejected: {}",
                violations
                    .iter()
                    .map(|v| v.field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            AppError::Violations(violations)
        })
    }

    /// Type and owner must exist before a write
    async fn check_references(&self, new: &NewProperty) -> AppResult<()> {
        self.repository.property_types.get_by_id(new.type_id).await?;
        self.repository.users.get_by_id(new.owner_id).await?;
        Ok(())
    }
}

/// Rate, season and availability of `property` for one night
pub fn quote_for(
    property: &Property,
    adults: u32,
    children: u32,
    date: NaiveDate,
) -> AppResult<RateQuote> {
    let total = nightly_rate(adults, children, &property.rates()).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Nightly rate for {} adult(s) and {} child(ren) is too large",
            adults, children
        ))
    })?;
    Ok(RateQuote {
        adults,
        children,
        nightly_rate: total,
        formatted_rate: format_major_units(total),
        season: season_containing(date),
        available: property
            .availability()
            .map(|window| window.contains(date))
            .unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::period::Season;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn property() -> Property {
        Property {
            id: 1,
            availability_start: Some(date(2024, 6, 1)),
            availability_end: Some(date(2024, 9, 30)),
            created_at: Utc::now(),
            type_id: 1,
            owner_id: 1,
            image_name: None,
            updated_at: None,
            adult_rate: 2500,
            child_rate: 1000,
        }
    }

    #[test]
    fn test_quote_in_high_season() {
        let quote = quote_for(&property(), 2, 2, date(2024, 7, 14)).unwrap();
        assert_eq!(quote.nightly_rate, 7000);
        assert_eq!(quote.formatted_rate, "70");
        assert_eq!(quote.season, Some(Season::High));
        assert!(quote.available);
    }

    #[test]
    fn test_quote_outside_window() {
        let quote = quote_for(&property(), 1, 0, date(2024, 10, 5)).unwrap();
        assert_eq!(quote.season, Some(Season::Open));
        assert!(!quote.available);
    }

    #[test]
    fn test_quote_without_window_is_unavailable() {
        let mut p = property();
        p.availability_end = None;
        assert!(!quote_for(&p, 1, 0, date(2024, 7, 1)).unwrap().available);
    }

    #[test]
    fn test_quote_too_large_is_rejected() {
        let mut p = property();
        p.adult_rate = i32::MAX;
        p.child_rate = i32::MAX;
        let err = quote_for(&p, u32::MAX, u32::MAX, date(2024, 7, 1)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
