//! Booking service and property/booking association

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking, PropertyBookings},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Bookings of a property
    pub async fn list_for_property(&self, property_id: i32) -> AppResult<Vec<Booking>> {
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.bookings.list_for_property(property_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// Create a booking on a property
    pub async fn create(&self, property_id: i32, data: &CreateBooking) -> AppResult<Booking> {
        let violations = data.violations();
        if !violations.is_empty() {
            tracing::warn!("Booking rejected for property {}", property_id);
            return Err(AppError::Violations(violations));
        }

        self.repository.properties.get_by_id(property_id).await?;
        if let Some(customer_id) = data.customer_id {
            self.repository.users.get_by_id(customer_id).await?;
        }

        let booking = self.repository.bookings.create(property_id, data).await?;
        tracing::info!("Booking {} created on property {}", booking.id, property_id);
        Ok(booking)
    }

    /// Attach an existing booking to a property, moving it if needed.
    /// Attaching a booking already on the property changes nothing.
    pub async fn attach(&self, property_id: i32, booking_id: i32) -> AppResult<Booking> {
        let mut set = self.load(property_id).await?;
        let booking = self.repository.bookings.get_by_id(booking_id).await?;
        let previous = booking.property_id;

        if !set.attach(booking) {
            return self.repository.bookings.get_by_id(booking_id).await;
        }

        let booking = self.repository.bookings.set_property(booking_id, property_id).await?;
        match previous {
            Some(from) => tracing::info!("Booking {} moved from property {} to {}", booking_id, from, property_id),
            None => tracing::info!("Booking {} attached to property {}", booking_id, property_id),
        }
        Ok(booking)
    }

    /// Detach a booking from a property. The back-reference is cleared
    /// only while it still points at this property.
    pub async fn detach(&self, property_id: i32, booking_id: i32) -> AppResult<Booking> {
        let mut set = self.load(property_id).await?;
        if set.detach(booking_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Booking {} is not attached to property {}",
                booking_id, property_id
            )));
        }

        let cleared = self
            .repository
            .bookings
            .clear_property(booking_id, property_id)
            .await?;
        if !cleared {
            tracing::warn!(
                "Booking {} was reassigned before detaching from property {}",
                booking_id,
                property_id
            );
        }
        self.repository.bookings.get_by_id(booking_id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.bookings.delete(id).await
    }

    async fn load(&self, property_id: i32) -> AppResult<PropertyBookings> {
        self.repository.properties.get_by_id(property_id).await?;
        let rows = self.repository.bookings.list_for_property(property_id).await?;
        Ok(PropertyBookings::from_rows(property_id, rows))
    }
}
