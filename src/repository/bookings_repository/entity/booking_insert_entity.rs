use crate::repository::{
    bookings_repository::dto::{NewComedianBooking, NewTicketBooking},
    BookingStatus,
};
use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketBookingInsertEntity<'a> {
    pub user_id: ObjectId,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub number_of_tickets: i64,
    pub unit_price_minor: i64,
    pub is_comedian_booking: bool,
    pub status: BookingStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl<'a> From<&'a NewTicketBooking> for TicketBookingInsertEntity<'a> {
    fn from(value: &'a NewTicketBooking) -> Self {
        let created_at = DateTime::from(value.created_at);
        Self {
            user_id: value.user_id,
            full_name: &value.full_name,
            email: &value.email,
            phone: &value.phone,
            number_of_tickets: value.number_of_tickets,
            unit_price_minor: value.unit_price_minor,
            is_comedian_booking: false,
            status: BookingStatus::Pending,
            created_at,
            updated_at: created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ComedianBookingInsertEntity<'a> {
    pub user_id: ObjectId,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub is_comedian_booking: bool,
    pub comedian_id: ObjectId,
    pub event_date: DateTime,
    pub event_location: &'a str,
    pub event_duration_minutes: i64,
    pub status: BookingStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl<'a> From<&'a NewComedianBooking> for ComedianBookingInsertEntity<'a> {
    fn from(value: &'a NewComedianBooking) -> Self {
        let created_at = DateTime::from(value.created_at);
        Self {
            user_id: value.user_id,
            full_name: &value.full_name,
            email: &value.email,
            phone: &value.phone,
            is_comedian_booking: true,
            comedian_id: value.comedian_id,
            event_date: DateTime::from(value.event_date),
            event_location: &value.event_location,
            event_duration_minutes: value.event_duration_minutes,
            status: BookingStatus::Pending,
            created_at,
            updated_at: created_at,
        }
    }
}
