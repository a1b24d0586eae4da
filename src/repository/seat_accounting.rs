//!
//! Committed seats are always recomputed from the bookings collection.
//! There is no stored counter that could drift from the source of truth.
//!

use super::Error;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::{error::ErrorKind, ClientSession, Collection};
use std::sync::Arc;

///
/// Aggregation summing `number_of_tickets` over approved,
/// non-comedian bookings.
///
pub(crate) fn committed_seats_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "status": "approved",
                "is_comedian_booking": { "$ne": true },
            }
        },
        doc! {
            "$group": {
                "_id": null,
                "total": { "$sum": "$number_of_tickets" },
            }
        },
    ]
}

///
/// Extracts the total from the `$group` stage output.
/// An empty cursor means no approved bookings exist yet.
/// `$sum` may narrow to Int32 when every count fits.
///
pub(crate) fn total_committed_seats(group: Option<Document>) -> i64 {
    match group.as_ref().and_then(|group| group.get("total")) {
        Some(Bson::Int32(total)) => i64::from(*total),
        Some(Bson::Int64(total)) => *total,
        _ => 0,
    }
}

///
/// Seats a booking would occupy once approved.
/// `None` for comedian bookings, which hold no seats.
///
/// ### Errors
/// - [Error::Mongo] when a ticket booking carries no numeric
///   ticket count
///
pub(crate) fn seats_requested(booking: &Document) -> Result<Option<i64>, Error> {
    if booking.get_bool("is_comedian_booking").unwrap_or(false) {
        return Ok(None);
    }

    match booking.get("number_of_tickets") {
        Some(Bson::Int32(number_of_tickets)) => Ok(Some(i64::from(*number_of_tickets))),
        Some(Bson::Int64(number_of_tickets)) => Ok(Some(*number_of_tickets)),
        _ => Err(Error::Mongo(
            ErrorKind::Custom(Arc::new("invalid type of ticket count")).into(),
        )),
    }
}

pub(crate) fn fits_capacity(committed: i64, requested: i64, capacity: u32) -> bool {
    committed + requested <= i64::from(capacity)
}

pub(crate) async fn committed_seats_in_session(
    collection: &Collection<Document>,
    session: &mut ClientSession,
) -> Result<i64, mongodb::error::Error> {
    let mut cursor = collection
        .aggregate(committed_seats_pipeline())
        .session(&mut *session)
        .await?;
    let group = cursor.next(session).await.transpose()?;

    Ok(total_committed_seats(group))
}

///
/// Moves pending booking to approved state after recounting
/// committed seats within the same transaction.
///
/// Comedian bookings don't occupy seats so they skip the count.
/// `extra_fields` are merged into the `$set` document, which lets
/// payment verification stamp payment fields in the same update.
///
pub(crate) async fn approve_booking_in_session(
    collection: &Collection<Document>,
    session: &mut ClientSession,
    id: ObjectId,
    capacity: u32,
    updated_at: DateTime,
    extra_fields: Document,
) -> Result<(), Error> {
    let Some(booking) = collection
        .find_one(doc! {
            "_id": id,
            "status": "pending",
        })
        .session(&mut *session)
        .await?
    else {
        return Err(Error::NoDocumentUpdated);
    };

    if let Some(requested) = seats_requested(&booking)? {
        let committed = committed_seats_in_session(collection, &mut *session).await?;
        if !fits_capacity(committed, requested, capacity) {
            return Err(Error::CapacityExceeded);
        }
    }

    let mut set = doc! {
        "status": "approved",
        "updated_at": updated_at,
    };
    set.extend(extra_fields);

    let update_result = collection
        .update_one(
            doc! {
                "_id": id,
                "status": "pending",
            },
            doc! { "$set": set },
        )
        .session(session)
        .await?;

    match update_result.matched_count == 1 {
        true => Ok(()),
        false => Err(Error::NoDocumentUpdated),
    }
}
