pub mod booking;

pub use booking::{BookingPayload, BookingRequest, BookingResponse};
