pub mod rules;
pub mod state;
pub mod submitter;

pub use rules::{rules_for, validate_field, validate_form, Rule};
pub use state::{FormState, StatusBanner, StatusKind};
pub use submitter::{BookingClient, SubmissionOutcome};

use crate::models::BookingRequest;

/// The nine fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Pickup,
    Destination,
    Date,
    Time,
    Passengers,
    Notes,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Pickup,
        Field::Destination,
        Field::Date,
        Field::Time,
        Field::Passengers,
        Field::Notes,
    ];
}

/// Raw field values exactly as a form holds them, before any parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub pickup: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub passengers: String,
    pub notes: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            pickup: String::new(),
            destination: String::new(),
            date: String::new(),
            time: String::new(),
            passengers: "1".to_string(),
            notes: String::new(),
        }
    }
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Pickup => &self.pickup,
            Field::Destination => &self.destination,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Passengers => &self.passengers,
            Field::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Pickup => &mut self.pickup,
            Field::Destination => &mut self.destination,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Passengers => &mut self.passengers,
            Field::Notes => &mut self.notes,
        };
        *slot = value;
    }

    /// Parses the raw values into a typed request. Only meaningful once the
    /// whole form validates; returns None when a value does not parse.
    pub fn to_request(&self) -> Option<BookingRequest> {
        let date = rules::parse_date(&self.date)?;
        let time = rules::parse_time(&self.time)?;
        let passengers = self.passengers.parse().ok()?;

        Some(BookingRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            pickup: self.pickup.clone(),
            destination: self.destination.clone(),
            date,
            time,
            passengers,
            notes: self.notes.clone(),
        })
    }
}

/// Outcome of running one field through its rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(&'static str),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}
