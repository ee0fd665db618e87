use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A fully validated trip request, built by the form once every field has
/// passed its rules. Lives for one submission and is never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub pickup: String,
    pub destination: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub passengers: u8,
    pub notes: String,
}

impl BookingRequest {
    /// Wire form of the request. `date` and `time` collapse into the single
    /// combined string the booking endpoint expects.
    pub fn to_payload(&self) -> BookingPayload {
        BookingPayload {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            pickup: self.pickup.clone(),
            destination: self.destination.clone(),
            date: format!(
                "{} at {}",
                self.date.format("%Y-%m-%d"),
                self.time.format("%H:%M")
            ),
            passengers: self.passengers.to_string(),
            notes: self.notes.clone(),
        }
    }
}

/// The JSON body of `POST /api/book`. Every field defaults to empty when
/// absent — the server renders whatever it is given and never rejects a
/// payload for shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub passengers: String,
    #[serde(default)]
    pub notes: String,
}

/// Response body of `POST /api/book`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

// Clients have sent passengers both as "4" and as 4.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::String(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
