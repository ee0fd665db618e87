use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;

use crate::models::BookingRequest;

use super::rules::{validate_field, validate_form};
use super::submitter::{SubmissionOutcome, CONNECTION_ERROR, SUBMIT_SUCCESS};
use super::{Field, FormValues, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// The single status line shown after a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub message: String,
}

/// The whole form as one immutable record. Every transition consumes the
/// state and returns the next one; no ambient mutation anywhere.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub values: FormValues,
    pub errors: BTreeMap<Field, &'static str>,
    pub touched: BTreeSet<Field>,
    pub focused: Option<Field>,
    pub submitting: bool,
    pub status: Option<StatusBanner>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(mut self, field: Field) -> Self {
        self.focused = Some(field);
        self
    }

    pub fn input(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.set(field, value.into());
        self
    }

    /// Leaving a field marks it touched and validates it in place.
    pub fn blur(mut self, field: Field, now: NaiveDateTime) -> Self {
        self.focused = None;
        self.touched.insert(field);
        match validate_field(field, &self.values, now) {
            ValidationResult::Valid => {
                self.errors.remove(&field);
            }
            ValidationResult::Invalid(message) => {
                self.errors.insert(field, message);
            }
        }
        self
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// The submission gate. Refuses while a request is already in flight,
    /// records every field error otherwise, and yields the typed request
    /// only when the whole form validates.
    pub fn begin_submit(mut self, now: NaiveDateTime) -> (Self, Option<BookingRequest>) {
        if self.submitting {
            return (self, None);
        }

        self.errors = validate_form(&self.values, now);
        self.touched.extend(Field::ALL);
        if !self.errors.is_empty() {
            return (self, None);
        }

        let Some(request) = self.values.to_request() else {
            return (self, None);
        };

        self.submitting = true;
        self.status = None;
        (self, Some(request))
    }

    /// Applies the outcome of the one in-flight submission: success resets
    /// the form, failures surface a single error banner. Nothing retries.
    pub fn finish_submit(mut self, outcome: &SubmissionOutcome) -> Self {
        self.submitting = false;
        match outcome {
            SubmissionOutcome::Accepted => {
                self.values = FormValues::default();
                self.errors.clear();
                self.touched.clear();
                self.status = Some(StatusBanner {
                    kind: StatusKind::Success,
                    message: SUBMIT_SUCCESS.to_string(),
                });
            }
            SubmissionOutcome::Rejected { message } => {
                self.status = Some(StatusBanner {
                    kind: StatusKind::Error,
                    message: message.clone(),
                });
            }
            SubmissionOutcome::ConnectionFailed => {
                self.status = Some(StatusBanner {
                    kind: StatusKind::Error,
                    message: CONNECTION_ERROR.to_string(),
                });
            }
        }
        self
    }
}
