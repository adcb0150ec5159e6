use std::{borrow::Cow, str::FromStr};

use ccswing_shared::form;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{PaymentMethod, PriorAttendance, ReferralSource};

/// Raw signup form as posted by a visitor.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct SignupForm {
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "form::text")]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(deserialize_with = "form::text")]
    pub last_name: String,
    #[validate(email(message = "Invalid email"))]
    #[serde(deserialize_with = "form::text")]
    pub email: String,
    #[serde(alias = "been_before", deserialize_with = "form::optional_text")]
    pub prior_attendance: Option<String>,
    #[serde(alias = "heard_about_us", deserialize_with = "form::optional_text")]
    pub referral_source: Option<String>,
    #[serde(deserialize_with = "form::optional_text")]
    pub payment_method: Option<String>,
    #[serde(deserialize_with = "form::flag")]
    pub accept_liability: Option<bool>,
    #[serde(deserialize_with = "form::flag")]
    pub accept_payment: Option<bool>,
}

/// A signup that passed every rule. Both acknowledgements were accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSignup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub prior_attendance: PriorAttendance,
    pub referral_source: Option<ReferralSource>,
    pub payment_method: PaymentMethod,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Required"));
    }

    Ok(())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn choice<T: FromStr>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    missing: &'static str,
) -> Option<T> {
    match value.map(str::trim) {
        None | Some("") => {
            errors.add(field, field_error("required", missing));
            None
        }
        Some(value) => match value.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.add(field, field_error("invalid_choice", "Please pick one of the options."));
                None
            }
        },
    }
}

fn acknowledged(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<bool>,
    message: &'static str,
) {
    if value != Some(true) {
        errors.add(field, field_error("missing_acknowledgement", message));
    }
}

impl SignupForm {
    /// Checks every rule and reports all violations together, keyed by field.
    pub fn validate_signup(mut self) -> Result<ValidSignup, ValidationErrors> {
        self.first_name = self.first_name.trim().to_owned();
        self.last_name = self.last_name.trim().to_owned();
        self.email = self.email.trim().to_owned();

        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let prior_attendance = choice::<PriorAttendance>(
            &mut errors,
            "prior_attendance",
            self.prior_attendance.as_deref(),
            "Please tell us if you've been to an event before.",
        );

        // Only asked of first timers; any answer from returning dancers is dropped.
        let referral_source = match prior_attendance {
            Some(PriorAttendance::FirstTime) => choice::<ReferralSource>(
                &mut errors,
                "referral_source",
                self.referral_source.as_deref(),
                "Please tell us how you heard about us.",
            ),
            _ => None,
        };

        let payment_method = choice::<PaymentMethod>(
            &mut errors,
            "payment_method",
            self.payment_method.as_deref(),
            "Please choose a payment method.",
        );

        acknowledged(
            &mut errors,
            "accept_liability",
            self.accept_liability,
            "You must accept the liability release",
        );
        acknowledged(
            &mut errors,
            "accept_payment",
            self.accept_payment,
            "You must acknowledge Venmo or pay-at-door confirmation requirement",
        );

        match (prior_attendance, payment_method) {
            (Some(prior_attendance), Some(payment_method)) if errors.is_empty() => Ok(ValidSignup {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                prior_attendance,
                referral_source,
                payment_method,
            }),
            _ => Err(errors),
        }
    }
}
