use validator::ValidationErrors;
use crate::data::models::{CreateWordError, RequestError};

/// First human-readable message out of a validation failure.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}

impl From<ValidationErrors> for RequestError {
    fn from(err: ValidationErrors) -> Self {
        RequestError::Validation(validation_message(&err))
    }
}

impl From<ValidationErrors> for CreateWordError {
    fn from(err: ValidationErrors) -> Self {
        CreateWordError::Validation(validation_message(&err))
    }
}
