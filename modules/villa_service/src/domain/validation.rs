//! Input validation for villas and villa numbers
//!
//! Field checks collect every problem instead of stopping at the first one,
//! so callers can report them together.

use crate::contract::{NewVilla, NewVillaNumber, VillaError, VillaNumberUpdate, VillaUpdate};

/// Default maximum villa name length, in characters
pub const DEFAULT_MAX_NAME_LENGTH: usize = 30;

/// Tunable limits applied to incoming data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub max_name_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

/// Reject identifiers that can never address a row (0 and negatives)
pub fn validate_id(field: &str, id: i32) -> Result<(), VillaError> {
    if id <= 0 {
        return Err(VillaError::validation(format!(
            "{} must be a positive integer, got {}",
            field, id
        )));
    }
    Ok(())
}

fn into_result(errors: Vec<String>) -> Result<(), VillaError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(VillaError::Validation { errors })
    }
}

fn villa_field_errors(
    name: &str,
    occupancy: i32,
    square_meters: i32,
    rate: f64,
    rules: &ValidationRules,
    errors: &mut Vec<String>,
) {
    if name.trim().is_empty() {
        errors.push("name is required".to_string());
    } else if name.chars().count() > rules.max_name_length {
        errors.push(format!(
            "name must be at most {} characters",
            rules.max_name_length
        ));
    }

    if occupancy < 0 {
        errors.push(format!("occupancy must not be negative, got {}", occupancy));
    }

    if square_meters < 0 {
        errors.push(format!(
            "square_meters must not be negative, got {}",
            square_meters
        ));
    }

    if !rate.is_finite() || rate < 0.0 {
        errors.push(format!("rate must be a non-negative number, got {}", rate));
    }
}

/// Validate a villa creation request
pub fn validate_new_villa(villa: &NewVilla, rules: &ValidationRules) -> Result<(), VillaError> {
    let mut errors = Vec::new();
    villa_field_errors(
        &villa.name,
        villa.occupancy,
        villa.square_meters,
        villa.rate,
        rules,
        &mut errors,
    );
    into_result(errors)
}

/// Errors of a full villa update addressed at `path_id`
pub fn villa_update_errors(
    update: &VillaUpdate,
    path_id: i32,
    rules: &ValidationRules,
) -> Vec<String> {
    let mut errors = Vec::new();
    if update.id != path_id {
        errors.push(format!(
            "id {} in body does not match id {} in path",
            update.id, path_id
        ));
    }
    villa_field_errors(
        &update.name,
        update.occupancy,
        update.square_meters,
        update.rate,
        rules,
        &mut errors,
    );
    errors
}

/// Validate a full villa update addressed at `path_id`
pub fn validate_villa_update(
    update: &VillaUpdate,
    path_id: i32,
    rules: &ValidationRules,
) -> Result<(), VillaError> {
    into_result(villa_update_errors(update, path_id, rules))
}

fn villa_number_field_errors(villa_no: i32, villa_id: i32, errors: &mut Vec<String>) {
    if villa_no <= 0 {
        errors.push(format!(
            "villa_no must be a positive integer, got {}",
            villa_no
        ));
    }
    if villa_id <= 0 {
        errors.push(format!(
            "villa_id must be a positive integer, got {}",
            villa_id
        ));
    }
}

/// Validate a villa number creation request
pub fn validate_new_villa_number(number: &NewVillaNumber) -> Result<(), VillaError> {
    let mut errors = Vec::new();
    villa_number_field_errors(number.villa_no, number.villa_id, &mut errors);
    into_result(errors)
}

/// Validate a full villa number update addressed at `path_no`
pub fn validate_villa_number_update(
    update: &VillaNumberUpdate,
    path_no: i32,
) -> Result<(), VillaError> {
    let mut errors = Vec::new();
    if update.villa_no != path_no {
        errors.push(format!(
            "villa_no {} in body does not match villa_no {} in path",
            update.villa_no, path_no
        ));
    }
    villa_number_field_errors(update.villa_no, update.villa_id, &mut errors);
    into_result(errors)
}
