//! Request payloads and their validation rules.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

/// Field name -> human-readable problem, surfaced verbatim in 400 responses.
pub type FieldErrors = HashMap<String, String>;

fn check_len(errors: &mut FieldErrors, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.insert(
            field.to_string(),
            format!("must be between {} and {} characters", min, max),
        );
    }
}

fn check_max_len(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.insert(field.to_string(), format!("must be at most {} characters", max));
    }
}

fn check_email(errors: &mut FieldErrors, value: &str) {
    let well_formed = value.len() <= 50
        && value
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
            .unwrap_or(false);

    if !well_formed {
        errors.insert("email".to_string(), "must be a valid email address".to_string());
    }
}

// Required string fields default to empty on binding and are then caught by
// the length checks, so a missing field reports through `field_errors` like
// any other validation failure.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignUpRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_len(&mut errors, "name", &self.name, 3, 20);
        check_email(&mut errors, &self.email);
        check_len(&mut errors, "password", &self.password, 6, 50);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignInRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_len(&mut errors, "password", &self.password, 6, 50);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateList {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completion_date: Option<NaiveDate>,
}

impl CreateList {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_len(&mut errors, "title", &self.title, 3, 30);
        check_max_len(&mut errors, "description", &self.description, 50);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateList {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completion_date: Option<NaiveDate>,
}

impl UpdateList {
    /// True when no field was supplied; such updates are rejected.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completion_date.is_none()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(title) = &self.title {
            check_len(&mut errors, "title", title, 3, 30);
        }
        if let Some(description) = &self.description {
            check_max_len(&mut errors, "description", description, 50);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
}

impl CreateItem {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_len(&mut errors, "title", &self.title, 3, 30);
        check_max_len(&mut errors, "description", &self.description, 50);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub done: Option<bool>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completion_date.is_none()
            && self.done.is_none()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(title) = &self.title {
            check_len(&mut errors, "title", title, 3, 30);
        }
        if let Some(description) = &self.description {
            check_max_len(&mut errors, "description", description, 50);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
