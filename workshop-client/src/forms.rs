//! Form validation
//!
//! Each form validates every field at once and reports one message per
//! field, so a front end can show all problems inline. A valid form turns
//! into the request payload the API expects.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use shared::client::{LoginRequest, ProfileUpdate, RegisterRequest};
use shared::models::{ServiceInput, User, VehicleInput};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d\s\-+()]+$").unwrap());

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;

/// Field name -> message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<_> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.add("email", "Please enter a valid email address");
    }
}

fn check_password_length(errors: &mut FieldErrors, password: &str) -> bool {
    if password.is_empty() {
        errors.add("password", "Password is required");
        false
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 8 characters long");
        false
    } else {
        true
    }
}

// ========== Login ==========

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_password_length(&mut errors, &self.password);
        errors.into_result(|| LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

// ========== Register ==========

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Full name is required");
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.add("name", "Name must be at least 2 characters long");
        }

        check_email(&mut errors, &self.email);

        if self.phone.trim().is_empty() {
            errors.add("phone", "Phone number is required");
        } else if !PHONE_RE.is_match(&self.phone) {
            errors.add("phone", "Please enter a valid phone number");
        }

        if check_password_length(&mut errors, &self.password) {
            let has_lower = self.password.chars().any(char::is_lowercase);
            let has_upper = self.password.chars().any(char::is_uppercase);
            if !(has_lower && has_upper) {
                errors.add("password", "Password must contain both uppercase and lowercase letters");
            }
        }

        if self.confirm_password.is_empty() {
            errors.add("confirm_password", "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match");
        }

        errors.into_result(|| RegisterRequest {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

// ========== Profile ==========

/// Profile form, pre-filled from the signed-in user
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            ..Default::default()
        }
    }

    /// A blank password leaves the current one unchanged
    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        if !self.password.is_empty() && self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match");
        }
        errors.into_result(|| ProfileUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        })
    }

    /// Forget the typed password after a successful update
    pub fn clear_passwords(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }
}

// ========== Vehicle ==========

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm(pub VehicleInput);

impl VehicleForm {
    pub fn validate(&self) -> Result<VehicleInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let v = &self.0;
        for (field, value, label) in [
            ("brand", &v.brand, "Brand"),
            ("model", &v.model, "Model"),
            ("year", &v.year, "Year"),
            ("license_plate", &v.license_plate, "License plate"),
            ("color", &v.color, "Color"),
        ] {
            if value.trim().is_empty() {
                errors.add(field, format!("{label} is required"));
            }
        }
        errors.into_result(|| VehicleInput {
            brand: v.brand.trim().to_string(),
            model: v.model.trim().to_string(),
            year: v.year.trim().to_string(),
            license_plate: v.license_plate.trim().to_string(),
            color: v.color.trim().to_string(),
        })
    }
}

// ========== Service ==========

/// Service form; price is kept as typed text until validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ServiceForm {
    pub fn from_service(service: &shared::models::Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            price: service.price.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ServiceInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Service name is required");
        }
        let price = shared::money::parse_price(&self.price);
        if price.is_none() {
            errors.add("price", "Price must be a non-negative number");
        }
        match price {
            Some(price) if errors.is_empty() => Ok(ServiceInput {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                price,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form() {
        let form = LoginForm {
            email: "rina@bengkel.id".into(),
            password: "secret12".into(),
        };
        assert!(form.validate().is_ok());

        let errors = LoginForm {
            email: "not-an-email".into(),
            password: "short".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters long"));

        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_register_form_reports_all_fields() {
        let errors = RegisterForm {
            name: " a ".into(),
            email: "a@b.c".into(),
            phone: "0812-abc".into(),
            password: "alllowercase".into(),
            confirm_password: "different".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters long"));
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number"));
        assert_eq!(
            errors.get("password"),
            Some("Password must contain both uppercase and lowercase letters")
        );
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    }

    #[test]
    fn test_register_form_builds_request() {
        let req = RegisterForm {
            name: "  Budi Santoso ".into(),
            email: "budi@example.com".into(),
            phone: "+62 (812) 555-0101".into(),
            password: "Rahasia123".into(),
            confirm_password: "Rahasia123".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(req.name, "Budi Santoso");
        assert_eq!(req.phone, "+62 (812) 555-0101");
    }

    #[test]
    fn test_profile_form_password_is_optional() {
        let mut form = ProfileForm {
            name: "Sari".into(),
            email: "sari@example.com".into(),
            phone: "0812".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().password, None);

        form.password = "NewPass123".into();
        form.confirm_password = "NewPass124".into();
        assert_eq!(
            form.validate().unwrap_err().get("confirm_password"),
            Some("Passwords do not match")
        );

        form.confirm_password = "NewPass123".into();
        assert_eq!(form.validate().unwrap().password.as_deref(), Some("NewPass123"));
        form.clear_passwords();
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_vehicle_form_requires_every_field() {
        let errors = VehicleForm(VehicleInput {
            brand: "Toyota".into(),
            model: " ".into(),
            ..Default::default()
        })
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("model"), Some("Model is required"));
        assert_eq!(errors.get("brand"), None);
    }

    #[test]
    fn test_service_form_price() {
        let mut form = ServiceForm {
            name: "Oil change".into(),
            description: String::new(),
            price: "150000".into(),
        };
        assert_eq!(form.validate().unwrap().price, 150000.0);

        form.price = "-5".into();
        assert!(form.validate().unwrap_err().get("price").is_some());
        form.price = "abc".into();
        assert!(form.validate().is_err());
    }
}
