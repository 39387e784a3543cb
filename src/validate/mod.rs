//! Client-Local Form Validation
//!
//! Multi-step form input is checked here before any network call is
//! attempted; failures are `Validation` errors and never reach the
//! gateway. The registration wizard validates per step so a failing step
//! can be re-presented without wiping earlier input.

use crate::shared::{ClientError, ContactMessage, NewProperty, NewReview, Registration, Role};

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum review comment length, after trimming
pub const MIN_COMMENT_LEN: usize = 10;

/// Maximum review comment length
pub const MAX_COMMENT_LEN: usize = 1000;

/// Steps of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    /// Role selection
    Role,
    /// Personal profile fields
    Profile,
    /// Agent business details (agents only)
    AgentDetails,
}

/// In-progress registration input, one field per wizard control.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub role: Option<Role>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub business_name: String,
    pub registration_number: String,
    pub years_of_experience: String,
    pub bank_name: String,
    pub account_number: String,
}

impl RegistrationForm {
    /// Validate one wizard step in isolation
    pub fn validate_step(&self, step: RegistrationStep) -> Result<(), ClientError> {
        match step {
            RegistrationStep::Role => {
                if self.role.is_none() {
                    return Err(ClientError::validation("role", "Please select a role"));
                }
                Ok(())
            }
            RegistrationStep::Profile => {
                require(&self.first_name, "firstName")?;
                require(&self.last_name, "lastName")?;
                require(&self.email, "email")?;
                validate_email(&self.email)?;
                require(&self.phone, "phone")?;
                if self.password.len() < MIN_PASSWORD_LEN {
                    return Err(ClientError::validation(
                        "password",
                        format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
                    ));
                }
                if self.password != self.confirm_password {
                    return Err(ClientError::validation(
                        "confirmPassword",
                        "Passwords do not match",
                    ));
                }
                Ok(())
            }
            RegistrationStep::AgentDetails => {
                if self.role != Some(Role::Agent) {
                    return Ok(());
                }
                require(&self.business_name, "businessName")?;
                require(&self.registration_number, "registrationNumber")?;
                require(&self.bank_name, "bankName")?;
                require(&self.account_number, "accountNumber")?;
                if !self.years_of_experience.is_empty()
                    && self.years_of_experience.parse::<u32>().is_err()
                {
                    return Err(ClientError::validation(
                        "yearsOfExperience",
                        "Years of experience must be a whole number",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Validate every applicable step and produce the wire payload
    pub fn into_registration(self) -> Result<Registration, ClientError> {
        self.validate_step(RegistrationStep::Role)?;
        self.validate_step(RegistrationStep::Profile)?;
        self.validate_step(RegistrationStep::AgentDetails)?;

        let role = self
            .role
            .ok_or_else(|| ClientError::validation("role", "Please select a role"))?;
        let is_agent = role == Role::Agent;
        Ok(Registration {
            role,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            phone: non_empty(self.phone),
            business_name: if is_agent {
                non_empty(self.business_name)
            } else {
                None
            },
            registration_number: if is_agent {
                non_empty(self.registration_number)
            } else {
                None
            },
            years_of_experience: if is_agent {
                self.years_of_experience.parse().ok()
            } else {
                None
            },
            bank_name: if is_agent {
                non_empty(self.bank_name)
            } else {
                None
            },
            account_number: if is_agent {
                non_empty(self.account_number)
            } else {
                None
            },
        })
    }
}

/// Validate a review before submission: rating 1-5 and a substantive
/// comment.
pub fn validate_review(review: &NewReview) -> Result<(), ClientError> {
    if !(1..=5).contains(&review.rating) {
        return Err(ClientError::validation("rating", "Please select a rating"));
    }
    let comment = review.comment.trim();
    if comment.is_empty() {
        return Err(ClientError::validation(
            "comment",
            "Please write a review comment",
        ));
    }
    if comment.chars().count() < MIN_COMMENT_LEN {
        return Err(ClientError::validation(
            "comment",
            format!(
                "Review comment must be at least {} characters long",
                MIN_COMMENT_LEN
            ),
        ));
    }
    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err(ClientError::validation(
            "comment",
            format!("Review comment must be at most {} characters", MAX_COMMENT_LEN),
        ));
    }
    Ok(())
}

/// Validate the contact form
pub fn validate_contact(message: &ContactMessage) -> Result<(), ClientError> {
    require(&message.name, "name")?;
    require(&message.email, "email")?;
    validate_email(&message.email)?;
    require(&message.message, "message")?;
    Ok(())
}

/// Validate a property listing form
pub fn validate_property(property: &NewProperty) -> Result<(), ClientError> {
    require(&property.title, "title")?;
    require(&property.location, "location")?;
    if !property.price.is_finite() || property.price <= 0.0 {
        return Err(ClientError::validation(
            "price",
            "Price must be a positive number",
        ));
    }
    Ok(())
}

fn require(value: &str, field: &'static str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        Err(ClientError::validation(field, "This field is required"))
    } else {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), ClientError> {
    let trimmed = email.trim();
    let well_formed = trimmed
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if well_formed {
        Ok(())
    } else {
        Err(ClientError::validation("email", "Invalid email format"))
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn filled_profile(role: Role) -> RegistrationForm {
        RegistrationForm {
            role: Some(role),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            phone: "555-0100".to_string(),
            ..RegistrationForm::default()
        }
    }

    #[test]
    fn test_role_step_requires_selection() {
        let form = RegistrationForm::default();
        let err = form.validate_step(RegistrationStep::Role).unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "role");
    }

    #[test]
    fn test_password_confirmation_mismatch() {
        let mut form = filled_profile(Role::User);
        form.confirm_password = "different".to_string();
        let err = form.validate_step(RegistrationStep::Profile).unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "confirmPassword");
    }

    #[test]
    fn test_short_password_rejected() {
        let mut form = filled_profile(Role::User);
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        let err = form.validate_step(RegistrationStep::Profile).unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "password");
    }

    #[test]
    fn test_agent_step_skipped_for_plain_users() {
        let form = filled_profile(Role::User);
        form.validate_step(RegistrationStep::AgentDetails).unwrap();
    }

    #[test]
    fn test_agent_step_requires_business_fields() {
        let form = filled_profile(Role::Agent);
        let err = form
            .validate_step(RegistrationStep::AgentDetails)
            .unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "businessName");
    }

    #[test]
    fn test_agent_registration_round_trip() {
        let mut form = filled_profile(Role::Agent);
        form.business_name = "Lovelace Estates".to_string();
        form.registration_number = "RC-1815".to_string();
        form.years_of_experience = "12".to_string();
        form.bank_name = "First Analytical".to_string();
        form.account_number = "0012345".to_string();

        let registration = form.into_registration().unwrap();
        assert_eq!(registration.role, Role::Agent);
        assert_eq!(registration.years_of_experience, Some(12));
        assert_eq!(
            registration.business_name.as_deref(),
            Some("Lovelace Estates")
        );
    }

    #[test]
    fn test_user_registration_drops_agent_fields() {
        let mut form = filled_profile(Role::User);
        form.business_name = "stale wizard input".to_string();
        let registration = form.into_registration().unwrap();
        assert!(registration.business_name.is_none());
    }

    #[test]
    fn test_review_rating_required() {
        let review = NewReview {
            property_id: None,
            agent_id: None,
            rating: 0,
            comment: "a perfectly fine comment".to_string(),
        };
        let err = validate_review(&review).unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "rating");
    }

    #[test]
    fn test_review_comment_minimum_length() {
        let review = NewReview {
            property_id: None,
            agent_id: None,
            rating: 4,
            comment: "   short   ".to_string(),
        };
        let err = validate_review(&review).unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "comment");
    }

    #[test]
    fn test_valid_review_passes() {
        let review = NewReview {
            property_id: None,
            agent_id: None,
            rating: 5,
            comment: "Spacious, quiet, and close to everything.".to_string(),
        };
        validate_review(&review).unwrap();
    }

    #[test]
    fn test_property_price_must_be_positive() {
        let property = NewProperty {
            title: "Flat".to_string(),
            description: None,
            price: -5.0,
            location: "Lagos".to_string(),
            bedrooms: None,
            bathrooms: None,
            image_url: None,
        };
        let err = validate_property(&property).unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "price");
    }

    #[test]
    fn test_contact_email_shape() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            subject: None,
            message: "Hello".to_string(),
        };
        let err = validate_contact(&message).unwrap_err();
        assert_matches!(err, ClientError::Validation { field, .. } if field == "email");
    }
}
