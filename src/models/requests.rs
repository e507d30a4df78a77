use crate::core::tags::Tags;
use crate::models::domain::Role;
use serde::Deserialize;
use validator::Validate;

/// Payload for creating a user profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub profile_photo: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub startups: Option<String>,
    #[serde(default)]
    pub portfolio: Tags,
    pub resume_url: Option<String>,
    #[serde(default)]
    pub looking_for_cofounder: bool,
    pub availability: Option<String>,
    #[serde(default)]
    pub skills: Tags,
    #[serde(default)]
    pub looking_for: Tags,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub role: Role,
    pub founder_type: Option<String>,
    pub stage_preference: Option<String>,
    pub commitment_level: Option<String>,
    pub preferences: Option<serde_json::Value>,
}

/// Partial user update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub profile_photo: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub startups: Option<String>,
    pub portfolio: Option<Tags>,
    pub resume_url: Option<String>,
    pub looking_for_cofounder: Option<bool>,
    pub availability: Option<String>,
    pub skills: Option<Tags>,
    pub looking_for: Option<Tags>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub role: Option<Role>,
    pub founder_type: Option<String>,
    pub stage_preference: Option<String>,
    pub commitment_level: Option<String>,
    pub preferences: Option<serde_json::Value>,
}

/// Payload for creating a job post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobPostRequest {
    #[validate(length(min = 1))]
    pub title: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub skills: Tags,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub work_style: Option<String>,
    pub availability: Option<String>,
    pub timeline: Option<String>,
    pub compensation: Option<String>,
    pub owner_id: i32,
}

/// Partial job post update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobPostRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub role: Option<Role>,
    pub skills: Option<Tags>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub work_style: Option<String>,
    pub availability: Option<String>,
    pub timeline: Option<String>,
    pub compensation: Option<String>,
}

/// Payload for applying to a job post.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    pub job_post_id: i32,
    pub applicant_id: i32,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

/// Query filters for the profile listing.
///
/// `skills` accepts a comma-joined list; each entry becomes a substring
/// filter and all entries must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub role: Option<Role>,
    pub skills: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub experience: Option<String>,
}

/// Query filters for the job post listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListQuery {
    pub role: Option<Role>,
    pub skills: Option<String>,
    pub location: Option<String>,
    pub work_style: Option<String>,
}

/// Query parameters for the match listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchListQuery {
    pub limit: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_accepts_both_tag_shapes() {
        let from_list: CreateUserRequest = serde_json::from_str(
            r#"{"name": "Test", "role": "job_seeker", "skills": ["Python", "APIs"]}"#,
        )
        .unwrap();
        let from_string: CreateUserRequest = serde_json::from_str(
            r#"{"name": "Test", "role": "job_seeker", "skills": "Python, APIs"}"#,
        )
        .unwrap();

        assert_eq!(from_list.skills.tokens(), from_string.skills.tokens());
        assert!(from_list.looking_for.is_empty());
    }

    #[test]
    fn test_update_user_defaults_to_no_changes() {
        let update: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(update.name.is_none());
        assert!(update.skills.is_none());
        assert!(update.role.is_none());
    }

    #[test]
    fn test_signup_validation() {
        let bad = SignupRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            role: Role::JobSeeker,
        };
        assert!(bad.validate().is_err());

        let good = SignupRequest {
            email: "login@example.com".to_string(),
            ..bad
        };
        assert!(good.validate().is_ok());
    }
}
