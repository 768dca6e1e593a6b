use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::database::query_builder::{Column, Patch};

/// Public user columns. The password hash is never selected with these.
pub const USER_COLUMNS: &str = "username, first_name, last_name, email, is_admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// A user plus the titles of the jobs they applied to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub jobs_applications: Vec<String>,
}

/// Admin-created user; may carry the admin flag.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUser {
    #[validate(length(min = 1, max = 25))]
    pub username: String,
    #[validate(length(min = 5, max = 20))]
    pub password: String,
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(email, length(min = 6, max = 60))]
    pub email: String,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

/// Self-registration; always yields a non-admin account.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterUser {
    #[validate(length(min = 1, max = 25))]
    pub username: String,
    #[validate(length(min = 5, max = 20))]
    pub password: String,
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(email, length(min = 6, max = 60))]
    pub email: String,
}

impl From<RegisterUser> for NewUser {
    fn from(r: RegisterUser) -> Self {
        NewUser {
            username: r.username,
            password: r.password,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            is_admin: Some(false),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 25))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserUpdate {
    #[validate(length(min = 1, max = 30))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub last_name: Option<String>,
    #[validate(length(min = 5, max = 20))]
    pub password: Option<String>,
    #[validate(email, length(min = 6, max = 60))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Password,
    Email,
}

impl Column for UserField {
    fn column(self) -> &'static str {
        match self {
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::Password => "password",
            UserField::Email => "email",
        }
    }
}

impl UserUpdate {
    /// `password_hash` replaces the plaintext password when one was supplied.
    pub fn into_patch(self, password_hash: Option<String>) -> Patch<UserField> {
        let mut patch = Patch::new();
        patch
            .set_opt(UserField::FirstName, self.first_name)
            .set_opt(UserField::LastName, self.last_name)
            .set_opt(UserField::Password, password_hash)
            .set_opt(UserField::Email, self.email);
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::query_builder::{sql_for_partial_update, SqlValue};
    use serde_json::json;

    #[test]
    fn patch_uses_snake_case_columns() {
        let update: UserUpdate =
            serde_json::from_value(json!({ "firstName": "New", "email": "new@email.com" })).unwrap();

        let fragment = sql_for_partial_update(update.into_patch(None)).unwrap();

        assert_eq!(fragment.clause, r#""first_name"=$1, "email"=$2"#);
        assert_eq!(
            fragment.values,
            vec![SqlValue::from("New"), SqlValue::from("new@email.com")]
        );
    }

    #[test]
    fn hashed_password_is_bound() {
        let update = UserUpdate {
            password: Some("plaintext".into()),
            ..Default::default()
        };

        let fragment = sql_for_partial_update(update.into_patch(Some("$2b$hash".into()))).unwrap();

        assert_eq!(fragment.clause, r#""password"=$1"#);
        assert_eq!(fragment.values, vec![SqlValue::from("$2b$hash")]);
    }

    #[test]
    fn admin_flag_cannot_be_patched() {
        assert!(serde_json::from_value::<UserUpdate>(json!({ "isAdmin": true })).is_err());
        assert!(serde_json::from_value::<UserUpdate>(json!({ "username": "x" })).is_err());
    }

    #[test]
    fn registration_is_never_admin() {
        let register: RegisterUser = serde_json::from_value(json!({
            "username": "new",
            "password": "password",
            "firstName": "F",
            "lastName": "L",
            "email": "new@email.com"
        }))
        .unwrap();
        assert!(register.validate().is_ok());

        let user = NewUser::from(register);
        assert_eq!(user.is_admin, Some(false));

        let admin_attempt = serde_json::from_value::<RegisterUser>(json!({
            "username": "new",
            "password": "password",
            "firstName": "F",
            "lastName": "L",
            "email": "new@email.com",
            "isAdmin": true
        }));
        assert!(admin_attempt.is_err());
    }

    #[test]
    fn short_password_and_bad_email_fail() {
        let user = NewUser {
            username: "u".into(),
            password: "abc".into(),
            first_name: "F".into(),
            last_name: "L".into(),
            email: "not-an-email".into(),
            is_admin: None,
        };
        let errors = user.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn detail_serializes_applications() {
        let detail = UserDetail {
            user: User {
                username: "u1".into(),
                first_name: "U1F".into(),
                last_name: "U1L".into(),
                email: "user1@user.com".into(),
                is_admin: false,
            },
            jobs_applications: vec!["Job1".into()],
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["jobsApplications"], json!(["Job1"]));
        assert_eq!(value["isAdmin"], false);
        assert!(value.get("password").is_none());
    }
}
