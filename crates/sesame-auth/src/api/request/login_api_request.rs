use serde::Serialize;

use crate::login::Credentials;

/// Body of `POST /login`.
#[derive(Serialize)]
pub(crate) struct LoginApiRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginApiRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_username_and_password() {
        let credentials = Credentials::new("jdoe", "hunter2");

        let body = serde_json::to_value(LoginApiRequest::from(&credentials)).unwrap();

        assert_eq!(body, json!({ "username": "jdoe", "password": "hunter2" }));
    }
}
