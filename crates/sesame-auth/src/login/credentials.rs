/// Username and password for a single login attempt.
#[derive(Clone)]
pub struct Credentials {
    #[allow(missing_docs)]
    pub username: String,
    #[allow(missing_docs)]
    pub password: String,
}

impl Credentials {
    #[allow(missing_docs)]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
