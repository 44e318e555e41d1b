pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("AUTH_JWT_SECRET").expect("AUTH_JWT_SECRET must be set"),
        }
    }
}
