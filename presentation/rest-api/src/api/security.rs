use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct TokenClaims {
    sub: String,
    exp: u64,
    iat: Option<u64>,
}

fn extract_subject(token: &str, secret: &str) -> Result<String, String> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<TokenClaims>(token, &key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    if token_data.claims.sub.trim().is_empty() {
        return Err("auth.missing_subject".to_string());
    }

    Ok(token_data.claims.sub)
}

/// Bearer token authentication: HS256 JWT signed with the shared service
/// secret. The `sub` claim identifies the caller.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
#[allow(dead_code)]
pub struct ServiceBearer(pub String);

async fn bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    let config = AuthConfig::from_env();

    match extract_subject(&bearer.token, &config.jwt_secret) {
        Ok(subject) => Some(subject),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    const SECRET: &str = "test-secret";

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: u64,
    }

    fn token(sub: &str, exp: u64, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &TestClaims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> u64 {
        4_102_444_800 // 2100-01-01
    }

    #[test]
    fn should_extract_subject_from_valid_token() {
        let token = token("user-42", far_future(), SECRET);

        let result = extract_subject(&token, SECRET);

        assert_eq!(result.unwrap(), "user-42");
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let token = token("user-42", far_future(), "other-secret");

        let result = extract_subject(&token, SECRET);

        assert!(
            result
                .unwrap_err()
                .contains("auth.token_validation_failed")
        );
    }

    #[test]
    fn should_reject_expired_token() {
        let token = token("user-42", 1_000_000, SECRET);

        let result = extract_subject(&token, SECRET);

        assert!(
            result
                .unwrap_err()
                .contains("auth.token_validation_failed")
        );
    }

    #[test]
    fn should_reject_token_with_blank_subject() {
        let token = token("  ", far_future(), SECRET);

        let result = extract_subject(&token, SECRET);

        assert!(result.unwrap_err().contains("auth.missing_subject"));
    }

    #[test]
    fn should_reject_malformed_token() {
        let result = extract_subject("not-a-jwt", SECRET);

        assert!(result.is_err());
    }
}
