use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token payload: just the holder's user id. Tokens carry no expiry, so a
/// token stays valid for as long as the signing secret does.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token secret is not configured")]
    MissingSecret,

    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Sign a compact HS256 token for the given user id.
pub fn sign_token(user_id: i32, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::default(), &Claims { id: user_id }, &key)?)
}

/// Verify a raw token string and return its claims.
///
/// Issued tokens have no `exp` claim, so the default required-claim set is
/// cleared and expiry checking disabled; a malformed token, a bad signature,
/// or a secret mismatch still fail.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    let data = decode::<Claims>(token, &key, &validation)?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn round_trip_preserves_user_id() {
        let token = sign_token(42, SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.id, 42);
    }

    #[test]
    fn token_without_expiry_verifies() {
        // Claims carry no exp at all; default validation would reject this.
        let token = sign_token(7, SECRET).unwrap();
        assert!(verify_token(&token, SECRET).is_ok());
    }

    #[test]
    fn secret_mismatch_fails() {
        let token = sign_token(42, SECRET).unwrap();
        assert!(verify_token(&token, "some-other-secret").is_err());
    }

    #[test]
    fn tampered_token_fails() {
        let mut token = sign_token(42, SECRET).unwrap();
        token.pop();
        token.push('A');
        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn garbage_and_empty_input_fail() {
        assert!(verify_token("", SECRET).is_err());
        assert!(verify_token("not.a.token", SECRET).is_err());
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(sign_token(1, ""), Err(TokenError::MissingSecret)));
        assert!(matches!(
            verify_token("whatever", ""),
            Err(TokenError::MissingSecret)
        ));
    }
}
