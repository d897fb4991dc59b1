/// Access token verification
///
/// Session issuance lives elsewhere on the platform; this service only
/// checks signatures on tokens the auth service minted and hands the
/// verified requester identity to the middleware.
use crate::error::{Result, ServerError};
use cliphub_core::UserId;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct TokenVerifier {
    secret: String,
}

/// Claims carried by a ClipHub access token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time
    pub exp: i64,
    /// Issued at
    pub iat: i64,
}

impl TokenVerifier {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Verify a token's signature and expiry, returning the requester id
    pub fn verify_access_token(&self, token: &str) -> Result<UserId> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;

        UserId::parse(token_data.claims.sub)
            .map_err(|_| ServerError::Auth("token subject is not a valid user id".to_string()))
    }
}
