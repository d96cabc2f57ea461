use crate::app_state::AppState;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::extract::State;
use chrono::{Duration, Utc};
use http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use velosdrop_primitives::error::{ApiError, AuthError};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // driver id
    pub exp: i64,    // expiration time
    pub iat: i64,    // issued at
    pub iss: String,
    pub aud: String,
    pub jti: String,
}

impl Claims {
    pub fn driver_id(&self) -> Result<i64, ApiError> {
        self.sub.parse::<i64>().map_err(|e| {
            error!("Invalid driver ID in claims: {}", e);
            ApiError::Auth(AuthError::InvalidToken("Invalid driver ID".to_string()))
        })
    }
}

pub struct SecurityConfig;

impl SecurityConfig {
    pub fn create_token(state: &AppState, driver_id: i64) -> Result<String, ApiError> {
        let now = Utc::now();

        let claims = Claims {
            sub: driver_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(state.config.jwt_details.jwt_expiration_hours)).timestamp(),
            iss: state.config.jwt_details.jwt_issuer.clone(),
            aud: state.config.jwt_details.jwt_audience.clone(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());

        encode(
            &header,
            &claims,
            &EncodingKey::from_secret(
                state
                    .config
                    .jwt_details
                    .jwt_secret
                    .expose_secret()
                    .as_bytes(),
            ),
        )
        .map_err(|e| {
            error!("JWT encoding error: {}", e);
            ApiError::Internal("Token creation failed".into())
        })
    }

    fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
        let auth_header = headers
            .get("Authorization")
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidFormat)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidFormat)?
            .trim();

        if token.is_empty() {
            return Err(AuthError::InvalidFormat);
        }

        Ok(token.to_string())
    }

    pub fn verify_token(state: &AppState, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[state.config.jwt_details.jwt_issuer.as_str()]);
        validation.set_audience(&[state.config.jwt_details.jwt_audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(
                state
                    .config
                    .jwt_details
                    .jwt_secret
                    .expose_secret()
                    .as_bytes(),
            ),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken("Invalid or expired token".into()))
    }

    /// Identity comes from here and only here. Billing-relevant handlers
    /// read the driver id out of the verified claims, never from the
    /// request body.
    pub async fn auth_middleware(
        State(state): State<Arc<AppState>>,
        mut req: Request<axum::body::Body>,
        next: Next,
    ) -> Result<Response, Response> {
        let token = Self::extract_bearer_token(req.headers())
            .map_err(|e| ApiError::from(e).into_response())?;

        let claims =
            Self::verify_token(&state, &token).map_err(|e| ApiError::from(e).into_response())?;

        req.extensions_mut().insert(claims);
        Ok(next.run(req).await)
    }
}
