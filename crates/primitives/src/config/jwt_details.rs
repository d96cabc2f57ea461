use eyre::eyre;
use eyre::Report;
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct JWTInfo {
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub jwt_issuer: String,
    pub jwt_audience: String,
}

impl JWTInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            jwt_secret: SecretString::new(
                env::var("JWT_SECRET")
                    .map_err(|_| eyre!("JWT_SECRET environment variable must be set"))?
                    .into(),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".into())
                .parse()?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "velosdrop".into()),
            jwt_audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "velosdrop_api".into()),
        })
    }
}
