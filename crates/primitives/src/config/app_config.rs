use crate::config::jwt_details::JWTInfo;
use crate::config::stripe_details::StripeInfo;
use eyre::Report;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JWTInfo,

    pub stripe_details: StripeInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_details: JWTInfo::new()?,

            stripe_details: StripeInfo::new()?,
        })
    }
}
