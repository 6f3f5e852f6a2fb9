use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use nonzero_ext::nonzero;

use crate::error::ParserError;

const DEFAULT_API_URL: &str = "https://lol.fandom.com/api.php";
const DEFAULT_PAGE_SIZE: NonZeroU32 = nonzero!(500_u32);
const DEFAULT_RATE_LIMIT_PER_SECOND: NonZeroU32 = nonzero!(2_u32);
const DEFAULT_PLAYER_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_DDRAGON_VERSION: &str = "15.12.1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// Maximum amount of rows the wiki returns for a single cargo query.
    pub page_size: NonZeroU32,
    pub rate_limit_per_second: NonZeroU32,
    pub player_cache_ttl: Duration,
    pub user_agent: String,
    pub ddragon_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            rate_limit_per_second: DEFAULT_RATE_LIMIT_PER_SECOND,
            player_cache_ttl: Duration::from_secs(DEFAULT_PLAYER_CACHE_TTL_SECS),
            user_agent: default_user_agent(),
            ddragon_version: DEFAULT_DDRAGON_VERSION.into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ParserError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("LEAGUEPEDIA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let page_size = match env::var("LEAGUEPEDIA_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            Some(value) => NonZeroU32::new(value).ok_or_else(|| {
                ParserError::Config("LEAGUEPEDIA_PAGE_SIZE must be greater than 0".into())
            })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let rate_limit_per_second = env::var("LEAGUEPEDIA_RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or(DEFAULT_RATE_LIMIT_PER_SECOND);

        let player_cache_ttl = env::var("PLAYER_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_PLAYER_CACHE_TTL_SECS));

        let user_agent =
            env::var("LEAGUEPEDIA_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());

        Ok(Self {
            api_url,
            page_size,
            rate_limit_per_second,
            player_cache_ttl,
            user_agent,
            ddragon_version,
        })
    }
}

fn default_user_agent() -> String {
    format!("leaguepedia-parser/{}", env!("CARGO_PKG_VERSION"))
}
