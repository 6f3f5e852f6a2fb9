//! Typed read operations over the Leaguepedia cargo tables.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::{
    cache::IdentityCache,
    champions::{ChampionLookup, ChampionTable},
    config::Config,
    error::ParserResult,
    site::{CargoClient, QueryGateway},
    transmuters::DraftRecord,
    types::{PlayerProfile, TournamentLevel},
};

mod endpoints;

/// Entry point of the parser, owning the query gateway and the lookup caches.
///
/// Clones are cheap and share the session and the caches.
#[derive(Debug, Clone)]
pub struct Leaguepedia {
    gateway: QueryGateway,
    champions: Arc<dyn ChampionLookup>,
    /// (lowercase trigram, event overview page) to long team name.
    team_names: IdentityCache<(String, Option<String>), String>,
    /// Player link to profile.
    players: IdentityCache<String, PlayerProfile>,
    /// Tournament overview page to its draft records.
    drafts: IdentityCache<String, Arc<Vec<DraftRecord>>>,
}

impl Leaguepedia {
    pub fn new(
        gateway: QueryGateway,
        champions: Arc<dyn ChampionLookup>,
        player_cache_ttl: Duration,
    ) -> Self {
        Self {
            gateway,
            champions,
            team_names: IdentityCache::without_expiry(),
            players: IdentityCache::new(player_cache_ttl),
            drafts: IdentityCache::without_expiry(),
        }
    }

    /// Builds the HTTP session and loads the champion table of the configured Data Dragon version.
    pub async fn from_config(config: &Config) -> ParserResult<Self> {
        let client = CargoClient::new(config)?;
        let champions = ChampionTable::from_ddragon(client.http(), &config.ddragon_version).await?;
        let gateway = QueryGateway::new(Arc::new(client), config.page_size);
        gateway.start_metrics_logging();

        info!(
            "🛰️ [LEAGUEPEDIA] parser ready on {} ({} rows per page)",
            config.api_url, config.page_size
        );

        Ok(Self::new(
            gateway,
            Arc::new(champions),
            config.player_cache_ttl,
        ))
    }
}

/// Filters of the tournaments listing, unset fields are not filtered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentFilter {
    pub region: Option<String>,
    pub year: Option<i32>,
    pub level: Option<TournamentLevel>,
    pub is_playoffs: Option<bool>,
}

impl Default for TournamentFilter {
    fn default() -> Self {
        Self {
            region: None,
            year: None,
            level: Some(TournamentLevel::Primary),
            is_playoffs: None,
        }
    }
}

impl TournamentFilter {
    pub fn region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn level(mut self, level: Option<TournamentLevel>) -> Self {
        self.level = level;
        self
    }

    pub fn playoffs(mut self, is_playoffs: bool) -> Self {
        self.is_playoffs = Some(is_playoffs);
        self
    }
}
