use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::error::ParserResult;
use crate::leaguepedia::Leaguepedia;
use crate::site::{CargoQuery, Condition};
use crate::transmuters::{fields::PLAYER_PROFILE_FIELDS, transmute_player_profile};
use crate::types::PlayerProfile;

/// Links resolved by a single query, keeping the `where` clause in the URL length limits.
const PLAYER_BATCH_SIZE: usize = 50;

impl Leaguepedia {
    /// Current profile of the player behind a page link, any of their former names included.
    #[instrument(skip_all, fields(link = %link))]
    pub async fn player(&self, link: &str) -> ParserResult<Option<PlayerProfile>> {
        let mut profiles = self.players(&[link]).await?;

        Ok(profiles.remove(link.trim()))
    }

    /// Profiles of many players, keyed by the requested link.
    ///
    /// Fresh profiles are served from the cache, the others being resolved in
    /// batches. Links unknown to the wiki are absent from the result.
    #[instrument(skip_all, fields(count = links.len()))]
    pub async fn players(&self, links: &[&str]) -> ParserResult<HashMap<String, PlayerProfile>> {
        let mut profiles = HashMap::new();
        let mut missing = Vec::new();

        for link in links.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            match self.players.get(&link.to_string()).await {
                Some(profile) => {
                    profiles.insert(link.to_string(), profile);
                }
                None if !missing.contains(&link) => missing.push(link),
                None => {}
            }
        }

        debug!(
            "{} cached player profiles, {} to resolve",
            profiles.len(),
            missing.len()
        );

        for batch in missing.chunks(PLAYER_BATCH_SIZE) {
            let query = CargoQuery::new(["Players", "PlayerRedirects"])
                .join_on("Players.OverviewPage = PlayerRedirects.OverviewPage")
                .fields(PLAYER_PROFILE_FIELDS)
                .filter(Condition::is_in("PlayerRedirects.AllName", batch));

            let rows = self.gateway.query(&query).await?;
            let found: HashMap<String, PlayerProfile> = rows
                .iter()
                .map(|row| (row.get("link").trim().to_lowercase(), transmute_player_profile(row)))
                .collect();

            for link in batch {
                if let Some(profile) = found.get(&link.to_lowercase()) {
                    self.players.insert(link.to_string(), profile.clone()).await;
                    profiles.insert(link.to_string(), profile.clone());
                }
            }
        }

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::leaguepedia::tests::{ScriptedTransport, parser};
    use crate::transmuters::player::tests::profile_row;

    const PROFILES: &str = "Players, PlayerRedirects";

    fn transport() -> Arc<ScriptedTransport> {
        Arc::new(ScriptedTransport::default().respond(
            PROFILES,
            vec![
                profile_row("Faker", "Faker", "T1"),
                profile_row("Hide on bush", "Faker", "T1"),
                profile_row("Caps", "Caps", "G2 Esports"),
            ],
        ))
    }

    #[tokio::test]
    async fn players_are_resolved_by_any_of_their_names() {
        let transport = transport();

        let profile = parser(&transport)
            .player("hide on bush")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(profile.game_name, "Faker");
        assert_eq!(profile.team.as_deref(), Some("T1"));
        assert_eq!(
            transport.queries()[0].where_clause(),
            "PlayerRedirects.AllName IN ('hide on bush')"
        );
    }

    #[tokio::test]
    async fn unknown_links_are_absent() {
        let transport = transport();

        let profiles = parser(&transport)
            .players(&["Caps", "Not A Player", "Caps"])
            .await
            .unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles["Caps"].team.as_deref(), Some("G2 Esports"));
        assert_eq!(
            transport.queries()[0].where_clause(),
            "PlayerRedirects.AllName IN ('Caps', 'Not A Player')"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn profiles_are_cached_for_an_hour() {
        let transport = transport();
        let parser = parser(&transport);

        parser.player("Faker").await.unwrap();
        parser.players(&["Faker", "Caps"]).await.unwrap();
        assert_eq!(transport.count(PROFILES), 2);
        assert_eq!(
            transport.queries()[1].where_clause(),
            "PlayerRedirects.AllName IN ('Caps')"
        );

        tokio::time::advance(Duration::from_secs(1800)).await;
        parser.player("Faker").await.unwrap();
        assert_eq!(transport.count(PROFILES), 2);

        tokio::time::advance(Duration::from_secs(3601)).await;
        parser.player("Faker").await.unwrap();
        assert_eq!(transport.count(PROFILES), 3);
    }

    #[tokio::test]
    async fn misses_are_queried_again() {
        let transport = transport();
        let parser = parser(&transport);

        assert_eq!(parser.player("Not A Player").await.unwrap(), None);
        assert_eq!(parser.player("Not A Player").await.unwrap(), None);
        assert_eq!(transport.count(PROFILES), 2);
    }
}
