use std::sync::Arc;

use tracing::{Instrument, debug, instrument};

use crate::error::{ParserError, ParserResult};
use crate::leaguepedia::Leaguepedia;
use crate::reconcile::reconcile;
use crate::site::{CargoQuery, Condition, Row};
use crate::transmuters::{
    DraftRecord,
    fields::{GAME_FIELDS, GAME_PLAYER_FIELDS, draft_fields},
    merge_players, transmute_draft_record, transmute_game, transmute_picks_bans,
};
use crate::types::{Game, PickBanEntry};

impl Leaguepedia {
    /// Basic information of every game played in a tournament, ordered by start time.
    #[instrument(skip_all, fields(overview_page = %overview_page))]
    pub async fn games(&self, overview_page: &str) -> ParserResult<Vec<Game>> {
        let query = CargoQuery::new(["ScoreboardGames"])
            .fields(GAME_FIELDS)
            .filter(Condition::eq("ScoreboardGames.OverviewPage", overview_page))
            .order_by("ScoreboardGames.DateTime_UTC");

        let rows = self.gateway.query(&query).await?;

        Ok(rows
            .iter()
            .map(|row| transmute_game(row, self.champions.as_ref()))
            .collect())
    }

    /// Adds the draft, roles and player identities to a game built by [`Leaguepedia::games`].
    ///
    /// The draft and the players are fetched by two concurrent tasks. Both run
    /// to completion before any error is returned, even when the returned future
    /// is dropped early, and the game is left untouched on error. Enriching the
    /// same game again yields the same game.
    #[instrument(skip_all, fields(game_id = %game.sources.leaguepedia.game_id))]
    pub async fn enrich_game(&self, game: &mut Game, add_page_id: bool) -> ParserResult<()> {
        let game_id = game.sources.leaguepedia.game_id.trim().to_string();
        if game_id.is_empty() {
            return Err(ParserError::MissingIdentifier("GameId"));
        }
        if game.sources.leaguepedia.overview_page.trim().is_empty() {
            return Err(ParserError::MissingIdentifier("OverviewPage"));
        }

        let draft_task = {
            let parser = self.clone();
            let game = game.clone();
            let game_id = game_id.clone();
            tokio::spawn(
                async move { parser.game_draft(&game, &game_id).await }.in_current_span(),
            )
        };
        let players_task = {
            let parser = self.clone();
            let game_id = game_id.clone();
            tokio::spawn(async move { parser.game_players(&game_id).await }.in_current_span())
        };

        let (picks_bans, players) = tokio::join!(draft_task, players_task);
        let picks_bans = picks_bans??;
        let players = players??;

        merge_players(game, &players, self.champions.as_ref(), add_page_id);
        game.picks_bans = picks_bans;

        Ok(())
    }

    /// Picks and bans of a game, resolved within the draft records of its tournament.
    ///
    /// Records are matched on `GameId` first, then on champion composition.
    /// Tournaments without any draft record yield `None`.
    #[instrument(skip_all, fields(game_id = %game.sources.leaguepedia.game_id))]
    pub async fn picks_bans(&self, game: &Game) -> ParserResult<Option<Vec<PickBanEntry>>> {
        let overview_page = game.sources.leaguepedia.overview_page.trim();
        if overview_page.is_empty() {
            return Err(ParserError::MissingIdentifier("OverviewPage"));
        }

        let records = self.tournament_drafts(overview_page).await?;
        if records.is_empty() {
            debug!("No draft record for {}", overview_page);
            return Ok(None);
        }

        let game_id = game.sources.leaguepedia.game_id.trim();
        let record = match records
            .iter()
            .find(|record| record.game_id.as_deref() == Some(game_id))
        {
            Some(record) => record,
            None => reconcile(game, &records)?,
        };

        Ok(Some(transmute_picks_bans(record, self.champions.as_ref())))
    }

    async fn game_draft(
        &self,
        game: &Game,
        game_id: &str,
    ) -> ParserResult<Option<Vec<PickBanEntry>>> {
        // Double join as required by Leaguepedia
        let query = CargoQuery::new(["PicksAndBansS7", "ScoreboardGames"])
            .join_on("PicksAndBansS7.GameId = ScoreboardGames.GameId")
            .fields(draft_fields())
            .filter(Condition::eq("ScoreboardGames.GameId", game_id))
            .limit(1);

        let rows = self.gateway.query(&query).await?;
        match rows.first() {
            Some(row) => Ok(Some(transmute_picks_bans(
                &transmute_draft_record(row),
                self.champions.as_ref(),
            ))),
            None => {
                debug!("No draft joined on {}, resolving within its tournament", game_id);
                self.picks_bans(game).await
            }
        }
    }

    async fn game_players(&self, game_id: &str) -> ParserResult<Vec<Row>> {
        let query = CargoQuery::new([
            "ScoreboardGames",
            "ScoreboardPlayers",
            "PlayerRedirects",
            "Players",
        ])
        .join_on("ScoreboardGames.GameId = ScoreboardPlayers.GameId")
        .join_on("ScoreboardPlayers.Link = PlayerRedirects.AllName")
        .join_on("PlayerRedirects.OverviewPage = Players.OverviewPage")
        .fields(GAME_PLAYER_FIELDS)
        .filter(Condition::eq("ScoreboardGames.GameId", game_id));

        self.gateway.query(&query).await
    }

    /// Draft records of a tournament, kept for the lifetime of the parser once found.
    async fn tournament_drafts(&self, overview_page: &str) -> ParserResult<Arc<Vec<DraftRecord>>> {
        let records = self
            .drafts
            .get_or_fetch(overview_page.to_string(), move || async move {
                let query = CargoQuery::new(["PicksAndBansS7"])
                    .fields(draft_fields())
                    .filter(Condition::eq("PicksAndBansS7.OverviewPage", overview_page));

                let records: Vec<DraftRecord> = self
                    .gateway
                    .query(&query)
                    .await?
                    .iter()
                    .map(transmute_draft_record)
                    .collect();

                Ok::<_, ParserError>((!records.is_empty()).then(|| Arc::new(records)))
            })
            .await?;

        Ok(records.unwrap_or_default())
    }
}
