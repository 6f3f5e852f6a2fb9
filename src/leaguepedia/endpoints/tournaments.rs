use tracing::instrument;

use crate::error::ParserResult;
use crate::leaguepedia::{Leaguepedia, TournamentFilter};
use crate::site::{CargoQuery, Condition};
use crate::transmuters::{fields::TOURNAMENT_FIELDS, transmute_tournament};
use crate::types::Tournament;

impl Leaguepedia {
    /// Every region appearing in the `Tournaments` table.
    #[instrument(skip_all)]
    pub async fn regions(&self) -> ParserResult<Vec<String>> {
        let query = CargoQuery::new(["Tournaments"])
            .field("Region")
            .group_by("Region");

        let rows = self.gateway.query(&query).await?;

        Ok(rows.iter().filter_map(|row| row.text("Region")).collect())
    }

    #[instrument(skip_all, fields(filter = ?filter))]
    pub async fn tournaments(&self, filter: &TournamentFilter) -> ParserResult<Vec<Tournament>> {
        let mut query = CargoQuery::new(["Tournaments", "Leagues"])
            .join_on("Tournaments.League = Leagues.League")
            .fields(TOURNAMENT_FIELDS)
            .order_by("Tournaments.DateStart");

        if let Some(region) = &filter.region {
            query = query.filter(Condition::eq("Tournaments.Region", region));
        }
        if let Some(year) = filter.year {
            query = query.filter(Condition::eq("Tournaments.Year", year));
        }
        if let Some(level) = &filter.level {
            query = query.filter(Condition::eq("Tournaments.TournamentLevel", level));
        }
        if let Some(is_playoffs) = filter.is_playoffs {
            query = query.filter(Condition::eq(
                "Tournaments.IsPlayoffs",
                u8::from(is_playoffs),
            ));
        }

        let rows = self.gateway.query(&query).await?;

        Ok(rows.iter().map(transmute_tournament).collect())
    }
}
