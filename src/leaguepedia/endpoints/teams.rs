use tracing::{debug, instrument};

use crate::error::{ParserError, ParserResult};
use crate::leaguepedia::Leaguepedia;
use crate::site::{CargoQuery, Condition};

impl Leaguepedia {
    /// Resolves a team abbreviation like "IG" to its long name like "Invictus Gaming".
    ///
    /// Abbreviations are reused across regions and years: giving the tournament
    /// overview page disambiguates through the rosters of that event. Unknown
    /// abbreviations yield `None` and are queried again on the next call.
    #[instrument(skip_all, fields(trigram = %trigram, event = ?event))]
    pub async fn long_team_name(
        &self,
        trigram: &str,
        event: Option<&str>,
    ) -> ParserResult<Option<String>> {
        let trigram = trigram.trim().to_lowercase();
        let event = event.map(str::trim).filter(|e| !e.is_empty());
        if trigram.is_empty() {
            return Ok(None);
        }

        let key = (trigram.clone(), event.map(str::to_string));
        self.team_names
            .get_or_fetch(key, move || async move {
                let query = match event {
                    Some(event) => event_team_query(&trigram, event),
                    None => team_query(&trigram),
                };

                let rows = self.gateway.query(&query).await?;
                let long_name = rows.iter().find_map(|row| row.text("longName"));
                if long_name.is_none() {
                    debug!("No team known as {}", trigram);
                }

                Ok::<_, ParserError>(long_name)
            })
            .await
    }
}

fn team_query(trigram: &str) -> CargoQuery {
    CargoQuery::new(["TeamnameInputs=TNI", "Teamnames=TN"])
        .join_on("TNI.Link = TN.Link")
        .field("TN.Link=longName")
        .filter(Condition::eq("TNI.Input", trigram))
        .limit(1)
}

fn event_team_query(trigram: &str, event: &str) -> CargoQuery {
    CargoQuery::new(["TournamentRosters=TR", "Teamnames=TN", "Tournaments=T"])
        .join_on("TR.Team = TN.Link")
        .join_on("TR.OverviewPage = T.OverviewPage")
        .field("TR.Team=longName")
        .filter(Condition::Raw(format!(
            "({} OR {})",
            Condition::eq("T.Name", event),
            Condition::eq("T.OverviewPage", event)
        )))
        .filter(Condition::eq("TN.Short", trigram))
        .limit(1)
}
