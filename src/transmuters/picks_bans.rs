use crate::{
    champions::ChampionLookup,
    site::Row,
    transmuters::fields::DRAFT_ORDER,
    types::{PickBanEntry, Side},
};

/// One `PicksAndBansS7` row, its slots kept in draft order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRecord {
    /// Join key against `ScoreboardGames`, blank or wrong on some records.
    pub game_id: Option<String>,
    pub overview_page: String,
    pub team1: String,
    pub team2: String,
    slots: [String; DRAFT_ORDER.len()],
}

impl DraftRecord {
    /// Draft columns with their champion, in draft order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, &str)> {
        DRAFT_ORDER
            .iter()
            .copied()
            .zip(self.slots.iter().map(String::as_str))
    }

    /// Champions of one `Team{1,2}{Pick,Ban}` category.
    pub fn category(&self, side: Side, is_ban: bool) -> impl Iterator<Item = &str> {
        let prefix = format!(
            "Team{}{}",
            side.team_number(),
            if is_ban { "Ban" } else { "Pick" }
        );

        self.slots()
            .filter(move |(column, _)| column.starts_with(&prefix))
            .map(|(_, champion)| champion)
    }
}

pub fn transmute_draft_record(row: &Row) -> DraftRecord {
    DraftRecord {
        game_id: row.text("GameId"),
        overview_page: row.get("OverviewPage").trim().to_string(),
        team1: row.get("Team1").trim().to_string(),
        team2: row.get("Team2").trim().to_string(),
        slots: std::array::from_fn(|i| row.get(DRAFT_ORDER[i]).trim().to_string()),
    }
}

/// Ordered picks and bans of a draft record.
pub fn transmute_picks_bans(
    record: &DraftRecord,
    champions: &dyn ChampionLookup,
) -> Vec<PickBanEntry> {
    record
        .slots()
        .map(|(column, champion)| PickBanEntry {
            champion: champions.champion(champion),
            is_ban: column.contains("Ban"),
            side: if column.starts_with("Team1") {
                Side::Blue
            } else {
                Side::Red
            },
        })
        .collect()
}
