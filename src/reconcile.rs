//! Draft to game matching on champion composition, used when the `GameId`
//! join between `PicksAndBansS7` and `ScoreboardGames` is missing or wrong.
//!
//! Two games of the same matchup in the same tournament with the exact same
//! picks and bans cannot be told apart: such drafts are reported as unresolvable.

use std::collections::BTreeSet;

use crate::{
    error::{ParserError, ParserResult},
    transmuters::DraftRecord,
    types::{Game, Side},
};

/// Stand-in for empty slots and the wiki "no pick" markers.
const NO_CHAMPION: &str = "none";

fn normalize(champion: &str) -> String {
    let champion = champion.trim().to_lowercase();
    if champion.is_empty() || champion == NO_CHAMPION || champion.contains("loss") {
        NO_CHAMPION.to_string()
    } else {
        champion
    }
}

/// Champions of the four team and pick-or-ban categories of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSignature {
    blue_picks: BTreeSet<String>,
    blue_bans: BTreeSet<String>,
    red_picks: BTreeSet<String>,
    red_bans: BTreeSet<String>,
}

impl DraftSignature {
    pub fn of_game(game: &Game) -> Self {
        let picks = |side: Side| -> BTreeSet<String> {
            game.team(side)
                .players
                .iter()
                .map(|player| normalize(&player.champion.name))
                .collect()
        };
        let bans = |side: Side| -> BTreeSet<String> {
            game.team(side)
                .bans
                .iter()
                .map(|champion| normalize(&champion.name))
                .collect()
        };

        Self {
            blue_picks: picks(Side::Blue),
            blue_bans: bans(Side::Blue),
            red_picks: picks(Side::Red),
            red_bans: bans(Side::Red),
        }
    }

    pub fn of_record(record: &DraftRecord) -> Self {
        let category = |side: Side, is_ban: bool| -> BTreeSet<String> {
            record.category(side, is_ban).map(normalize).collect()
        };

        Self {
            blue_picks: category(Side::Blue, false),
            blue_bans: category(Side::Blue, true),
            red_picks: category(Side::Red, false),
            red_bans: category(Side::Red, true),
        }
    }
}

/// Finds the only draft record of `candidates` played by the teams of `game`,
/// in the same order, with the same champions.
pub fn reconcile<'a>(
    game: &Game,
    candidates: &'a [DraftRecord],
) -> ParserResult<&'a DraftRecord> {
    let signature = DraftSignature::of_game(game);

    let mut matches = candidates
        .iter()
        .filter(|record| {
            record.team1 == game.blue.name.trim() && record.team2 == game.red.name.trim()
        })
        .filter(|record| DraftSignature::of_record(record) == signature);

    match (matches.next(), matches.next()) {
        (Some(record), None) => {
            tracing::debug!(
                "[RECONCILE] draft of {} resolved on champion composition",
                game.sources.leaguepedia.game_id
            );
            Ok(record)
        }
        _ => Err(ParserError::UnresolvableDraft {
            game_id: game.sources.leaguepedia.game_id.clone(),
        }),
    }
}
