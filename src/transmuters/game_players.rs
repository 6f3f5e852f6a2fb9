use crate::{
    champions::ChampionLookup,
    site::Row,
    types::{Champion, Game, LeaguepediaPlayerIdentifier, Player, Role, Side},
};

const TEAM_SIZE: usize = 5;

/// Outcome of looking up a game player in the `ScoreboardPlayers` rows.
#[derive(Debug)]
enum PlayerMatch<'a> {
    /// Row of the same side playing the same champion.
    Scoreboard(&'a Row),
    /// No such row, the role is inferred from the player position. This is a
    /// best-effort guess, wrong whenever the picks are not listed in role order.
    PositionalFallback,
}

/// Merges `ScoreboardPlayers` rows into the players of a game.
///
/// Players are matched on their side and champion. A team short of players is
/// completed with the rows no player claimed, in role order. Merging the same
/// rows again leaves the game unchanged.
pub fn merge_players(
    game: &mut Game,
    rows: &[Row],
    champions: &dyn ChampionLookup,
    add_page_id: bool,
) {
    let game_id = game.sources.leaguepedia.game_id.clone();

    for side in Side::BOTH {
        let side_rows: Vec<&Row> = rows
            .iter()
            .filter(|row| Side::from_team_number(row.get("Side")) == Some(side))
            .collect();

        let team = game.team_mut(side);
        if team.players.len() < TEAM_SIZE {
            let unclaimed: Vec<&Row> = side_rows
                .iter()
                .copied()
                .filter(|row| {
                    !team.players.iter().any(|player| {
                        matches!(
                            find_player(&side_rows, &player.champion, champions),
                            PlayerMatch::Scoreboard(claimed) if std::ptr::eq(claimed, *row)
                        )
                    })
                })
                .collect();

            let missing = TEAM_SIZE - team.players.len();
            team.players
                .extend(seed_players(&unclaimed, champions).into_iter().take(missing));
        }

        for (idx, player) in team.players.iter_mut().enumerate() {
            match find_player(&side_rows, &player.champion, champions) {
                PlayerMatch::Scoreboard(row) => {
                    player.role = Role::from_role_number(row.get("gameRoleNumber"))
                        .or_else(|| Role::from_position(idx));
                    player.identity = merge_identity(&player.identity, row, add_page_id);
                }
                PlayerMatch::PositionalFallback => {
                    tracing::warn!(
                        "⚠️ [TRANSMUTER] no scoreboard player for {} on {} side of {}, role inferred from position",
                        player.champion.name,
                        side,
                        game_id
                    );
                    player.role = Role::from_position(idx);
                }
            }
        }
    }
}

fn find_player<'a>(
    rows: &[&'a Row],
    champion: &Champion,
    champions: &dyn ChampionLookup,
) -> PlayerMatch<'a> {
    rows.iter()
        .copied()
        .find(|row| champions.champion(row.get("Champion")).is_same(champion))
        .map_or(PlayerMatch::PositionalFallback, PlayerMatch::Scoreboard)
}

fn seed_players(rows: &[&Row], champions: &dyn ChampionLookup) -> Vec<Player> {
    let mut rows = rows.to_vec();
    rows.sort_by_key(|row| row.number::<u8>("gameRoleNumber"));

    rows.into_iter()
        .map(|row| Player {
            champion: champions.champion(row.get("Champion")),
            role: None,
            identity: LeaguepediaPlayerIdentifier {
                link: row.text("link"),
                ..Default::default()
            },
        })
        .collect()
}

fn merge_identity(
    current: &LeaguepediaPlayerIdentifier,
    row: &Row,
    add_page_id: bool,
) -> LeaguepediaPlayerIdentifier {
    let page_id = if add_page_id {
        row.text("pageId").and_then(|id| id.parse().ok())
    } else {
        current.page_id
    };

    LeaguepediaPlayerIdentifier {
        game_name: row.text("gameName").or_else(|| current.game_name.clone()),
        link: row.text("link").or_else(|| current.link.clone()),
        name: row.text("currentGameName"),
        irl_name: row.text("irlName"),
        country: row.text("Country"),
        birthday: row.date("Birthdate"),
        page_id,
    }
}
