use url::Url;

use crate::{
    champions::ChampionLookup,
    site::Row,
    types::{
        Game, GameSources, LeaguepediaGameIdentifier, LeaguepediaPlayerIdentifier, Player,
        RiotGameIdentifier, Side, Team, TeamEndOfGameStats,
    },
};

/// Host marker of match history links pointing to the Riot live game API.
const RIOT_MATCH_HISTORY_HOST: &str = "leagueoflegends.com";

/// Transforms a `ScoreboardGames` row into a [`Game`].
///
/// Only the scoreboard fields are filled, roles and player identities being
/// added by the game details enrichment.
pub fn transmute_game(row: &Row, champions: &dyn ChampionLookup) -> Game {
    let match_history_url = row.text("MatchHistory");
    let riot = match_history_url.as_deref().and_then(parse_riot_identifier);

    Game {
        sources: GameSources {
            leaguepedia: LeaguepediaGameIdentifier {
                game_id: row.get("GameId").trim().to_string(),
                match_id: row.get("MatchId").trim().to_string(),
                overview_page: row.get("OverviewPage").trim().to_string(),
                match_history_url,
            },
            riot,
        },
        tournament: row.get("Tournament").trim().to_string(),
        start: row.datetime_utc("DateTime UTC"),
        game_in_series: game_in_series(row),
        patch: row.get("Patch").trim().to_string(),
        duration: (row.float("Gamelength Number") * 60.0).round() as u32,
        winner: match row.get("Winner").trim() {
            "1" => Side::Blue,
            _ => Side::Red,
        },
        vod: row.text("VOD"),
        blue: transmute_team(row, Side::Blue, champions),
        red: transmute_team(row, Side::Red, champions),
        picks_bans: None,
    }
}

fn game_in_series(row: &Row) -> u8 {
    match row.number::<u8>("N GameInMatch") {
        0 => row
            .get("Gamename")
            .trim()
            .strip_prefix("Game ")
            .and_then(|n| n.trim().parse().ok())
            .unwrap_or_default(),
        n => n,
    }
}

fn transmute_team(row: &Row, side: Side, champions: &dyn ChampionLookup) -> Team {
    let column = |suffix: &str| format!("Team{}{}", side.team_number(), suffix);

    let links = row.list(&column("Players"));
    let players = row
        .list(&column("Picks"))
        .iter()
        .enumerate()
        .map(|(idx, champion)| Player {
            champion: champions.champion(champion),
            role: None,
            identity: LeaguepediaPlayerIdentifier {
                link: links.get(idx).filter(|link| !link.is_empty()).cloned(),
                ..Default::default()
            },
        })
        .collect();

    Team {
        name: row.get(&format!("Team{}", side.team_number())).trim().to_string(),
        series_score: row.number(&column("Score")),
        players,
        end_of_game_stats: TeamEndOfGameStats {
            tower_kills: row.number(&column("Towers")),
            inhibitor_kills: row.number(&column("Inhibitors")),
            dragon_kills: row.number(&column("Dragons")),
            rift_herald_kills: row.number(&column("RiftHeralds")),
            baron_kills: row.number(&column("Barons")),
        },
        bans: row
            .list(&column("Bans"))
            .iter()
            .map(|champion| champions.champion(champion))
            .collect(),
    }
}

/// Parses the live game identifier embedded in a Riot match history link.
///
/// Links from other match history providers yield `None`. A Riot link that
/// cannot be parsed is logged and ignored.
pub fn parse_riot_identifier(match_history_url: &str) -> Option<RiotGameIdentifier> {
    if !match_history_url.contains(RIOT_MATCH_HISTORY_HOST) {
        return None;
    }

    let identifier = parse_match_history(match_history_url.trim());
    if identifier.is_none() {
        tracing::warn!(
            "⚠️ [TRANSMUTER] unparsable Riot match history link: {}",
            match_history_url
        );
    }

    identifier
}

fn parse_match_history(match_history_url: &str) -> Option<RiotGameIdentifier> {
    let url = Url::parse(match_history_url).ok()?;
    if !url.host_str()?.ends_with(RIOT_MATCH_HISTORY_HOST) {
        return None;
    }

    // The identifiers live in the fragment: `match-details/<platform>/<game id>?gameHash=<hash>`
    let (path, query) = url.fragment()?.split_once('?')?;
    let game_hash = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "gameHash")
        .map(|(_, value)| value.into_owned())
        .filter(|hash| !hash.is_empty())?;

    let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
    let game_id = segments.next()?.parse().ok()?;
    let platform_id = segments.next()?.to_string();

    Some(RiotGameIdentifier {
        platform_id,
        game_id,
        game_hash,
    })
}
