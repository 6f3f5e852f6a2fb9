use leaguepedia_parser::{
    Config, Leaguepedia, ParserError, Side, TournamentFilter, TournamentLevel,
};

const OVERVIEW_PAGES: [&str; 3] = [
    "LEC/2020 Season/Spring Season",
    "LCK/2020 Season/Spring Season",
    "LPL/2020 Season/Spring Season",
];

async fn parser() -> Leaguepedia {
    let config = Config::from_env().unwrap();
    Leaguepedia::from_config(&config).await.unwrap()
}

#[tokio::test]
#[ignore = "Network access required"]
async fn regions_contain_major_regions() {
    let regions = parser().await.regions().await.unwrap();

    for region in ["China", "Europe", "Korea"] {
        assert!(regions.iter().any(|r| r == region), "{region} missing");
    }
}

#[tokio::test]
#[ignore = "Network access required"]
async fn tournaments_are_found_for_2020() {
    let parser = parser().await;

    for region in ["China", "Europe", "Korea"] {
        let tournaments = parser
            .tournaments(&TournamentFilter::region(region).year(2020))
            .await
            .unwrap();

        assert!(!tournaments.is_empty());
        assert!(tournaments.iter().all(|t| t.level == TournamentLevel::Primary));
    }
}

#[tokio::test]
#[ignore = "Network access required"]
async fn games_are_ordered_by_start() {
    let parser = parser().await;

    for overview_page in OVERVIEW_PAGES {
        let games = parser.games(overview_page).await.unwrap();

        assert!(!games.is_empty());
        assert!(games.windows(2).all(|w| w[0].start <= w[1].start));
        assert!(
            games
                .iter()
                .all(|g| matches!(g.winner, Side::Blue | Side::Red))
        );
    }
}

#[tokio::test]
#[ignore = "Network access required"]
async fn enriched_games_have_full_teams_and_drafts() {
    let parser = parser().await;

    for overview_page in OVERVIEW_PAGES {
        let mut game = parser.games(overview_page).await.unwrap().remove(0);

        parser.enrich_game(&mut game, true).await.unwrap();

        assert_eq!(game.picks_bans.as_ref().map(Vec::len), Some(20));
        for (_, team) in game.teams() {
            assert_eq!(team.players.len(), 5);
            assert!(team.players.iter().all(|p| p.role.is_some()));
            assert!(team.players.iter().all(|p| p.identity.page_id.is_some()));
        }
    }
}

#[tokio::test]
#[ignore = "Network access required"]
async fn broken_game_ids_are_reconciled() {
    let parser = parser().await;
    let mut game = parser.games(OVERVIEW_PAGES[0]).await.unwrap().remove(0);
    game.sources.leaguepedia.game_id = "BUG".into();

    let picks_bans = parser.picks_bans(&game).await.unwrap();

    assert_eq!(picks_bans.map(|pb| pb.len()), Some(20));
}

#[tokio::test]
#[ignore = "Network access required"]
async fn broken_compositions_are_unresolvable() {
    let parser = parser().await;
    let mut game = parser.games(OVERVIEW_PAGES[0]).await.unwrap().remove(0);
    game.sources.leaguepedia.game_id = "BUG".into();
    game.blue.players[0].champion.name = "BUG".into();

    let res = parser.picks_bans(&game).await;

    assert!(matches!(res, Err(ParserError::UnresolvableDraft { .. })));
}

#[tokio::test]
#[ignore = "Network access required"]
async fn long_team_names_are_resolved() {
    let parser = parser().await;

    assert_eq!(
        parser.long_team_name("IG", None).await.unwrap().as_deref(),
        Some("Invictus Gaming")
    );
    assert_eq!(parser.long_team_name("mister mv", None).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "Network access required"]
async fn player_profiles_are_resolved() {
    let profile = parser().await.player("Faker").await.unwrap().unwrap();

    assert_eq!(profile.game_name, "Faker");
    assert_eq!(profile.page_name, "Faker");
}
