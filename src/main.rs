use std::process::ExitCode;

use leaguepedia_parser::{Config, Leaguepedia, ParserResult, TournamentFilter, logging};
use serde::Serialize;
use tracing::{error, info, warn};

const USAGE: &str = "usage: leaguepedia <command>

commands:
    regions
    tournaments <region> [year]
    games <tournament overview page>
    game <tournament overview page> <game index>
    team <trigram> [tournament overview page]
    player <player link>";

#[derive(Debug)]
enum Command {
    Regions,
    Tournaments { region: String, year: Option<i32> },
    Games { overview_page: String },
    Game { overview_page: String, index: usize },
    Team { trigram: String, event: Option<String> },
    Player { link: String },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let arg = |i: usize| args.get(i).cloned();

        let command = match args.first()?.as_str() {
            "regions" => Self::Regions,
            "tournaments" => Self::Tournaments {
                region: arg(1)?,
                year: match arg(2) {
                    Some(year) => Some(year.parse().ok()?),
                    None => None,
                },
            },
            "games" => Self::Games {
                overview_page: arg(1)?,
            },
            "game" => Self::Game {
                overview_page: arg(1)?,
                index: arg(2)?.parse().ok()?,
            },
            "team" => Self::Team {
                trigram: arg(1)?,
                event: arg(2),
            },
            "player" => Self::Player { link: arg(1)? },
            _ => return None,
        };

        Some(command)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> ParserResult<()> {
    let config = Config::from_env()?;
    info!("🐙 Starting...");

    let parser = Leaguepedia::from_config(&config).await?;

    match command {
        Command::Regions => print(&parser.regions().await?),
        Command::Tournaments { region, year } => {
            let mut filter = TournamentFilter::region(region);
            filter.year = year;
            print(&parser.tournaments(&filter).await?)
        }
        Command::Games { overview_page } => print(&parser.games(&overview_page).await?),
        Command::Game {
            overview_page,
            index,
        } => {
            let mut games = parser.games(&overview_page).await?;
            let Some(game) = games.get_mut(index) else {
                warn!("⚠️ {} only has {} games", overview_page, games.len());
                return print(&None::<()>);
            };

            parser.enrich_game(game, true).await?;
            print(&*game)
        }
        Command::Team { trigram, event } => {
            print(&parser.long_team_name(&trigram, event.as_deref()).await?)
        }
        Command::Player { link } => print(&parser.player(&link).await?),
    }
}

fn print<T: Serialize>(value: &T) -> ParserResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
