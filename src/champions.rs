//! Champion name to identifier resolution.

use std::collections::HashMap;
use std::fmt::Debug;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    error::{ParserError, ParserResult},
    types::Champion,
};

const DDRAGON_ROUTE: &str = "https://ddragon.leagueoflegends.com/cdn";

/// Names Leaguepedia writes differently from Data Dragon.
const WIKI_ALIASES: [(&str, &str); 3] = [
    ("Nunu", "Nunu & Willump"),
    ("Renata", "Renata Glasc"),
    ("Wukong", "MonkeyKing"),
];

/// Opaque capability giving a stable identifier for a champion name.
pub trait ChampionLookup: Send + Sync + Debug {
    fn champion_id(&self, name: &str) -> Option<u16>;

    /// The champion as written by the source, with its identifier when known.
    fn champion(&self, name: &str) -> Champion {
        let name = name.trim();
        Champion {
            name: name.to_string(),
            id: self.champion_id(name),
        }
    }
}

/// In-memory champion table, insensitive to case, spaces and punctuation.
#[derive(Debug, Clone, Default)]
pub struct ChampionTable {
    ids: HashMap<String, u16>,
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl ChampionTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u16)>) -> Self {
        let mut table = Self::default();
        for (name, id) in pairs {
            table.insert(name, id);
        }
        table
    }

    pub fn insert(&mut self, name: &str, id: u16) {
        let key = normalize(name);
        if !key.is_empty() {
            self.ids.insert(key, id);
        }
    }

    /// Registers `alias` under the identifier of an already known `name`.
    pub fn insert_alias(&mut self, alias: &str, name: &str) {
        if let Some(id) = self.champion_id(name) {
            self.insert(alias, id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Loads the champion list of a Data Dragon version.
    pub async fn from_ddragon(client: &reqwest::Client, version: &str) -> ParserResult<Self> {
        let url = format!("{}/{}/data/en_US/champion.json", DDRAGON_ROUTE, version);
        Self::from_ddragon_url(client, &url).await
    }

    pub async fn from_ddragon_url(client: &reqwest::Client, url: &str) -> ParserResult<Self> {
        tracing::trace!("[CHAMPIONS] loading champion table from {}", url);

        let res = client.get(url).send().await?;
        let list: ChampionListDto = match res.status() {
            StatusCode::OK => serde_json::from_slice(&res.bytes().await?)?,
            status => return Err(ParserError::Status(status)),
        };

        let mut table = Self::default();
        for champion in list.data.into_values() {
            let Ok(id) = champion.key.parse::<u16>() else {
                tracing::warn!("⚠️ [CHAMPIONS] invalid key for {}", champion.id);
                continue;
            };
            table.insert(&champion.id, id);
            table.insert(&champion.name, id);
        }
        for (alias, name) in WIKI_ALIASES {
            table.insert_alias(alias, name);
        }

        tracing::info!("Loaded {} champion names", table.len());

        Ok(table)
    }
}

impl ChampionLookup for ChampionTable {
    fn champion_id(&self, name: &str) -> Option<u16> {
        self.ids.get(&normalize(name)).copied()
    }
}

/// Representation of the Data Dragon champion list.
#[derive(Deserialize, Debug)]
struct ChampionListDto {
    data: HashMap<String, ChampionDto>,
}

#[derive(Deserialize, Debug)]
struct ChampionDto {
    id: String,
    key: String,
    name: String,
}
