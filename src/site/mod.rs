//! Access to the Leaguepedia cargo tables.
//!
//! [`CargoTransport`] is the seam between the pagination logic of the
//! [`QueryGateway`] and the actual HTTP session ([`CargoClient`]).

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::ParserResult;

pub mod client;
pub mod gateway;
pub mod metrics;
pub mod query;
pub mod row;

pub use client::CargoClient;
pub use gateway::QueryGateway;
pub use query::{CargoQuery, Condition, Field};
pub use row::Row;

/// Window of rows requested in a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

/// Trait implemented by structures capable of performing a single bounded cargo query.
#[async_trait]
pub trait CargoTransport: Send + Sync + Debug {
    async fn fetch_page(&self, query: &CargoQuery, page: Page) -> ParserResult<Vec<Row>>;
}
