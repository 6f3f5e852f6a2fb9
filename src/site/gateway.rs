use std::num::NonZeroU32;
use std::sync::Arc;

use super::{CargoQuery, CargoTransport, Page, Row, metrics::QueryMetrics};
use crate::error::ParserResult;

/// Issues as many bounded cargo queries as needed to assemble a full result set.
#[derive(Debug, Clone)]
pub struct QueryGateway {
    transport: Arc<dyn CargoTransport>,
    page_size: NonZeroU32,
    metrics: Arc<QueryMetrics>,
}

impl QueryGateway {
    pub fn new(transport: Arc<dyn CargoTransport>, page_size: NonZeroU32) -> Self {
        Self {
            transport,
            page_size,
            metrics: QueryMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &Arc<QueryMetrics> {
        &self.metrics
    }

    /// Spawn a task logging periodic metrics about the queried tables.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    /// Every row matching the query, in source order.
    ///
    /// Pages are requested with an increasing offset until one comes back
    /// with fewer rows than requested. Transport errors are returned as is.
    pub async fn query(&self, query: &CargoQuery) -> ParserResult<Vec<Row>> {
        query.validate()?;

        let mut rows: Vec<Row> = Vec::new();
        let mut pages = 0;

        loop {
            let fetched = rows.len() as u32;
            let limit = match query.limit {
                Some(max) => self.page_size.get().min(max.saturating_sub(fetched)),
                None => self.page_size.get(),
            };

            if limit == 0 {
                break;
            }

            let page = self
                .transport
                .fetch_page(
                    query,
                    Page {
                        limit,
                        offset: fetched,
                    },
                )
                .await?;
            pages += 1;

            let received = page.len();
            rows.extend(page);

            if received < limit as usize {
                break;
            }
        }

        self.metrics.record(&query.tables, pages, rows.len() as u64);
        tracing::trace!(
            "[SITE::GATEWAY] {} rows in {} pages from {:?}",
            rows.len(),
            pages,
            query.tables
        );

        Ok(rows)
    }
}
