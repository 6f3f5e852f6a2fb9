use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

/// Traffic recorded for one set of joined tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub queries: u64,
    pub pages: u64,
    pub rows: u64,
}

impl TableStats {
    /// Average fill of the pages, low values meaning many round trips for few rows.
    pub fn rows_per_page(&self) -> f64 {
        if self.pages == 0 {
            0.0
        } else {
            self.rows as f64 / self.pages as f64
        }
    }
}

/// Cargo traffic of a [`QueryGateway`](super::QueryGateway), keyed by the queried tables.
#[derive(Debug)]
pub struct QueryMetrics {
    start: Instant,
    tables: Mutex<BTreeMap<String, TableStats>>,
}

impl QueryMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            tables: Mutex::new(BTreeMap::new()),
        })
    }

    /// Records a completed query over `tables` that took `pages` round trips.
    pub fn record(&self, tables: &[String], pages: u64, rows: u64) {
        let mut stats = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = stats.entry(tables.join(", ")).or_default();
        entry.queries += 1;
        entry.pages += pages;
        entry.rows += rows;
    }

    /// Stats per table set, ordered by table names.
    pub fn snapshot(&self) -> Vec<(String, TableStats)> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(tables, stats)| (tables.clone(), *stats))
            .collect()
    }

    /// Sum over every table set.
    pub fn total(&self) -> TableStats {
        self.snapshot()
            .into_iter()
            .fold(TableStats::default(), |acc, (_, stats)| TableStats {
                queries: acc.queries + stats.queries,
                pages: acc.pages + stats.pages,
                rows: acc.rows + stats.rows,
            })
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            let span = info_span!("📊 ", gateway = "leaguepedia");
            async {
                interval.tick().await;
                let total = self.total();
                let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
                let avg = if elapsed_min > 0.0 {
                    total.pages as f64 / elapsed_min
                } else {
                    0.0
                };
                tracing::info!(
                    "{} cargo queries, {} pages (avg {:.2} pages/min), {:.1} rows/page",
                    total.queries,
                    total.pages,
                    avg,
                    total.rows_per_page()
                );
                for (tables, stats) in self.snapshot() {
                    tracing::debug!(
                        "{}: {} queries, {} pages, {:.1} rows/page",
                        tables,
                        stats.queries,
                        stats.pages,
                        stats.rows_per_page()
                    );
                }
            }
            .instrument(span)
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn queries_are_recorded_per_table_set() {
        let metrics = QueryMetrics::new();
        metrics.record(&tables(&["ScoreboardGames"]), 3, 1234);
        metrics.record(&tables(&["ScoreboardGames"]), 1, 10);
        metrics.record(&tables(&["PicksAndBansS7", "ScoreboardGames"]), 1, 1);

        let snapshot = metrics.snapshot();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].0, "PicksAndBansS7, ScoreboardGames");
        assert_eq!(
            snapshot[1].1,
            TableStats {
                queries: 2,
                pages: 4,
                rows: 1244
            }
        );
        assert_eq!(metrics.total().pages, 5);
    }

    #[test]
    fn rows_per_page_of_empty_stats_is_zero() {
        assert_eq!(TableStats::default().rows_per_page(), 0.0);
        assert_eq!(
            TableStats {
                queries: 1,
                pages: 4,
                rows: 1000
            }
            .rows_per_page(),
            250.0
        );
    }

    #[tokio::test]
    async fn log_loop_runs_once() {
        tokio::time::pause();

        let metrics = QueryMetrics::new();
        metrics.record(&tables(&["Tournaments"]), 1, 12);
        let cloned = metrics.clone();
        let handle = tokio::spawn(async move { cloned.log_loop().await });

        tokio::time::advance(Duration::from_secs(61)).await;
        handle.abort();
        let _ = handle.await;
    }
}
