use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    ingest_requests: AtomicU64,
    ingest_players: AtomicU64,
    ingest_errors: AtomicU64,
    wipe_resets: AtomicU64,
}

impl Metrics {
    pub fn record_ingest(&self, player_count: usize) {
        self.ingest_requests.fetch_add(1, Ordering::Relaxed);
        self.ingest_players
            .fetch_add(player_count as u64, Ordering::Relaxed);
    }

    pub fn record_ingest_error(&self) {
        self.ingest_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_wipe_reset(&self) {
        self.wipe_resets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.ingest_requests.load(Ordering::Relaxed);
        let players = self.ingest_players.load(Ordering::Relaxed);
        let errors = self.ingest_errors.load(Ordering::Relaxed);
        let wipes = self.wipe_resets.load(Ordering::Relaxed);

        format!(
            "# TYPE ruststats_ingest_requests_total counter\n\
ruststats_ingest_requests_total {}\n\
# TYPE ruststats_ingest_players_total counter\n\
ruststats_ingest_players_total {}\n\
# TYPE ruststats_ingest_errors_total counter\n\
ruststats_ingest_errors_total {}\n\
# TYPE ruststats_wipe_resets_total counter\n\
ruststats_wipe_resets_total {}\n",
            requests, players, errors, wipes
        )
    }
}
