//! The orchestrator proper: state table, cap checks, and the commit pipeline

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use uuid::Uuid;

use crate::gate::OperatorGate;
use crate::observability::{LogEvent, Logger};
use crate::pool::Roster;
use crate::sequencer::{CancelToken, DrawPhase, Sequencer, SpinOutcome, SpinTiming};
use crate::store::{won_names, Winner, WinnerDraw, WinnerStore};

use super::caps::DrawCaps;
use super::errors::{DrawError, DrawResult};
use super::events::{DrawEvent, EventHub};

/// Tunable draw behavior, usually mapped from the configuration file.
#[derive(Debug, Clone)]
pub struct DrawSettings {
    pub caps: DrawCaps,
    pub timing: SpinTiming,
    /// Pause between successive draws in a batch
    pub draw_pause: Duration,
    pub prize_per_winner: u64,
    pub total_prize_pool: u64,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            caps: DrawCaps::default(),
            timing: SpinTiming::default(),
            draw_pause: Duration::from_millis(2000),
            prize_per_winner: 5000,
            total_prize_pool: 30_000,
        }
    }
}

impl DrawSettings {
    /// Settings compressed for tests.
    pub fn fast() -> Self {
        Self {
            timing: SpinTiming::fast(),
            draw_pause: Duration::from_millis(1),
            ..Self::default()
        }
    }
}

/// Committed-winner counts as last read from the store.
#[derive(Debug, Clone, Default)]
pub struct WinnerTally {
    pub by_category: HashMap<String, usize>,
    pub total: usize,
    /// Names excluded from every selection pool
    pub names: HashSet<String>,
}

impl WinnerTally {
    fn from_winners(winners: &[Winner]) -> Self {
        let mut by_category: HashMap<String, usize> = HashMap::new();
        for winner in winners {
            *by_category.entry(winner.category.clone()).or_default() += 1;
        }
        Self {
            by_category,
            total: winners.len(),
            names: won_names(winners),
        }
    }

    /// Committed winners in one category.
    pub fn count(&self, category: &str) -> usize {
        self.by_category.get(category).copied().unwrap_or(0)
    }
}

struct CategoryState {
    phase: DrawPhase,
    cancel: CancelToken,
}

impl Default for CategoryState {
    fn default() -> Self {
        Self {
            phase: DrawPhase::Idle,
            cancel: CancelToken::new(),
        }
    }
}

/// Coordinates draw sequences, caps, and the winner store.
pub struct Orchestrator {
    roster: Roster,
    store: Arc<dyn WinnerStore>,
    gate: OperatorGate,
    settings: DrawSettings,
    sequencer: Sequencer,
    states: RwLock<HashMap<String, CategoryState>>,
    /// Last-known counts, served when the store is degraded
    tally: RwLock<WinnerTally>,
    events: EventHub,
}

impl Orchestrator {
    pub fn new(
        roster: Roster,
        store: Arc<dyn WinnerStore>,
        gate: OperatorGate,
        settings: DrawSettings,
    ) -> Self {
        let states = roster
            .categories()
            .iter()
            .map(|c| (c.clone(), CategoryState::default()))
            .collect();

        let orchestrator = Self {
            roster,
            store,
            gate,
            sequencer: Sequencer::new(settings.timing),
            settings,
            states: RwLock::new(states),
            tally: RwLock::new(WinnerTally::default()),
            events: EventHub::new(),
        };
        orchestrator.refresh_tally();
        orchestrator
    }

    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    pub fn categories(&self) -> &[String] {
        self.roster.categories()
    }

    /// Subscribe to spin ticks and winner events.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<DrawEvent> {
        self.events.subscribe()
    }

    /// Current phase of a category's sequence.
    pub fn phase(&self, category: &str) -> DrawPhase {
        self.states
            .read()
            .ok()
            .and_then(|s| s.get(category).map(|state| state.phase))
            .unwrap_or_default()
    }

    /// Committed-winner counts, re-read from the store when reachable and
    /// served from the last-known copy otherwise.
    pub fn tally(&self) -> WinnerTally {
        self.refresh_tally()
    }

    /// Prize money not yet committed to winners.
    pub fn remaining_prize_pool(&self) -> u64 {
        let total = self.tally().total as u64;
        self.settings
            .total_prize_pool
            .saturating_sub(total * self.settings.prize_per_winner)
    }

    /// Whether a category can accept a draw right now, caps-wise.
    pub fn can_draw(&self, category: &str) -> bool {
        let tally = self.tally();
        self.settings.caps.category_open(tally.count(category))
            && self.settings.caps.global_open(tally.total)
    }

    /// Draw one winner from a category.
    ///
    /// Rejected when the category or global cap is reached or a sequence is
    /// already active for the category. An empty remaining pool is a no-op:
    /// `Ok(None)`, no record created.
    pub async fn draw_one(&self, category: &str) -> DrawResult<Option<Winner>> {
        self.ensure_category(category)?;
        Logger::debug(LogEvent::DrawRequested, &[("category", category)]);

        let tally = self.refresh_tally();
        self.check_caps(category, &tally)?;

        let pool = self.roster.remaining(category, &tally.names)?;
        if pool.is_empty() {
            Logger::info(LogEvent::PoolEmpty, &[("category", category)]);
            return Ok(None);
        }

        let cancel = self.begin(category)?;
        Logger::info(
            LogEvent::SpinBegin,
            &[("category", category), ("pool_size", &pool.len().to_string())],
        );

        let outcome = self
            .sequencer
            .animate(
                &pool,
                |name| {
                    self.events.publish(DrawEvent::SpinTick {
                        category: category.to_string(),
                        name: name.to_string(),
                    });
                },
                &cancel,
            )
            .await;

        if outcome == SpinOutcome::Cancelled {
            Logger::info(LogEvent::SpinCancelled, &[("category", category)]);
            self.finish(category);
            self.events.publish(DrawEvent::DrawCancelled {
                category: category.to_string(),
            });
            return Ok(None);
        }

        self.set_phase(category, DrawPhase::Settling);
        let chosen = match self.sequencer.settle(&pool) {
            Some(candidate) => candidate,
            None => {
                self.finish(category);
                return Ok(None);
            }
        };
        Logger::info(
            LogEvent::SpinSettled,
            &[("category", category), ("name", &chosen.name)],
        );

        // Commit pipeline: durable record, visible counts, winner event,
        // then release the category lock. Order matters.
        let draw = WinnerDraw {
            name: chosen.name.clone(),
            supervisor: chosen.supervisor.clone(),
            category: chosen.category.clone(),
            prize_amount: self.settings.prize_per_winner,
        };
        let committed = match self.store.insert(&draw) {
            Ok(winner) => winner,
            Err(e) => {
                Logger::error(
                    LogEvent::StoreWriteFailed,
                    &[("category", category), ("error", &e.to_string())],
                );
                self.finish(category);
                return Err(e.into());
            }
        };

        self.absorb_commit(&committed);
        self.refresh_tally();
        Logger::info(
            LogEvent::WinnerCommitted,
            &[
                ("category", category),
                ("name", &committed.name),
                ("winner_id", &committed.id.to_string()),
            ],
        );
        self.events.publish(DrawEvent::WinnerCommitted {
            winner: committed.clone(),
        });
        self.finish(category);

        Ok(Some(committed))
    }

    /// Draw winners for a category until its cap, the global cap, or the
    /// remaining pool is exhausted, pausing between successive draws and
    /// re-reading committed state between iterations.
    ///
    /// Cap and pool exhaustion stop the batch without error; a store write
    /// failure stops it early with the winners committed so far.
    pub async fn draw_all(&self, category: &str) -> DrawResult<Vec<Winner>> {
        self.ensure_category(category)?;
        Logger::info(LogEvent::BatchBegin, &[("category", category)]);

        let mut committed = Vec::new();
        loop {
            let tally = self.refresh_tally();
            if !self.settings.caps.category_open(tally.count(category))
                || !self.settings.caps.global_open(tally.total)
            {
                break;
            }

            if !committed.is_empty() {
                sleep(self.settings.draw_pause).await;
            }

            match self.draw_one(category).await {
                Ok(Some(winner)) => committed.push(winner),
                Ok(None) => break,
                Err(e) if e.is_rejection() => break,
                Err(DrawError::Store(_)) => break,
                Err(e) => return Err(e),
            }
        }

        Logger::info(
            LogEvent::BatchComplete,
            &[
                ("category", category),
                ("committed", &committed.len().to_string()),
            ],
        );
        self.events.publish(DrawEvent::BatchComplete {
            category: category.to_string(),
            committed: committed.len(),
        });
        Ok(committed)
    }

    /// Operator-gated delete of a committed winner.
    pub fn delete_winner(&self, id: Uuid, secret: &str) -> DrawResult<Winner> {
        if !self.gate.verify(secret) {
            Logger::warn(LogEvent::GateRejected, &[("winner_id", &id.to_string())]);
            return Err(DrawError::GateRejected);
        }
        let removed = self.store.delete(id)?;
        self.absorb_delete(&removed);
        self.refresh_tally();
        Logger::info(
            LogEvent::WinnerDeleted,
            &[("winner_id", &id.to_string()), ("name", &removed.name)],
        );
        Ok(removed)
    }

    /// Update the operator secret.
    pub fn set_operator_secret(&self, secret: &str) {
        self.gate.set_secret(secret);
        Logger::info(LogEvent::GateSecretUpdated, &[]);
    }

    /// Cancel every in-flight sequence. Each stops at its next tick
    /// boundary and returns its category to Idle without committing.
    /// Stored winners are untouched.
    pub fn cancel_all(&self) {
        if let Ok(states) = self.states.read() {
            for state in states.values() {
                state.cancel.cancel();
            }
        }
    }

    fn ensure_category(&self, category: &str) -> DrawResult<()> {
        if self.roster.has_category(category) {
            Ok(())
        } else {
            Err(DrawError::UnknownCategory(category.to_string()))
        }
    }

    fn check_caps(&self, category: &str, tally: &WinnerTally) -> DrawResult<()> {
        if !self.settings.caps.category_open(tally.count(category)) {
            Logger::info(
                LogEvent::DrawRejected,
                &[("category", category), ("reason", "category_cap")],
            );
            return Err(DrawError::CategoryCapReached(category.to_string()));
        }
        if !self.settings.caps.global_open(tally.total) {
            Logger::info(
                LogEvent::DrawRejected,
                &[("category", category), ("reason", "global_cap")],
            );
            return Err(DrawError::GlobalCapReached);
        }
        Ok(())
    }

    /// Fold a committed winner into the cached counts. Keeps caps and name
    /// exclusion correct when the store's read path is down but writes
    /// still land; a successful re-read overwrites this with the same data.
    fn absorb_commit(&self, winner: &Winner) {
        if let Ok(mut cached) = self.tally.write() {
            *cached
                .by_category
                .entry(winner.category.clone())
                .or_default() += 1;
            cached.total += 1;
            cached.names.insert(winner.name.clone());
        }
    }

    /// Remove a deleted winner from the cached counts.
    fn absorb_delete(&self, winner: &Winner) {
        if let Ok(mut cached) = self.tally.write() {
            if let Some(count) = cached.by_category.get_mut(&winner.category) {
                *count = count.saturating_sub(1);
            }
            cached.total = cached.total.saturating_sub(1);
            cached.names.remove(&winner.name);
        }
    }

    /// Re-read counts from the store; on failure, log and serve the cached
    /// copy so draws can proceed against last-known state.
    fn refresh_tally(&self) -> WinnerTally {
        match self.store.list() {
            Ok(winners) => {
                let tally = WinnerTally::from_winners(&winners);
                if let Ok(mut cached) = self.tally.write() {
                    *cached = tally.clone();
                }
                tally
            }
            Err(e) => {
                Logger::warn(LogEvent::StoreDegraded, &[("error", &e.to_string())]);
                self.tally.read().map(|t| t.clone()).unwrap_or_default()
            }
        }
    }

    /// Idle -> Animating, installing a fresh cancellation token. Rejected
    /// if any sequence is active for the category.
    fn begin(&self, category: &str) -> DrawResult<CancelToken> {
        let mut states = self
            .states
            .write()
            .map_err(|_| DrawError::Internal("state table lock poisoned"))?;
        let state = states.entry(category.to_string()).or_default();
        if !state.phase.accepts_draw() {
            Logger::info(
                LogEvent::DrawRejected,
                &[("category", category), ("reason", "draw_in_progress")],
            );
            return Err(DrawError::DrawInProgress(category.to_string()));
        }
        state.phase = DrawPhase::Animating;
        state.cancel = CancelToken::new();
        Ok(state.cancel.clone())
    }

    fn set_phase(&self, category: &str, phase: DrawPhase) {
        if let Ok(mut states) = self.states.write() {
            if let Some(state) = states.get_mut(category) {
                state.phase = phase;
            }
        }
    }

    /// Unconditional transition back to Idle.
    fn finish(&self, category: &str) {
        self.set_phase(category, DrawPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Candidate;
    use crate::store::MemoryStore;

    fn roster() -> Roster {
        Roster::new(vec![
            Candidate::new("Asha", "Priya", "APAC"),
            Candidate::new("Ben", "Priya", "APAC"),
            Candidate::new("Carla", "Miguel", "EMEA"),
        ])
        .unwrap()
    }

    fn orchestrator_with(store: Arc<MemoryStore>) -> Orchestrator {
        Orchestrator::new(
            roster(),
            store,
            OperatorGate::default(),
            DrawSettings::fast(),
        )
    }

    #[tokio::test]
    async fn draw_one_commits_a_winner() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = orchestrator_with(Arc::clone(&store));

        let winner = orchestrator.draw_one("APAC").await.unwrap().unwrap();
        assert_eq!(winner.category, "APAC");
        assert!(["Asha", "Ben"].contains(&winner.name.as_str()));
        assert_eq!(winner.prize_amount, 5000);
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(orchestrator.phase("APAC"), DrawPhase::Idle);
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let orchestrator = orchestrator_with(Arc::new(MemoryStore::new()));
        assert!(matches!(
            orchestrator.draw_one("LATAM").await,
            Err(DrawError::UnknownCategory(_))
        ));
    }

    #[tokio::test]
    async fn committed_names_never_repeat() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = orchestrator_with(Arc::clone(&store));

        let first = orchestrator.draw_one("APAC").await.unwrap().unwrap();
        let second = orchestrator.draw_one("APAC").await.unwrap().unwrap();
        assert_ne!(first.name, second.name);
    }

    #[tokio::test]
    async fn category_cap_rejects_further_draws() {
        let orchestrator = orchestrator_with(Arc::new(MemoryStore::new()));

        orchestrator.draw_one("APAC").await.unwrap().unwrap();
        orchestrator.draw_one("APAC").await.unwrap().unwrap();
        assert!(matches!(
            orchestrator.draw_one("APAC").await,
            Err(DrawError::CategoryCapReached(_))
        ));
    }

    #[tokio::test]
    async fn empty_pool_is_a_no_op() {
        let store = Arc::new(MemoryStore::new());
        // EMEA has a single candidate; once she wins the pool is empty.
        let orchestrator = orchestrator_with(Arc::clone(&store));
        orchestrator.draw_one("EMEA").await.unwrap().unwrap();

        let result = orchestrator.draw_one("EMEA").await.unwrap();
        assert!(result.is_none());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn store_write_failure_aborts_without_commit() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = orchestrator_with(Arc::clone(&store));

        store.set_fail_writes(true);
        let result = orchestrator.draw_one("APAC").await;
        assert!(matches!(result, Err(DrawError::Store(_))));
        assert_eq!(orchestrator.phase("APAC"), DrawPhase::Idle);

        store.set_fail_writes(false);
        assert_eq!(store.list().unwrap().len(), 0);
        // The name is still eligible.
        assert!(orchestrator.draw_one("APAC").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn draw_all_respects_category_cap() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = orchestrator_with(Arc::clone(&store));

        let committed = orchestrator.draw_all("APAC").await.unwrap();
        assert_eq!(committed.len(), 2);
        let names: Vec<_> = committed.iter().map(|w| w.name.as_str()).collect();
        assert_ne!(names[0], names[1]);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn draw_all_stops_on_pool_exhaustion() {
        let store = Arc::new(MemoryStore::new());
        // EMEA: cap is 2 but only one candidate exists.
        let orchestrator = orchestrator_with(Arc::clone(&store));

        let committed = orchestrator.draw_all("EMEA").await.unwrap();
        assert_eq!(committed.len(), 1);
    }

    #[tokio::test]
    async fn draw_all_at_cap_commits_nothing() {
        let orchestrator = orchestrator_with(Arc::new(MemoryStore::new()));
        orchestrator.draw_all("APAC").await.unwrap();

        let again = orchestrator.draw_all("APAC").await.unwrap();
        assert!(again.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_draw_on_same_category_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = Arc::new(Orchestrator::new(
            roster(),
            store,
            OperatorGate::default(),
            DrawSettings {
                timing: SpinTiming {
                    duration_ms: 500,
                    start_interval_ms: 5,
                    end_interval_ms: 5,
                },
                ..DrawSettings::fast()
            },
        ));

        let first = {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move { orchestrator.draw_one("APAC").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(orchestrator.phase("APAC"), DrawPhase::Animating);
        assert!(matches!(
            orchestrator.draw_one("APAC").await,
            Err(DrawError::DrawInProgress(_))
        ));

        assert!(first.await.unwrap().unwrap().is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cancel_all_stops_in_flight_draws_without_commit() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = Arc::new(Orchestrator::new(
            roster(),
            Arc::clone(&store) as Arc<dyn WinnerStore>,
            OperatorGate::default(),
            DrawSettings {
                timing: SpinTiming {
                    duration_ms: 5000,
                    start_interval_ms: 5,
                    end_interval_ms: 5,
                },
                ..DrawSettings::fast()
            },
        ));

        let draw = {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move { orchestrator.draw_one("APAC").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        orchestrator.cancel_all();

        let result = draw.await.unwrap().unwrap();
        assert!(result.is_none());
        assert!(store.list().unwrap().is_empty());
        assert_eq!(orchestrator.phase("APAC"), DrawPhase::Idle);
    }

    #[tokio::test]
    async fn degraded_store_reads_serve_cached_counts() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = orchestrator_with(Arc::clone(&store));
        orchestrator.draw_one("APAC").await.unwrap().unwrap();

        store.set_fail_reads(true);
        let tally = orchestrator.tally();
        assert_eq!(tally.count("APAC"), 1);
        assert_eq!(tally.total, 1);

        // Draws still proceed against last-known state.
        let winner = orchestrator.draw_one("APAC").await.unwrap().unwrap();
        assert!(!tally.names.contains(&winner.name));
    }

    #[tokio::test]
    async fn degraded_reads_still_enforce_caps_and_exclusions() {
        let store = Arc::new(MemoryStore::new());
        let roster = Roster::new(vec![
            Candidate::new("Asha", "Priya", "APAC"),
            Candidate::new("Ben", "Priya", "APAC"),
            Candidate::new("Carla", "Priya", "APAC"),
        ])
        .unwrap();
        let orchestrator = Orchestrator::new(
            roster,
            Arc::clone(&store) as Arc<dyn WinnerStore>,
            OperatorGate::default(),
            DrawSettings::fast(),
        );

        let first = orchestrator.draw_one("APAC").await.unwrap().unwrap();
        store.set_fail_reads(true);

        // Writes still land; commits must keep updating the cached counts.
        let second = orchestrator.draw_one("APAC").await.unwrap().unwrap();
        assert_ne!(second.name, first.name);

        assert!(matches!(
            orchestrator.draw_one("APAC").await,
            Err(DrawError::CategoryCapReached(_))
        ));

        store.set_fail_reads(false);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn degraded_reads_track_deletes_locally() {
        let store = Arc::new(MemoryStore::new());
        // EMEA has exactly one candidate.
        let orchestrator = orchestrator_with(Arc::clone(&store));
        let winner = orchestrator.draw_one("EMEA").await.unwrap().unwrap();

        store.set_fail_reads(true);
        orchestrator.delete_winner(winner.id, "admin123").unwrap();
        assert_eq!(orchestrator.tally().count("EMEA"), 0);

        let redrawn = orchestrator.draw_one("EMEA").await.unwrap().unwrap();
        assert_eq!(redrawn.name, winner.name);
    }

    #[tokio::test]
    async fn delete_requires_the_operator_secret() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = orchestrator_with(Arc::clone(&store));
        let winner = orchestrator.draw_one("APAC").await.unwrap().unwrap();

        assert!(matches!(
            orchestrator.delete_winner(winner.id, "wrong"),
            Err(DrawError::GateRejected)
        ));
        let removed = orchestrator.delete_winner(winner.id, "admin123").unwrap();
        assert_eq!(removed.id, winner.id);
        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn updated_secret_replaces_the_old_one() {
        let store = Arc::new(MemoryStore::new());
        let orchestrator = orchestrator_with(Arc::clone(&store));
        let winner = orchestrator.draw_one("APAC").await.unwrap().unwrap();

        orchestrator.set_operator_secret("hunter2");
        assert!(matches!(
            orchestrator.delete_winner(winner.id, "admin123"),
            Err(DrawError::GateRejected)
        ));
        orchestrator.delete_winner(winner.id, "hunter2").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleted_winner_becomes_eligible_again() {
        let store = Arc::new(MemoryStore::new());
        // EMEA has exactly one candidate.
        let orchestrator = orchestrator_with(Arc::clone(&store));
        let winner = orchestrator.draw_one("EMEA").await.unwrap().unwrap();
        assert!(orchestrator.draw_one("EMEA").await.unwrap().is_none());

        orchestrator.delete_winner(winner.id, "admin123").unwrap();
        let redrawn = orchestrator.draw_one("EMEA").await.unwrap().unwrap();
        assert_eq!(redrawn.name, "Carla");
    }

    #[tokio::test]
    async fn events_fire_through_the_commit_pipeline() {
        let orchestrator = orchestrator_with(Arc::new(MemoryStore::new()));
        let mut rx = orchestrator.subscribe();

        let winner = orchestrator.draw_one("APAC").await.unwrap().unwrap();

        let mut saw_tick = false;
        let mut saw_commit = false;
        while let Ok(event) = rx.try_recv() {
            match event {
                DrawEvent::SpinTick { category, .. } => {
                    assert_eq!(category, "APAC");
                    saw_tick = true;
                }
                DrawEvent::WinnerCommitted { winner: w } => {
                    assert_eq!(w.id, winner.id);
                    saw_commit = true;
                }
                _ => {}
            }
        }
        assert!(saw_tick);
        assert!(saw_commit);
    }

    #[tokio::test]
    async fn prize_pool_shrinks_per_winner() {
        let orchestrator = orchestrator_with(Arc::new(MemoryStore::new()));
        assert_eq!(orchestrator.remaining_prize_pool(), 30_000);
        orchestrator.draw_one("APAC").await.unwrap().unwrap();
        assert_eq!(orchestrator.remaining_prize_pool(), 25_000);
    }
}
