//! Draw sequencing: batch sizing, per-category exclusivity, and
//! cross-category concurrency.

use std::sync::Arc;
use std::time::Duration;

use spindraw::gate::OperatorGate;
use spindraw::orchestrator::{DrawCaps, DrawError, DrawSettings, Orchestrator};
use spindraw::pool::{Candidate, Roster};
use spindraw::sequencer::{DrawPhase, SpinTiming};
use spindraw::store::{MemoryStore, WinnerStore};

fn candidates(category: &str, count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| Candidate::new(format!("{}-{}", category, i), "Supervisor", category))
        .collect()
}

fn fast(caps: DrawCaps) -> DrawSettings {
    DrawSettings {
        caps,
        ..DrawSettings::fast()
    }
}

#[tokio::test]
async fn batch_size_is_min_of_slots_pool_and_global_remaining() {
    // N (category slots) = 4, M (pool) = 2, global remaining = 10
    let roster = Roster::new(candidates("APAC", 2)).unwrap();
    let store = Arc::new(MemoryStore::new());
    let orchestrator = Orchestrator::new(
        roster,
        Arc::clone(&store) as Arc<dyn WinnerStore>,
        OperatorGate::default(),
        fast(DrawCaps {
            per_category: 4,
            global: 10,
        }),
    );
    assert_eq!(orchestrator.draw_all("APAC").await.unwrap().len(), 2);

    // N = 4, M = 5, global remaining = 3
    let roster = Roster::new(candidates("EMEA", 5)).unwrap();
    let orchestrator = Orchestrator::new(
        roster,
        Arc::new(MemoryStore::new()),
        OperatorGate::default(),
        fast(DrawCaps {
            per_category: 4,
            global: 3,
        }),
    );
    assert_eq!(orchestrator.draw_all("EMEA").await.unwrap().len(), 3);

    // N = 2 is the tightest bound
    let roster = Roster::new(candidates("LATAM", 5)).unwrap();
    let orchestrator = Orchestrator::new(
        roster,
        Arc::new(MemoryStore::new()),
        OperatorGate::default(),
        fast(DrawCaps {
            per_category: 2,
            global: 10,
        }),
    );
    assert_eq!(orchestrator.draw_all("LATAM").await.unwrap().len(), 2);
}

fn slow_spin(caps: DrawCaps) -> DrawSettings {
    DrawSettings {
        caps,
        timing: SpinTiming {
            duration_ms: 1000,
            start_interval_ms: 5,
            end_interval_ms: 5,
        },
        ..DrawSettings::fast()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn second_draw_on_an_animating_category_is_rejected() {
    let roster = Roster::new(candidates("APAC", 3)).unwrap();
    let orchestrator = Arc::new(Orchestrator::new(
        roster,
        Arc::new(MemoryStore::new()),
        OperatorGate::default(),
        slow_spin(DrawCaps::default()),
    ));

    let inflight = {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move { orchestrator.draw_one("APAC").await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(orchestrator.phase("APAC"), DrawPhase::Animating);
    assert!(matches!(
        orchestrator.draw_one("APAC").await,
        Err(DrawError::DrawInProgress(_))
    ));

    assert!(inflight.await.unwrap().unwrap().is_some());
    assert_eq!(orchestrator.phase("APAC"), DrawPhase::Idle);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn categories_animate_independently() {
    let mut all = candidates("APAC", 3);
    all.extend(candidates("EMEA", 3));
    let roster = Roster::new(all).unwrap();
    let store = Arc::new(MemoryStore::new());
    let orchestrator = Arc::new(Orchestrator::new(
        roster,
        Arc::clone(&store) as Arc<dyn WinnerStore>,
        OperatorGate::default(),
        slow_spin(DrawCaps::default()),
    ));

    let apac = {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move { orchestrator.draw_one("APAC").await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    // EMEA is free while APAC is mid-spin.
    assert_eq!(orchestrator.phase("APAC"), DrawPhase::Animating);
    let emea = orchestrator.draw_one("EMEA").await.unwrap();
    assert!(emea.is_some());

    assert!(apac.await.unwrap().unwrap().is_some());
    assert_eq!(store.list().unwrap().len(), 2);
}

#[tokio::test]
async fn batch_re_reads_state_between_iterations() {
    // A batch must observe commits made before it started, through the
    // store re-read at each iteration.
    let mut all = candidates("APAC", 2);
    all.extend(candidates("EMEA", 2));
    let roster = Roster::new(all).unwrap();
    let store = Arc::new(MemoryStore::new());
    let orchestrator = Orchestrator::new(
        roster,
        Arc::clone(&store) as Arc<dyn WinnerStore>,
        OperatorGate::default(),
        fast(DrawCaps {
            per_category: 2,
            global: 3,
        }),
    );

    orchestrator.draw_all("APAC").await.unwrap();
    // Global remaining is now 1; the EMEA batch must observe that.
    let emea = orchestrator.draw_all("EMEA").await.unwrap();
    assert_eq!(emea.len(), 1);
    assert_eq!(store.list().unwrap().len(), 3);
}
