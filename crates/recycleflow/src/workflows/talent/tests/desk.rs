use super::common::*;
use crate::workflows::talent::desk::{EvaluationTrigger, TriggerRejection};
use crate::workflows::talent::notify::NotificationTone;
use std::sync::Arc;
use std::time::Duration;

const CRISIS_95_SUSTAIN_95_MOTIVATE_80: [u32; 3] = [25, 35, 10];

#[tokio::test(start_paused = true)]
async fn trigger_replaces_scores_and_logs_once() {
    let (desk, notifications) = small_desk(CRISIS_95_SUSTAIN_95_MOTIVATE_80.to_vec());
    let before = desk.activity_len();

    let outcome = desk.trigger_evaluation(&id("c1")).await;

    let evaluation = match outcome {
        EvaluationTrigger::Completed(evaluation) => evaluation,
        other => panic!("expected completed reassessment, got {other:?}"),
    };
    assert_eq!(evaluation.candidate_id, id("c1"));
    assert_eq!(evaluation.crisis_management, 95);
    assert_eq!(evaluation.sustainability_knowledge, 95);
    assert_eq!(evaluation.team_motivation, 80);
    assert_eq!(
        evaluation.ai_summary,
        "Exceptional crisis handling capabilities detected."
    );
    assert_eq!(desk.evaluation(&id("c1")), Some(evaluation));

    assert_eq!(desk.activity_len(), before + 1);
    let latest = desk.recent_activity(1);
    assert_eq!(latest[0].action, "AI Audit Complete: Liam Smith");
    assert_eq!(desk.evaluating(), None);

    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Assessment Complete");
    assert_eq!(events[0].message, "Updated profile for Liam Smith");
    assert_eq!(events[0].tone, NotificationTone::Success);
}

#[tokio::test(start_paused = true)]
async fn requests_while_busy_are_dropped() {
    let (desk, notifications) = small_desk(CRISIS_95_SUSTAIN_95_MOTIVATE_80.to_vec());
    let untouched = desk.evaluation(&id("c2"));

    let pending = desk.begin_evaluation(&id("c1")).expect("desk idle");
    assert_eq!(pending.candidate_name(), "Liam Smith");

    for target in ["c2", "c1"] {
        match desk.trigger_evaluation(&id(target)).await {
            EvaluationTrigger::Rejected(TriggerRejection::Busy { in_flight }) => {
                assert_eq!(in_flight, id("c1"));
            }
            other => panic!("expected busy rejection for {target}, got {other:?}"),
        }
    }
    assert_eq!(desk.evaluating(), Some(id("c1")));
    assert_eq!(desk.evaluation(&id("c2")), untouched);
    assert_eq!(desk.activity_len(), 2);

    desk.complete_evaluation(pending).await;
    assert_eq!(desk.evaluating(), None);
    assert_eq!(desk.activity_len(), 3);
    assert_eq!(notifications.events().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn unknown_candidate_is_a_silent_no_op() {
    let (desk, notifications) = small_desk(Vec::new());
    let start = tokio::time::Instant::now();

    let outcome = desk.trigger_evaluation(&id("c99")).await;

    assert_eq!(
        outcome,
        EvaluationTrigger::Rejected(TriggerRejection::NotFound)
    );
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(desk.evaluating(), None);
    assert_eq!(desk.activity_len(), 2);
    assert!(notifications.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn scores_change_only_after_the_full_delay() {
    let (desk, _notifications) = small_desk(CRISIS_95_SUSTAIN_95_MOTIVATE_80.to_vec());
    let original = desk.evaluation(&id("c1"));
    let start = tokio::time::Instant::now();

    let worker = Arc::clone(&desk);
    let handle = tokio::spawn(async move { worker.trigger_evaluation(&id("c1")).await });

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(desk.evaluating(), Some(id("c1")));
    assert_eq!(desk.evaluation(&id("c1")), original);

    let outcome = handle.await.expect("reassessment task joins");
    assert!(matches!(outcome, EvaluationTrigger::Completed(_)));
    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert_ne!(desk.evaluation(&id("c1")), original);
}

#[tokio::test(start_paused = true)]
async fn missing_evaluation_is_inserted_not_duplicated() {
    let (desk, _notifications) = small_desk(vec![0, 0, 0]);

    let before = desk.candidate(&id("c3")).expect("c3 exists");
    assert_eq!(before.total_score, 0.0);

    desk.trigger_evaluation(&id("c3")).await;
    desk.trigger_evaluation(&id("c3")).await;

    let after = desk.candidate(&id("c3")).expect("c3 exists");
    assert_eq!(after.scores.crisis_management, 70);
    assert_eq!(after.scores.sustainability_knowledge, 60);
    assert_eq!(after.scores.team_motivation, 70);
    assert_eq!(
        after.scores.ai_summary,
        "Balanced performance across all metrics."
    );
    assert!((after.total_score - 200.0 / 30.0).abs() < 1e-9);
    assert_eq!(desk.skill_matrix().crisis.total(), 3);
}

#[tokio::test(start_paused = true)]
async fn desk_accepts_new_work_after_completion() {
    let (desk, notifications) = small_desk(vec![0, 0, 0, 30, 40, 30]);

    desk.trigger_evaluation(&id("c1")).await;
    let second = desk.trigger_evaluation(&id("c2")).await;

    match second {
        EvaluationTrigger::Completed(evaluation) => {
            assert_eq!(evaluation.crisis_management, 100);
            assert_eq!(evaluation.sustainability_knowledge, 100);
            assert_eq!(evaluation.team_motivation, 100);
        }
        other => panic!("expected second reassessment to run, got {other:?}"),
    }
    let actions: Vec<String> = desk
        .recent_activity(3)
        .into_iter()
        .map(|entry| entry.action)
        .collect();
    assert_eq!(
        actions,
        vec![
            "AI Audit Complete: Olivia Johnson",
            "AI Audit Complete: Liam Smith",
            "System Ready - Mock Mode",
        ]
    );
    assert_eq!(notifications.events().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn cancelled_trigger_still_finishes_in_background() {
    let (desk, notifications) = small_desk(CRISIS_95_SUSTAIN_95_MOTIVATE_80.to_vec());

    let cut_short = tokio::time::timeout(
        Duration::from_millis(100),
        desk.trigger_evaluation(&id("c1")),
    )
    .await;
    assert!(cut_short.is_err());
    assert_eq!(desk.evaluating(), Some(id("c1")));

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(desk.evaluating(), None);
    let stored = desk.evaluation(&id("c1")).expect("c1 evaluated");
    assert_eq!(stored.crisis_management, 95);
    assert_eq!(desk.recent_activity(1)[0].action, "AI Audit Complete: Liam Smith");
    assert_eq!(notifications.events().len(), 1);

    let next = desk.trigger_evaluation(&id("c2")).await;
    assert!(matches!(next, EvaluationTrigger::Completed(_)));
}

#[tokio::test(start_paused = true)]
async fn dropped_completion_releases_the_desk() {
    let (desk, notifications) = small_desk(CRISIS_95_SUSTAIN_95_MOTIVATE_80.to_vec());
    let untouched = desk.evaluation(&id("c1"));

    let pending = desk.begin_evaluation(&id("c1")).expect("desk idle");
    let cut_short =
        tokio::time::timeout(Duration::from_millis(100), desk.complete_evaluation(pending)).await;

    assert!(cut_short.is_err());
    assert_eq!(desk.evaluating(), None);
    assert_eq!(desk.evaluation(&id("c1")), untouched);
    assert_eq!(desk.activity_len(), 2);
    assert!(notifications.events().is_empty());

    let retry = desk.trigger_evaluation(&id("c1")).await;
    assert!(matches!(retry, EvaluationTrigger::Completed(_)));
}

#[tokio::test(start_paused = true)]
async fn spawned_completion_outlives_its_handle() {
    let (desk, _notifications) = small_desk(CRISIS_95_SUSTAIN_95_MOTIVATE_80.to_vec());

    let pending = desk.begin_evaluation(&id("c2")).expect("desk idle");
    assert_eq!(pending.candidate_id(), &id("c2"));
    drop(desk.spawn_evaluation(pending));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(desk.evaluating(), None);
    let stored = desk.evaluation(&id("c2")).expect("c2 evaluated");
    assert_eq!(stored.team_motivation, 80);
}

#[test]
fn share_requires_known_candidate() {
    let (desk, notifications) = small_desk(Vec::new());

    let link = desk.share(&id("c2")).expect("c2 exists");
    assert_eq!(link, "https://talent.recycleflow.test/candidates/c2");
    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Shared");
    assert_eq!(events[0].tone, NotificationTone::Info);

    assert!(desk.share(&id("c42")).is_err());
    assert_eq!(notifications.events().len(), 1);
}
