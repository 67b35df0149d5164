use crate::infra::{bootstrap_desk, InMemoryNotificationCenter, ServiceDesk};
use chrono::Local;
use clap::Args;
use recycleflow::config::AppConfig;
use recycleflow::error::AppError;
use recycleflow::workflows::talent::{
    CandidateId, CandidateWithScore, EvaluationTrigger, SkillTier, TriggerRejection,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for a reproducible roster (defaults to APP_RANDOM_SEED, then entropy).
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of leaderboard rows to print.
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Candidate to reassess (defaults to the lowest ranked candidate).
    #[arg(long)]
    pub(crate) evaluate: Option<String>,
    /// Override the simulated scoring latency in milliseconds.
    #[arg(long)]
    pub(crate) latency_ms: Option<u64>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        top,
        evaluate,
        latency_ms,
    } = args;

    let config = AppConfig::load()?;
    let mut settings = config.desk_settings();
    if let Some(latency_ms) = latency_ms {
        settings.evaluation_latency = Duration::from_millis(latency_ms);
    }

    let notifications = Arc::new(InMemoryNotificationCenter::default());
    let desk = Arc::new(bootstrap_desk(
        seed.or(config.talent.random_seed),
        notifications.clone(),
        settings,
    ));

    println!(
        "RecycleFlow Intelligence (mock simulation) - {}",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    render_leaderboard(&desk, top);
    render_skill_distribution(&desk);

    let target = match evaluate {
        Some(raw) => CandidateId(raw),
        None => match desk.scored_population().last() {
            Some(entry) => entry.candidate.id.clone(),
            None => {
                println!("\nNo candidates available for reassessment");
                return Ok(());
            }
        },
    };

    println!(
        "\nRequesting AI reassessment for {} ({} ms simulated latency)",
        target,
        desk.settings().evaluation_latency.as_millis()
    );
    match desk.trigger_evaluation(&target).await {
        EvaluationTrigger::Completed(evaluation) => {
            println!(
                "- crisis {} | sustainability {} | motivation {}",
                evaluation.crisis_management,
                evaluation.sustainability_knowledge,
                evaluation.team_motivation
            );
            println!("- {}", evaluation.ai_summary);
            if let Ok(detail) = desk.candidate(&target) {
                println!(
                    "- new index {:.2}, now ranked #{}",
                    detail.total_score, detail.rank
                );
            }
        }
        EvaluationTrigger::Rejected(TriggerRejection::NotFound) => {
            println!("- ignored: no candidate with id {target}");
        }
        EvaluationTrigger::Rejected(TriggerRejection::Busy { in_flight }) => {
            println!("- ignored: reassessment for {in_flight} still running");
        }
        EvaluationTrigger::Interrupted(candidate_id) => {
            println!("- interrupted before scores for {candidate_id} were stored");
        }
    }

    println!("\nRecent activity");
    for entry in desk.recent_activity(3) {
        println!("- {} {}", entry.time, entry.action);
    }

    let events = notifications.events();
    if events.is_empty() {
        println!("\nNotifications: none");
    } else {
        println!("\nNotifications");
        for event in events {
            println!("- {}: {}", event.title, event.message);
        }
    }

    if let Ok(link) = desk.share(&target) {
        println!("\nShare link: {link}");
    }

    Ok(())
}

fn render_leaderboard(desk: &ServiceDesk, top: usize) {
    println!("\nTop candidates");
    for entry in desk.leaderboard(top) {
        println!("{}", leaderboard_row(&entry));
    }
}

fn leaderboard_row(entry: &CandidateWithScore) -> String {
    format!(
        "#{:<3} {:<22} {:<22} {:>5.2}",
        entry.rank,
        entry.candidate.name,
        entry.candidate.previous_role.label(),
        entry.total_score
    )
}

fn render_skill_distribution(desk: &ServiceDesk) {
    println!("\n{}", distribution_header());
    for row in desk.skill_matrix().rows() {
        println!(
            "- {:<9} {:>3} / {:>3} / {:>3}",
            row.label, row.low, row.medium, row.high
        );
    }
}

fn distribution_header() -> String {
    let tiers = [SkillTier::Low, SkillTier::Medium, SkillTier::High].map(SkillTier::label);
    format!("Skill distribution ({})", tiers.join(" / "))
}
