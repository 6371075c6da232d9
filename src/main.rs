//! Demo binary: runs one scripted decision sprint end to end and prints
//! the rendered commitment memo.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use decision_sprint::adapters::chat::ScriptedIntakeChat;
use decision_sprint::adapters::document::render_memo;
use decision_sprint::adapters::recommendation::{HttpRecommender, StaticRecommender};
use decision_sprint::adapters::storage::FileSprintStore;
use decision_sprint::application::SprintService;
use decision_sprint::config::AppConfig;
use decision_sprint::domain::diagnostic::{keys, AnswerValue};
use decision_sprint::domain::foundation::{SprintStage, Timestamp};
use decision_sprint::ports::FrameworkRecommender;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decision_sprint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let store = Arc::new(FileSprintStore::new(&config.storage.data_dir));
    let recommender: Arc<dyn FrameworkRecommender> = match &config.recommendation.endpoint {
        Some(endpoint) => {
            tracing::info!(%endpoint, "using HTTP recommender");
            Arc::new(HttpRecommender::new(
                endpoint.clone(),
                config.recommendation.api_key.clone(),
                config.recommendation.timeout(),
            )?)
        }
        None => {
            tracing::info!("no endpoint configured, using static catalog");
            Arc::new(StaticRecommender::with_default_catalog())
        }
    };

    let mut service = SprintService::new(store, recommender, config.recommendation.clone());
    let session_id = service.load_or_init().await;
    tracing::info!(%session_id, "sprint session ready");

    // Intake
    service
        .set_problem_input(
            "Should we pivot our product strategy and hire a dedicated \
             enterprise sales team before the next fundraising round?",
        )
        .await;
    let chat = ScriptedIntakeChat::with_default_script();
    service.run_intake_chat(&chat).await?;

    // Diagnostic interview
    service
        .add_diagnostic_response(keys::REVERSIBILITY, AnswerValue::from("Somewhat hard"))
        .await;
    service
        .add_diagnostic_response(keys::CONSEQUENCES, AnswerValue::from("Significant"))
        .await;
    service
        .add_diagnostic_response(keys::INFORMATION_QUALITY, AnswerValue::from(6.0))
        .await;
    service
        .add_diagnostic_response(keys::TIMEFRAME, AnswerValue::from("This month"))
        .await;
    service
        .add_diagnostic_response(keys::STAKEHOLDERS, AnswerValue::from(4.0))
        .await;
    service
        .add_diagnostic_response(keys::STAKES, AnswerValue::from("Twelve months of runway"))
        .await;
    service
        .mark_stage_completed(SprintStage::DiagnosticInterview)
        .await;

    // Classification
    let decision_type = service.run_classification().await;
    tracing::info!(?decision_type, "decision classified");
    service
        .mark_stage_completed(SprintStage::DecisionClassification)
        .await;

    // Problem brief
    service.advance_to(SprintStage::ProblemBrief).await;
    service.generate_problem_brief().await?;
    service.confirm_problem_brief().await?;
    service.mark_stage_completed(SprintStage::ProblemBrief).await;

    // Framework selection
    service.advance_to(SprintStage::FrameworkSelection).await;
    service.fetch_recommendations().await?;
    if let Some(err) = service.engine().recommendation_error() {
        tracing::warn!(err, "proceeding without recommendations");
    }
    if let Some(first) = service.engine().recommendations().first().cloned() {
        service.select_framework(first).await;
    }
    service
        .mark_stage_completed(SprintStage::FrameworkSelection)
        .await;

    // Skip hands-on application in the demo.
    service.skip_stage(SprintStage::FrameworkApplication).await;
    service.advance_to(SprintStage::CommitmentMemo).await;

    let memo = service.generate_commitment_memo(Timestamp::now()).await?;
    service.mark_stage_completed(SprintStage::CommitmentMemo).await;
    service.complete_session().await?;

    println!("{}", render_memo(&memo, "Commitment Memo"));
    Ok(())
}
