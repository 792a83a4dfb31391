//! Talent Compass command-line driver.
//!
//! Usage:
//!   talent-compass progress
//!   talent-compass answer <question-id> <option-value>
//!   talent-compass restart
//!   talent-compass previous
//!   talent-compass report
//!   talent-compass challenges <like-id> <talent-id> <like-obvious> <talent-obvious>
//!   talent-compass major <code>
//!   talent-compass quiz
//!   talent-compass score <major-code> <question-id>=<value>...
//!   talent-compass ranking
//!
//! Configuration comes from `TALENT_COMPASS__*` environment variables (see
//! `config`). Results are printed to stdout as JSON.

mod telemetry;

use serde::Serialize;
use std::error::Error;
use std::sync::Arc;

use talent_compass::adapters::{FileCatalogSource, FileKeyValueStore, InMemoryKeyValueStore};
use talent_compass::application::handlers::*;
use talent_compass::config::{AppConfig, StorageBackend};
use talent_compass::domain::answers::AnswerSheet;
use talent_compass::domain::foundation::{ElementId, MajorCode, QuestionId};
use talent_compass::ports::{CatalogSource, KeyValueStore};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[tokio::main]
async fn main() -> CliResult<()> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        return Err(usage());
    };

    let app = App::new(&config)?;
    tracing::debug!(command = command.as_str(), "Running command");

    match command.as_str() {
        "progress" => print(&app.progress.handle().await?),
        "answer" => {
            let [id, value] = rest else {
                return Err(usage());
            };
            let result = app
                .record
                .handle(RecordAnswerCommand {
                    question_id: id.parse::<QuestionId>()?,
                    option_value: value.parse()?,
                })
                .await?;
            print(&result)
        }
        "restart" => print(&app.restart.handle().await?),
        "previous" => print(&app.previous.handle().await?),
        "report" => print(&app.report.handle().await?),
        "challenges" => {
            let [like, talent, like_obvious, talent_obvious] = rest else {
                return Err(usage());
            };
            let query = MatchChallengesQuery {
                like_id: like.parse::<ElementId>()?,
                talent_id: talent.parse::<ElementId>()?,
                like_obvious: like_obvious.parse()?,
                talent_obvious: talent_obvious.parse()?,
            };
            print(&app.challenges.handle(query).await?)
        }
        "major" => {
            let [code] = rest else {
                return Err(usage());
            };
            print(&app.major.handle(MajorCode::new(code.as_str())?).await?)
        }
        "quiz" => print(&app.quiz.handle().await?),
        "score" => {
            let Some((code, pairs)) = rest.split_first() else {
                return Err(usage());
            };
            let answers = parse_answers(pairs)?;
            let result = app
                .score
                .handle(ScoreQuickAssessmentCommand {
                    major_code: MajorCode::new(code.as_str())?,
                    answers,
                })
                .await?;
            print(&result)
        }
        "ranking" => print(&app.ranking.handle().await?),
        _ => Err(usage()),
    }
}

/// Handlers wired to the configured adapters.
struct App {
    progress: GetProgressHandler,
    record: RecordAnswerHandler,
    restart: RestartAssessmentHandler,
    previous: GetPreviousAnswersHandler,
    report: BuildPortraitReportHandler,
    challenges: MatchChallengesHandler,
    major: GetMajorAffinityHandler,
    quiz: SampleQuickQuizHandler,
    score: ScoreQuickAssessmentHandler,
    ranking: RankMajorResultsHandler,
}

impl App {
    fn new(config: &AppConfig) -> CliResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.data_dir)),
            StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        };
        let catalog: Arc<dyn CatalogSource> =
            Arc::new(FileCatalogSource::new(&config.catalog.data_dir));

        let order = config.assessment.dimension_order()?;
        let rules = config.assessment.milestone_rules();
        let quiz_size = config.assessment.quick_quiz_size;

        let answers = Arc::new(AnswerService::new(Arc::clone(&store)));
        let results = Arc::new(QuizResultService::new(store));

        Ok(Self {
            progress: GetProgressHandler::new(
                Arc::clone(&catalog),
                Arc::clone(&answers),
                order.clone(),
                rules,
            ),
            record: RecordAnswerHandler::new(Arc::clone(&catalog), Arc::clone(&answers), order, rules),
            restart: RestartAssessmentHandler::new(Arc::clone(&answers)),
            previous: GetPreviousAnswersHandler::new(answers),
            report: BuildPortraitReportHandler::new(Arc::clone(&catalog)),
            challenges: MatchChallengesHandler::new(Arc::clone(&catalog)),
            major: GetMajorAffinityHandler::new(Arc::clone(&catalog)),
            quiz: SampleQuickQuizHandler::new(catalog, quiz_size),
            score: ScoreQuickAssessmentHandler::new(Arc::clone(&results), quiz_size),
            ranking: RankMajorResultsHandler::new(results),
        })
    }
}

/// Parses `id=value` pairs into an answer sheet.
fn parse_answers(pairs: &[String]) -> CliResult<AnswerSheet> {
    pairs
        .iter()
        .map(|pair| -> CliResult<(QuestionId, i32)> {
            let (id, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected <question-id>=<value>, got '{}'", pair))?;
            Ok((id.parse::<QuestionId>()?, value.trim().parse::<i32>()?))
        })
        .collect()
}

fn print<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn usage() -> Box<dyn Error> {
    "usage: talent-compass <progress|answer|restart|previous|report|challenges|major|quiz|score|ranking> [args]"
        .into()
}
