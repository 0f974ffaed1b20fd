use super::error::ReportServiceError;
use super::model::Report;
use super::prompts::{self, Persona, MACRO_ECONOMIST, RISK_MANAGER, SECTOR_SPECIALIST};
use crate::domain::news::NewsItem;
use crate::infrastructure::repositories::{ReportRepository, TextGenerator};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Reports kept on disk, newest first
pub const MAX_REPORTS: usize = 30;

pub const NO_NEWS_SENTINEL: &str = "No news to analyze.";

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// Nothing to analyze, no model call was made
    NoNews,
    Completed(String),
    /// The final synthesis call failed; carries the inline error text
    SynthesisFailed(String),
}

impl Analysis {
    pub fn text(&self) -> &str {
        match self {
            Analysis::NoNews => NO_NEWS_SENTINEL,
            Analysis::Completed(text) | Analysis::SynthesisFailed(text) => text,
        }
    }
}

pub struct ReportService {
    report_repo: Arc<ReportRepository>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl ReportService {
    pub fn new(
        report_repo: Arc<ReportRepository>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            report_repo,
            generator,
        }
    }
}

#[async_trait]
pub trait ReportServiceApi: Send + Sync {
    /// Run the three analyst personas and the final synthesis over `news`.
    ///
    /// Calls are sequential. A failed persona call is replaced by an inline
    /// `"Error ({role}): {error}"` string and the run continues.
    async fn analyze(&self, news: &[NewsItem]) -> Result<Analysis, ReportServiceError>;

    /// Stamp and prepend a report, keeping the newest `MAX_REPORTS`
    async fn publish(&self, content: String) -> Result<Report, ReportServiceError>;

    /// `publish` that logs failures and reports success as a flag
    async fn save_report(&self, content: String) -> bool;

    /// Most recent report. Missing, unreadable or empty store reads as `None`.
    async fn latest_report(&self) -> Option<Report>;
}

#[async_trait]
impl ReportServiceApi for ReportService {
    async fn analyze(&self, news: &[NewsItem]) -> Result<Analysis, ReportServiceError> {
        if news.is_empty() {
            tracing::info!("No news to analyze, skipping model calls");
            return Ok(Analysis::NoNews);
        }

        let generator = self
            .generator
            .as_ref()
            .ok_or(ReportServiceError::GeneratorUnavailable)?;

        let start_time = std::time::Instant::now();
        let today = Local::now().date_naive();
        let news_block = prompts::render_news_block(news);

        tracing::info!(
            news_items = news.len(),
            block_lines = news_block.lines().count(),
            "Starting report analysis"
        );

        let generator: &dyn TextGenerator = generator.as_ref();
        let macro_analysis = run_persona(generator, &MACRO_ECONOMIST, today, &news_block).await;
        let sector_analysis = run_persona(generator, &SECTOR_SPECIALIST, today, &news_block).await;
        let risk_analysis = run_persona(generator, &RISK_MANAGER, today, &news_block).await;

        let final_prompt =
            prompts::synthesis_prompt(today, &macro_analysis, &sector_analysis, &risk_analysis);

        let analysis = match generator.generate(&final_prompt).await {
            Ok(report) => Analysis::Completed(report),
            Err(e) => {
                tracing::error!(error = %e, "Final synthesis failed");
                Analysis::SynthesisFailed(format!("Final Synthesis Error: {}", e))
            }
        };

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            completed = matches!(analysis, Analysis::Completed(_)),
            "Report analysis finished"
        );

        Ok(analysis)
    }

    async fn publish(&self, content: String) -> Result<Report, ReportServiceError> {
        let report = Report::new(content);

        self.report_repo
            .prepend(report.clone(), MAX_REPORTS)
            .await
            .map_err(|e| ReportServiceError::Dependency(e.to_string()))?;

        tracing::info!(date = %report.date, timestamp = %report.timestamp, "Report saved");

        Ok(report)
    }

    async fn save_report(&self, content: String) -> bool {
        match self.publish(content).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "Error saving report");
                false
            }
        }
    }

    async fn latest_report(&self) -> Option<Report> {
        match self.report_repo.find_latest().await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read reports");
                None
            }
        }
    }
}

async fn run_persona(
    generator: &dyn TextGenerator,
    persona: &Persona,
    today: NaiveDate,
    news_block: &str,
) -> String {
    let prompt = prompts::persona_prompt(persona, today, news_block);

    match generator.generate(&prompt).await {
        Ok(text) => {
            tracing::debug!(
                role = persona.role,
                response_length = text.len(),
                "Persona analysis done"
            );
            text
        }
        Err(e) => {
            tracing::warn!(role = persona.role, error = %e, "Persona analysis failed");
            format!("Error ({}): {}", persona.role, e)
        }
    }
}
