use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{validate, CandidateRecord, ExtractedText, ValidatedRecord};

use super::prompts;

/// Bounds for the two retry loops: whole-response re-asks when the
/// collaborator returns something unparseable, and per-record repair calls
/// when a parsed record fails validation.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionLimits {
    /// Extra whole-document calls after the first when the response cannot
    /// be parsed (or the call times out).
    pub max_parse_retries: u32,
    /// Total validation attempts per record, the initial one included.
    pub max_record_attempts: u32,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            max_parse_retries: 2,
            max_record_attempts: 2,
        }
    }
}

pub struct ExtractionService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    limits: ExtractionLimits,
    request_timeout: Duration,
}

impl<L> ExtractionService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, limits: ExtractionLimits, request_timeout: Duration) -> Self {
        Self {
            llm_client,
            limits,
            request_timeout,
        }
    }

    /// Runs the full extract-parse-validate loop for one document.
    ///
    /// Records that still fail validation after their repair attempt are
    /// dropped and logged; the call succeeds as long as at least one record
    /// validates. Output order follows collaborator order, with repaired
    /// records keeping their original slot.
    #[tracing::instrument(skip(self, text), fields(pages = text.page_count()))]
    pub async fn extract_records(
        &self,
        text: &ExtractedText,
    ) -> Result<Vec<ValidatedRecord>, ExtractionError> {
        let candidates = self.fetch_candidates(text).await?;
        let candidate_count = candidates.len();

        let mut validated = Vec::with_capacity(candidate_count);
        for (index, candidate) in candidates.into_iter().enumerate() {
            match validate(&candidate) {
                Ok(record) => validated.push(record),
                Err(error) => {
                    tracing::warn!(
                        record_index = index,
                        field = %error.field,
                        reason = %error.reason,
                        "Candidate record failed validation"
                    );
                    if let Some(record) = self.repair_record(&candidate, &error, text).await {
                        validated.push(record);
                    } else {
                        tracing::warn!(record_index = index, "Dropping unrepairable record");
                    }
                }
            }
        }

        if validated.is_empty() {
            return Err(ExtractionError::NoValidRecords { candidate_count });
        }

        tracing::info!(
            candidates = candidate_count,
            validated = validated.len(),
            "Record extraction complete"
        );
        Ok(validated)
    }

    /// One collaborator call on raw text, parsed but not validated. Used by
    /// the diagnostic endpoint to exercise the collaborator in isolation.
    pub async fn probe(&self, text: &str) -> Result<Vec<CandidateRecord>, ExtractionError> {
        let pages = ExtractedText::new(vec![crate::domain::PageText {
            number: 1,
            text: text.to_string(),
        }]);
        let prompt = prompts::extraction_prompt(pages.pages(), None);

        let raw = match self.submit_with_timeout(&prompt).await {
            Ok(raw) => raw,
            Err(failure) => return Err(failure.into_error(1)),
        };
        parse_candidates(&raw)
            .map_err(|reason| ExtractionError::MalformedResponse { attempts: 1, reason })
    }

    /// Whole-document call with bounded re-asks. A parse failure feeds its
    /// reason into the next prompt; timeouts and transport errors retry
    /// within the same bound.
    async fn fetch_candidates(
        &self,
        text: &ExtractedText,
    ) -> Result<Vec<CandidateRecord>, ExtractionError> {
        let total_attempts = self.limits.max_parse_retries + 1;
        let mut last_failure: Option<AttemptFailure> = None;

        for attempt in 1..=total_attempts {
            let prior_parse_failure = match &last_failure {
                Some(AttemptFailure::Parse(reason)) => Some(reason.as_str()),
                _ => None,
            };
            let prompt = prompts::extraction_prompt(text.pages(), prior_parse_failure);

            match self.submit_with_timeout(&prompt).await {
                Ok(raw) => match parse_candidates(&raw) {
                    Ok(candidates) => return Ok(candidates),
                    Err(reason) => {
                        tracing::warn!(attempt, reason = %reason, "Unparseable collaborator response");
                        last_failure = Some(AttemptFailure::Parse(reason));
                    }
                },
                Err(failure) => {
                    tracing::warn!(attempt, failure = %failure, "Collaborator call failed");
                    last_failure = Some(failure);
                }
            }
        }

        Err(last_failure
            .expect("at least one attempt ran")
            .into_error(total_attempts))
    }

    /// Single repair call for a record that failed validation. Any failure
    /// here (call, parse, or re-validation) drops the record; repair is
    /// best-effort and never extends the request beyond its bounds.
    async fn repair_record(
        &self,
        candidate: &CandidateRecord,
        error: &crate::domain::FieldValidationError,
        text: &ExtractedText,
    ) -> Option<ValidatedRecord> {
        let mut error = error.clone();
        let mut candidate = candidate.clone();

        for _ in 1..self.limits.max_record_attempts {
            let candidate_json = serde_json::to_string_pretty(&candidate).ok()?;
            let prompt = prompts::repair_prompt(&candidate_json, &error, text.pages());

            let raw = match self.submit_with_timeout(&prompt).await {
                Ok(raw) => raw,
                Err(failure) => {
                    tracing::warn!(failure = %failure, "Repair call failed");
                    return None;
                }
            };

            candidate = match parse_single_candidate(&raw) {
                Ok(c) => c,
                Err(reason) => {
                    tracing::warn!(reason = %reason, "Unparseable repair response");
                    return None;
                }
            };

            match validate(&candidate) {
                Ok(record) => return Some(record),
                Err(e) => error = e,
            }
        }

        None
    }

    async fn submit_with_timeout(&self, prompt: &str) -> Result<String, AttemptFailure> {
        match tokio::time::timeout(self.request_timeout, self.llm_client.submit(prompt)).await {
            Ok(Ok(raw)) => Ok(raw),
            Ok(Err(e)) => Err(AttemptFailure::Api(e)),
            Err(_) => Err(AttemptFailure::Timeout(self.request_timeout)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum AttemptFailure {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Api(LlmClientError),
    #[error("unparseable response: {0}")]
    Parse(String),
}

impl AttemptFailure {
    fn into_error(self, attempts: u32) -> ExtractionError {
        match self {
            AttemptFailure::Timeout(timeout) => ExtractionError::Timeout { attempts, timeout },
            AttemptFailure::Api(source) => ExtractionError::Collaborator { attempts, source },
            AttemptFailure::Parse(reason) => {
                ExtractionError::MalformedResponse { attempts, reason }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("collaborator call timed out after {attempts} attempt(s) ({timeout:?} each)")]
    Timeout { attempts: u32, timeout: Duration },
    #[error("collaborator call failed after {attempts} attempt(s): {source}")]
    Collaborator {
        attempts: u32,
        source: LlmClientError,
    },
    #[error("collaborator response unparseable after {attempts} attempt(s): {reason}")]
    MalformedResponse { attempts: u32, reason: String },
    #[error("no valid records could be extracted ({candidate_count} candidate(s) returned)")]
    NoValidRecords { candidate_count: usize },
}

/// Accepts a JSON array of records or a bare object (treated as a
/// one-element array), with Markdown code fences stripped first.
fn parse_candidates(raw: &str) -> Result<Vec<CandidateRecord>, String> {
    let body = strip_code_fences(raw);

    if let Ok(records) = serde_json::from_str::<Vec<CandidateRecord>>(body) {
        return Ok(records);
    }

    match serde_json::from_str::<CandidateRecord>(body) {
        Ok(record) => Ok(vec![record]),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_single_candidate(raw: &str) -> Result<CandidateRecord, String> {
    let mut records = parse_candidates(raw)?;
    match records.len() {
        1 => Ok(records.remove(0)),
        n => Err(format!("expected exactly one record, got {}", n)),
    }
}

fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
