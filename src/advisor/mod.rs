//! Advisory gateway — one operation per distinct advisory request.
//!
//! Each operation builds a prompt from caller parameters, invokes the
//! completion provider (with a response schema for structured replies),
//! and parses the reply into a domain type. No caching and no retries:
//! identical requests are always re-issued, and any failure surfaces as a
//! [`GatewayError`] for the caller to handle.

pub mod prompts;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::DEFAULT_REASONING_MODEL;
use crate::domain::{
    AssessmentQuestion, AssessmentResult, CareerOption, College, ExpertRequest, JobMarketReport,
    StudentProfile, TenthStream, TwelfthStream,
};
use crate::error::GatewayError;
use crate::llm::{CompletionProvider, CompletionRequest, schema};

const CONSULTATION_DELAY: Duration = Duration::from_millis(750);

/// Gateway to the remote advisory service.
pub struct Advisor {
    provider: Arc<dyn CompletionProvider>,
    reasoning_model: String,
    consultation_delay: Duration,
}

impl Advisor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            reasoning_model: DEFAULT_REASONING_MODEL.to_string(),
            consultation_delay: CONSULTATION_DELAY,
        }
    }

    /// Override the model used for open-ended quiz generation and analysis.
    pub fn with_reasoning_model(mut self, model: impl Into<String>) -> Self {
        self.reasoning_model = model.into();
        self
    }

    /// Override the simulated consultation turnaround (tests use zero).
    pub fn with_consultation_delay(mut self, delay: Duration) -> Self {
        self.consultation_delay = delay;
        self
    }

    /// Career options for a 10th-grade stream choice, ranked by pay.
    pub async fn career_options_after_tenth(
        &self,
        stream: TenthStream,
    ) -> Result<Vec<CareerOption>, GatewayError> {
        let request = CompletionRequest::new(prompts::career_options_after_tenth(stream))
            .with_schema(schema::career_options());
        self.fetch_structured(request).await
    }

    /// Narrative roadmap toward a career, starting from a 10th-grade stream.
    pub async fn career_pathway_after_tenth(
        &self,
        stream: TenthStream,
        career: &str,
    ) -> Result<String, GatewayError> {
        let request = CompletionRequest::new(prompts::career_pathway_after_tenth(stream, career));
        self.provider.complete(request).await
    }

    /// Undergraduate course options for a 12th-grade stream.
    pub async fn course_options(
        &self,
        stream: TwelfthStream,
    ) -> Result<Vec<String>, GatewayError> {
        let request = CompletionRequest::new(prompts::course_options(stream))
            .with_schema(schema::course_list());
        self.fetch_structured(request).await
    }

    /// Tiered college suggestions for a course and student profile.
    pub async fn college_suggestions(
        &self,
        course: &str,
        profile: &StudentProfile,
    ) -> Result<Vec<College>, GatewayError> {
        let request = CompletionRequest::new(prompts::college_suggestions(course, profile))
            .with_schema(schema::colleges());
        self.fetch_structured(request).await
    }

    /// Narrative admission guide for a college/course pair.
    pub async fn admission_pathway(
        &self,
        college: &str,
        course: &str,
    ) -> Result<String, GatewayError> {
        let request = CompletionRequest::new(prompts::admission_pathway(college, course));
        self.provider.complete(request).await
    }

    /// Career options after completing an undergraduate course.
    pub async fn career_options_after_course(
        &self,
        course: &str,
    ) -> Result<Vec<CareerOption>, GatewayError> {
        let request = CompletionRequest::new(prompts::career_options_after_course(course))
            .with_schema(schema::career_options());
        self.fetch_structured(request).await
    }

    /// Narrative roadmap toward a career after a given degree.
    pub async fn career_pathway_after_course(
        &self,
        course: &str,
        career: &str,
    ) -> Result<String, GatewayError> {
        let request = CompletionRequest::new(prompts::career_pathway_after_course(course, career));
        self.provider.complete(request).await
    }

    /// Eight interest-tailored quiz questions.
    pub async fn interest_quiz(
        &self,
        interests: &[String],
    ) -> Result<Vec<AssessmentQuestion>, GatewayError> {
        let request = CompletionRequest::new(prompts::interest_quiz(interests))
            .with_schema(schema::quiz_questions());
        self.fetch_structured(request).await
    }

    /// Five open-ended questions for students with no declared interests.
    /// Uses the reasoning model.
    pub async fn open_ended_quiz(&self) -> Result<Vec<AssessmentQuestion>, GatewayError> {
        let request = CompletionRequest::new(prompts::open_ended_quiz())
            .with_schema(schema::quiz_questions())
            .with_model(&self.reasoning_model);
        self.fetch_structured(request).await
    }

    /// Analysis of a completed interest-based quiz.
    pub async fn analyze_interest_quiz(
        &self,
        answers: &BTreeMap<u32, String>,
    ) -> Result<AssessmentResult, GatewayError> {
        let request = CompletionRequest::new(prompts::analyze_interest_quiz(answers))
            .with_schema(schema::assessment_result());
        self.fetch_structured(request).await
    }

    /// Analysis of a completed open-ended quiz. Uses the reasoning model.
    pub async fn analyze_open_ended_quiz(
        &self,
        answers: &BTreeMap<u32, String>,
    ) -> Result<AssessmentResult, GatewayError> {
        let request = CompletionRequest::new(prompts::analyze_open_ended_quiz(answers))
            .with_schema(schema::assessment_result())
            .with_model(&self.reasoning_model);
        self.fetch_structured(request).await
    }

    /// Job-market snapshot for a career or skill query.
    pub async fn job_market_report(&self, query: &str) -> Result<JobMarketReport, GatewayError> {
        let request = CompletionRequest::new(prompts::job_market_report(query))
            .with_schema(schema::job_market_report());
        self.fetch_structured(request).await
    }

    /// Submit an expert-consultation request.
    ///
    /// There is no real scheduling backend; this stands in for one as a
    /// genuine asynchronous operation so it shares the caller's
    /// loading/error contract with the other operations.
    pub async fn request_consultation(&self, request: &ExpertRequest) -> Result<(), GatewayError> {
        debug!(name = %request.full_name, "Submitting consultation request");
        tokio::time::sleep(self.consultation_delay).await;
        Ok(())
    }

    async fn fetch_structured<T: DeserializeOwned>(
        &self,
        request: CompletionRequest,
    ) -> Result<T, GatewayError> {
        let raw = self.provider.complete(request).await?;
        parse_reply(&raw)
    }
}

/// Parse a structured reply, tolerating a markdown code fence around the
/// JSON (schema-constrained replies are normally bare, but free-tier
/// models occasionally wrap them anyway).
fn parse_reply<T: DeserializeOwned>(raw: &str) -> Result<T, GatewayError> {
    let json = strip_code_fence(raw);
    serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, reply = raw, "Failed to parse structured reply");
        GatewayError::InvalidResponse {
            reason: format!("Reply did not match the expected shape: {e}"),
        }
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    for opener in ["```json", "```"] {
        if let Some(rest) = trimmed.strip_prefix(opener) {
            if let Some(end) = rest.rfind("```") {
                return rest[..end].trim();
            }
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::SalaryPotential;

    /// Provider that replays canned replies and records each request.
    struct ScriptedProvider {
        replies: Mutex<Vec<Result<String, GatewayError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            let mut replies = replies;
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        fn model_name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop()
                .expect("no scripted reply left")
        }
    }

    fn advisor_with(replies: Vec<Result<String, GatewayError>>) -> (Advisor, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider::new(replies));
        let advisor = Advisor::new(provider.clone()).with_consultation_delay(Duration::ZERO);
        (advisor, provider)
    }

    #[tokio::test]
    async fn career_options_parse_into_domain_types() {
        let reply = r#"[{"careerName": "Accountant", "description": "Keeps the books.",
                         "estimatedSalaryPotential": "High"}]"#;
        let (advisor, provider) = advisor_with(vec![Ok(reply.to_string())]);

        let options = advisor
            .career_options_after_tenth(TenthStream::Commerce)
            .await
            .unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].career_name, "Accountant");
        assert_eq!(options[0].estimated_salary_potential, SalaryPotential::High);

        let requests = provider.requests();
        assert!(requests[0].prompt.contains("Commerce stream"));
        assert!(requests[0].response_schema.is_some());
        assert!(requests[0].model.is_none());
    }

    #[tokio::test]
    async fn pathway_requests_are_free_form() {
        let (advisor, provider) = advisor_with(vec![Ok("Step 1: study hard.".to_string())]);
        let pathway = advisor
            .career_pathway_after_tenth(TenthStream::Maths, "Engineer")
            .await
            .unwrap();
        assert_eq!(pathway, "Step 1: study hard.");
        assert!(provider.requests()[0].response_schema.is_none());
    }

    #[tokio::test]
    async fn open_ended_calls_use_reasoning_model() {
        let quiz = r#"[{"id": 1, "question": "Q?", "options": ["a", "b"]}]"#;
        let analysis = r#"{"summary": "s", "suggestedStreams": [], "suggestedCareers": []}"#;
        let (advisor, provider) =
            advisor_with(vec![Ok(quiz.to_string()), Ok(analysis.to_string())]);

        advisor.open_ended_quiz().await.unwrap();
        advisor
            .analyze_open_ended_quiz(&BTreeMap::new())
            .await
            .unwrap();

        for request in provider.requests() {
            assert_eq!(request.model.as_deref(), Some(DEFAULT_REASONING_MODEL));
        }
    }

    #[tokio::test]
    async fn malformed_reply_is_an_invalid_response() {
        let (advisor, _) = advisor_with(vec![Ok("not json at all".to_string())]);
        let err = advisor.job_market_report("Data Scientist").await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn fenced_reply_is_tolerated() {
        let reply = "```json\n[\"B.Tech\", \"B.Sc\"]\n```";
        let (advisor, _) = advisor_with(vec![Ok(reply.to_string())]);
        let courses = advisor.course_options(TwelfthStream::Pcm).await.unwrap();
        assert_eq!(courses, vec!["B.Tech", "B.Sc"]);
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let (advisor, _) = advisor_with(vec![Err(GatewayError::RateLimited)]);
        let err = advisor
            .career_options_after_course("B.Com")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::RateLimited));
    }

    #[tokio::test]
    async fn consultation_resolves_without_provider_call() {
        let (advisor, provider) = advisor_with(vec![]);
        advisor
            .request_consultation(&ExpertRequest::default())
            .await
            .unwrap();
        assert!(provider.requests().is_empty());
    }
}
