//! Integration tests for a full guided session against a stub provider.
//!
//! Each test drives the session controller through whole user journeys —
//! no real API calls; the stub replays canned gateway replies in order.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use career_compass::advisor::Advisor;
use career_compass::domain::{DemandLevel, ExpertRequest, StudentProfile, TenthStream, TwelfthStream};
use career_compass::error::GatewayError;
use career_compass::llm::{CompletionProvider, CompletionRequest};
use career_compass::session::{
    AssessmentData, AssessmentScreen, ExpertScreen, JobMarketData, Screen, SelectionData,
    SessionController, TenthScreen, TwelfthScreen,
};

/// Stub provider that replays scripted replies (no real API calls).
struct StubProvider {
    replies: Mutex<VecDeque<String>>,
}

impl StubProvider {
    fn new(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
        })
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn model_name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(GatewayError::EmptyReply)
    }
}

fn controller(replies: &[&str]) -> SessionController {
    let advisor = Arc::new(
        Advisor::new(StubProvider::new(replies)).with_consultation_delay(Duration::ZERO),
    );
    SessionController::new(advisor)
}

const CAREERS: &str = r#"[
    {"careerName": "Accountant", "description": "Keeps the books.",
     "estimatedSalaryPotential": "High"},
    {"careerName": "Economist", "description": "Studies markets.",
     "estimatedSalaryPotential": "Medium"}
]"#;

const COLLEGES: &str = r#"[
    {"collegeName": "Shri Ram College of Commerce", "location": "Delhi",
     "tier": "Dream", "reason": "Top commerce program."}
]"#;

const QUIZ: &str = r#"[
    {"id": 1, "question": "First question?", "options": ["Option A", "Option B"]},
    {"id": 2, "question": "Second question?", "options": ["Option C", "Option D"]}
]"#;

const ANALYSIS: &str = r#"{
    "summary": "You reason carefully and communicate well.",
    "suggestedStreams": ["Commerce", "Arts/Humanities"],
    "suggestedCareers": [
        {"careerName": "Economist", "description": "Studies markets.",
         "estimatedSalaryPotential": "Medium"}
    ]
}"#;

#[tokio::test]
async fn tenth_grade_journey_from_landing_to_pathway() {
    let mut c = controller(&[CAREERS, "Step 1: take Commerce seriously."]);

    c.open_after_tenth();
    c.choose_tenth_stream(TenthStream::Commerce).await;
    assert_eq!(c.screen(), Screen::AfterTenth(TenthScreen::CareerList));
    assert_eq!(c.selection().career_options.len(), 2);

    c.choose_tenth_career("Accountant", TenthStream::Commerce).await;
    assert_eq!(c.screen(), Screen::AfterTenth(TenthScreen::CareerPathway));
    assert_eq!(c.selection().pathway, "Step 1: take Commerce seriously.");
}

#[tokio::test]
async fn twelfth_grade_journey_through_both_branches() {
    let mut c = controller(&[
        r#"["B.Com", "BBA"]"#,
        COLLEGES,
        "Apply before January.",
    ]);

    c.open_after_twelfth();
    c.choose_twelfth_stream(TwelfthStream::Commerce).await;
    c.choose_course("B.Com");
    c.browse_colleges();
    c.submit_profile(StudentProfile {
        marks_10th: "91%".to_string(),
        marks_12th: "89%".to_string(),
        achievements: "Debate captain".to_string(),
    })
    .await;
    assert_eq!(c.screen(), Screen::AfterTwelfth(TwelfthScreen::CollegeList));

    c.choose_college("Shri Ram College of Commerce").await;
    assert_eq!(c.screen(), Screen::AfterTwelfth(TwelfthScreen::AdmissionPlan));
    assert_eq!(c.selection().pathway, "Apply before January.");

    // Back out of the college branch and take the career branch instead.
    c.back();
    c.back();
    c.back();
    assert_eq!(c.screen(), Screen::AfterTwelfth(TwelfthScreen::CourseHub));
}

#[tokio::test]
async fn assessment_journey_feeds_into_tenth_grade_flow() {
    let mut c = controller(&[QUIZ, ANALYSIS, CAREERS]);

    c.open_assessment();
    c.pick_interest_mode();
    c.toggle_interest("Economics");
    c.submit_interests().await;
    assert_eq!(c.screen(), Screen::Assessment(AssessmentScreen::Question));

    c.answer_question("Option A").await;
    c.answer_question("Option D").await;
    assert_eq!(c.screen(), Screen::Assessment(AssessmentScreen::Result));

    let result = c.assessment().result.as_ref().unwrap();
    assert_eq!(
        result.suggested_streams,
        vec![TenthStream::Commerce, TenthStream::Arts]
    );

    // Following a suggested stream drops the user into the post-10th flow.
    c.choose_tenth_stream(result.suggested_streams[0]).await;
    assert_eq!(c.screen(), Screen::AfterTenth(TenthScreen::CareerList));
    assert_eq!(c.selection().tenth_stream, Some(TenthStream::Commerce));
}

#[tokio::test]
async fn expert_and_job_market_round_trip() {
    let report = r#"{"summary": "Strong demand across industries.",
        "demand": "High", "salaryTrends": "Competitive and rising",
        "requiredSkills": ["Python", "SQL", "Statistics"]}"#;
    let mut c = controller(&[report]);

    c.open_job_market();
    c.analyze_job_market("Data Scientist").await;
    let market = c.job_market();
    assert_eq!(market.query, "Data Scientist");
    assert_eq!(market.report.as_ref().unwrap().demand, DemandLevel::High);

    c.back();
    assert_eq!(c.screen(), Screen::Landing);
    assert!(c.job_market().report.is_none());

    c.open_expert_contact();
    c.submit_expert_request(ExpertRequest {
        full_name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
        topic: "Career change".to_string(),
    })
    .await;
    assert_eq!(c.screen(), Screen::ExpertContact(ExpertScreen::Confirmation));
    assert!(c.expert().submitted);
}

#[tokio::test]
async fn exhausted_stub_surfaces_as_generic_error_and_allows_retry() {
    // One reply scripted, two requested: the second fails like a dead
    // network would, leaving the screen in place.
    let mut c = controller(&[CAREERS]);

    c.open_after_tenth();
    c.choose_tenth_stream(TenthStream::Maths).await;
    assert_eq!(c.screen(), Screen::AfterTenth(TenthScreen::CareerList));

    c.choose_tenth_career("Accountant", TenthStream::Maths).await;
    assert_eq!(c.screen(), Screen::AfterTenth(TenthScreen::CareerList));
    assert!(c.error().is_some());
    assert!(!c.is_loading());
}

#[tokio::test]
async fn reset_from_deep_state_restores_all_defaults() {
    let mut c = controller(&[QUIZ]);

    c.open_assessment();
    c.pick_interest_mode();
    c.toggle_interest("Physics");
    c.submit_interests().await;
    c.answer_question("Option A").await;

    c.reset();
    assert_eq!(c.screen(), Screen::Landing);
    assert_eq!(*c.selection(), SelectionData::default());
    assert_eq!(*c.assessment(), AssessmentData::default());
    assert_eq!(*c.job_market(), JobMarketData::default());
    assert!(c.error().is_none());
}
