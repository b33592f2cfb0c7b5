//! Session controller — owns all navigable state and every transition.
//!
//! Handlers take `&mut self` and run to completion across their single
//! gateway await, so no two advisory calls are ever in flight at once and
//! a resolved call's originating screen is always still current. The
//! loading flag is observable state for the renderer, not a lock.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::advisor::Advisor;
use crate::domain::{ExpertRequest, StudentProfile, TenthStream, TwelfthStream};
use crate::error::GatewayError;
use crate::session::data::{
    AssessmentData, AssessmentKind, ExpertContactData, JobMarketData, SelectionData,
};
use crate::session::screen::{AssessmentScreen, ExpertScreen, Screen, TenthScreen, TwelfthScreen};

/// The one user-facing message for any gateway failure.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// Validation message when the quiz is submitted with nothing selected.
pub const INTEREST_REQUIRED: &str = "Please select at least one interest.";

/// Validation message when a suggested-career shortcut has no stream to
/// anchor the pathway on.
pub const NO_SUGGESTED_STREAM: &str =
    "No suggested stream is available for this career. Pick a stream first.";

/// Owns session state and applies every transition.
pub struct SessionController {
    advisor: Arc<Advisor>,
    screen: Screen,
    selection: SelectionData,
    assessment: AssessmentData,
    job_market: JobMarketData,
    expert: ExpertContactData,
    loading: bool,
    error: Option<String>,
}

impl SessionController {
    pub fn new(advisor: Arc<Advisor>) -> Self {
        Self {
            advisor,
            screen: Screen::Landing,
            selection: SelectionData::default(),
            assessment: AssessmentData::default(),
            job_market: JobMarketData::default(),
            expert: ExpertContactData::default(),
            loading: false,
            error: None,
        }
    }

    // ── Read accessors for the renderer ─────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selection(&self) -> &SelectionData {
        &self.selection
    }

    pub fn assessment(&self) -> &AssessmentData {
        &self.assessment
    }

    pub fn job_market(&self) -> &JobMarketData {
        &self.job_market
    }

    pub fn expert(&self) -> &ExpertContactData {
        &self.expert
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ── Landing tiles ───────────────────────────────────────────────────

    pub fn open_after_tenth(&mut self) {
        self.screen = Screen::AfterTenth(TenthScreen::StreamPick);
    }

    pub fn open_after_twelfth(&mut self) {
        self.screen = Screen::AfterTwelfth(TwelfthScreen::StreamPick);
    }

    pub fn open_assessment(&mut self) {
        self.screen = Screen::Assessment(AssessmentScreen::ModePick);
    }

    pub fn open_expert_contact(&mut self) {
        self.screen = Screen::ExpertContact(ExpertScreen::Form);
    }

    pub fn open_job_market(&mut self) {
        self.screen = Screen::JobMarket;
    }

    // ── Post-10th flow ──────────────────────────────────────────────────

    /// Choose a 10th-grade stream and fetch its career options. Also the
    /// entry point for the suggested-stream shortcut on the quiz result
    /// screen.
    pub async fn choose_tenth_stream(&mut self, stream: TenthStream) {
        self.selection.tenth_stream = Some(stream);
        let advisor = Arc::clone(&self.advisor);
        if let Some(options) = self
            .run_request(advisor.career_options_after_tenth(stream))
            .await
        {
            self.selection.career_options = options;
            self.screen = Screen::AfterTenth(TenthScreen::CareerList);
        }
    }

    /// Choose a career from the post-10th list and fetch its roadmap. Also
    /// the target of the suggested-career shortcut on the quiz result
    /// screen, which supplies the first suggested stream.
    pub async fn choose_tenth_career(&mut self, career: &str, stream: TenthStream) {
        self.selection.selected_career = Some(career.to_string());
        self.selection.tenth_stream = Some(stream);
        let advisor = Arc::clone(&self.advisor);
        if let Some(pathway) = self
            .run_request(advisor.career_pathway_after_tenth(stream, career))
            .await
        {
            self.selection.pathway = pathway;
            self.screen = Screen::AfterTenth(TenthScreen::CareerPathway);
        }
    }

    // ── Post-12th flow ──────────────────────────────────────────────────

    pub async fn choose_twelfth_stream(&mut self, stream: TwelfthStream) {
        self.selection.twelfth_stream = Some(stream);
        let advisor = Arc::clone(&self.advisor);
        if let Some(courses) = self.run_request(advisor.course_options(stream)).await {
            self.selection.course_options = courses;
            self.screen = Screen::AfterTwelfth(TwelfthScreen::CourseList);
        }
    }

    /// Pure selection; no fetch until the user picks a branch.
    pub fn choose_course(&mut self, course: &str) {
        self.selection.selected_course = Some(course.to_string());
        self.screen = Screen::AfterTwelfth(TwelfthScreen::CourseHub);
    }

    pub fn browse_colleges(&mut self) {
        self.screen = Screen::AfterTwelfth(TwelfthScreen::ProfileForm);
    }

    pub async fn browse_careers(&mut self) {
        let Some(course) = self.selection.selected_course.clone() else {
            debug!("No course selected; ignoring career browse");
            return;
        };
        let advisor = Arc::clone(&self.advisor);
        if let Some(options) = self
            .run_request(advisor.career_options_after_course(&course))
            .await
        {
            self.selection.career_options = options;
            self.screen = Screen::AfterTwelfth(TwelfthScreen::CareerList);
        }
    }

    pub async fn submit_profile(&mut self, profile: StudentProfile) {
        let Some(course) = self.selection.selected_course.clone() else {
            debug!("No course selected; ignoring profile submit");
            return;
        };
        self.selection.profile = profile;
        let profile = self.selection.profile.clone();
        let advisor = Arc::clone(&self.advisor);
        if let Some(colleges) = self
            .run_request(advisor.college_suggestions(&course, &profile))
            .await
        {
            self.selection.colleges = colleges;
            self.screen = Screen::AfterTwelfth(TwelfthScreen::CollegeList);
        }
    }

    pub async fn choose_college(&mut self, college: &str) {
        let Some(course) = self.selection.selected_course.clone() else {
            debug!("No course selected; ignoring college choice");
            return;
        };
        self.selection.selected_college = Some(college.to_string());
        let advisor = Arc::clone(&self.advisor);
        if let Some(pathway) = self
            .run_request(advisor.admission_pathway(college, &course))
            .await
        {
            self.selection.pathway = pathway;
            self.screen = Screen::AfterTwelfth(TwelfthScreen::AdmissionPlan);
        }
    }

    pub async fn choose_twelfth_career(&mut self, career: &str) {
        let Some(course) = self.selection.selected_course.clone() else {
            debug!("No course selected; ignoring career choice");
            return;
        };
        self.selection.selected_career = Some(career.to_string());
        let advisor = Arc::clone(&self.advisor);
        if let Some(pathway) = self
            .run_request(advisor.career_pathway_after_course(&course, career))
            .await
        {
            self.selection.pathway = pathway;
            self.screen = Screen::AfterTwelfth(TwelfthScreen::CareerPathway);
        }
    }

    // ── Skills assessment flow ──────────────────────────────────────────

    pub fn pick_interest_mode(&mut self) {
        self.screen = Screen::Assessment(AssessmentScreen::InterestPick);
    }

    pub fn toggle_interest(&mut self, tag: &str) {
        self.assessment.toggle_interest(tag);
    }

    /// Generate the interest-based quiz. Requires at least one selected
    /// interest; otherwise sets the validation error without any gateway
    /// call.
    pub async fn submit_interests(&mut self) {
        if self.assessment.interests.is_empty() {
            self.error = Some(INTEREST_REQUIRED.to_string());
            return;
        }
        self.assessment.kind = Some(AssessmentKind::InterestBased);
        let interests = self.assessment.interests.clone();
        let advisor = Arc::clone(&self.advisor);
        if let Some(questions) = self.run_request(advisor.interest_quiz(&interests)).await {
            self.assessment.questions = questions;
            self.assessment.current_index = 0;
            self.screen = Screen::Assessment(AssessmentScreen::Question);
        }
    }

    /// Generate the open-ended quiz for a student with no declared
    /// interests.
    pub async fn start_open_ended_quiz(&mut self) {
        self.assessment.kind = Some(AssessmentKind::OpenEnded);
        let advisor = Arc::clone(&self.advisor);
        if let Some(questions) = self.run_request(advisor.open_ended_quiz()).await {
            self.assessment.questions = questions;
            self.assessment.current_index = 0;
            self.screen = Screen::Assessment(AssessmentScreen::Question);
        }
    }

    /// Record the answer for the current question. Advances in place while
    /// questions remain; after the last answer, fetches the analysis
    /// matching the active quiz kind.
    pub async fn answer_question(&mut self, answer: &str) {
        let Some(question) = self.assessment.current_question() else {
            debug!("No quiz in progress; ignoring answer");
            return;
        };
        let id = question.id;
        self.assessment.answers.insert(id, answer.to_string());

        if self.assessment.current_index + 1 < self.assessment.questions.len() {
            self.assessment.current_index += 1;
            return;
        }

        let answers = self.assessment.answers.clone();
        let advisor = Arc::clone(&self.advisor);
        let outcome = match self.assessment.kind {
            Some(AssessmentKind::OpenEnded) => {
                self.run_request(advisor.analyze_open_ended_quiz(&answers))
                    .await
            }
            _ => {
                self.run_request(advisor.analyze_interest_quiz(&answers))
                    .await
            }
        };
        if let Some(result) = outcome {
            self.assessment.result = Some(result);
            self.screen = Screen::Assessment(AssessmentScreen::Result);
        }
    }

    /// Follow a suggested career from the quiz result into the post-10th
    /// pathway view, anchored on the first suggested stream.
    pub async fn choose_suggested_career(&mut self, career: &str) {
        let stream = self
            .assessment
            .result
            .as_ref()
            .and_then(|r| r.suggested_streams.first().copied());
        match stream {
            Some(stream) => self.choose_tenth_career(career, stream).await,
            None => self.error = Some(NO_SUGGESTED_STREAM.to_string()),
        }
    }

    // ── Expert contact ──────────────────────────────────────────────────

    pub async fn submit_expert_request(&mut self, request: ExpertRequest) {
        self.expert.request = request;
        let pending = self.expert.request.clone();
        let advisor = Arc::clone(&self.advisor);
        if self
            .run_request(advisor.request_consultation(&pending))
            .await
            .is_some()
        {
            self.expert.submitted = true;
            self.screen = Screen::ExpertContact(ExpertScreen::Confirmation);
        }
    }

    // ── Job market ──────────────────────────────────────────────────────

    /// Fetch a market report for the query. A repeat submission replaces
    /// the previous report; the query is retained either way. Blank
    /// queries are ignored.
    pub async fn analyze_job_market(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.job_market.query = query.to_string();
        let advisor = Arc::clone(&self.advisor);
        let owned = query.to_string();
        if let Some(report) = self.run_request(advisor.job_market_report(&owned)).await {
            self.job_market.report = Some(report);
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Step back one screen.
    ///
    /// Backing out of a quiz in progress (interest selection or questions)
    /// returns to the mode choice and discards the generated quiz wholesale.
    /// Leaving a standalone flow clears its transient state. Back on the
    /// landing screen is a full reset.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Assessment(AssessmentScreen::InterestPick | AssessmentScreen::Question) => {
                self.assessment.clear_quiz();
                self.screen = Screen::Assessment(AssessmentScreen::ModePick);
            }
            _ => {
                if let Some(previous) = self.screen.predecessor() {
                    self.screen = previous;
                } else if self.screen != Screen::Landing {
                    self.job_market = JobMarketData::default();
                    self.expert = ExpertContactData::default();
                    self.screen = Screen::Landing;
                } else {
                    self.reset();
                }
            }
        }
    }

    /// Return every state group to its initial default.
    pub fn reset(&mut self) {
        self.screen = Screen::Landing;
        self.selection = SelectionData::default();
        self.assessment = AssessmentData::default();
        self.job_market = JobMarketData::default();
        self.expert = ExpertContactData::default();
        self.loading = false;
        self.error = None;
    }

    /// Loading/error wrapper shared by every gateway-bound handler: clears
    /// the previous error, holds the loading flag for exactly the span of
    /// the call, and on failure stores the generic message and applies no
    /// transition so the same action can be retried.
    async fn run_request<T, F>(&mut self, request: F) -> Option<T>
    where
        F: Future<Output = Result<T, GatewayError>>,
    {
        self.error = None;
        self.loading = true;
        let outcome = request.await;
        self.loading = false;
        match outcome {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "Advisory request failed");
                self.error = Some(GENERIC_ERROR.to_string());
                None
            }
        }
    }
}
