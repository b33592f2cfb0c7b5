//! Session data groups — everything the controller accumulates per flow.

use std::collections::BTreeMap;

use crate::domain::{
    AssessmentQuestion, AssessmentResult, CareerOption, College, ExpertRequest, JobMarketReport,
    StudentProfile, TenthStream, TwelfthStream,
};

/// User choices and fetched results for the guidance flows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionData {
    pub tenth_stream: Option<TenthStream>,
    pub twelfth_stream: Option<TwelfthStream>,
    pub career_options: Vec<CareerOption>,
    pub course_options: Vec<String>,
    pub selected_career: Option<String>,
    pub selected_course: Option<String>,
    pub selected_college: Option<String>,
    pub pathway: String,
    pub colleges: Vec<College>,
    pub profile: StudentProfile,
}

/// Which quiz generation/analysis strategy is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentKind {
    InterestBased,
    OpenEnded,
}

/// Progress through a dynamically generated quiz.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentData {
    pub kind: Option<AssessmentKind>,
    /// Toggled interest tags; insertion order is kept for display, but
    /// membership is what matters.
    pub interests: Vec<String>,
    pub questions: Vec<AssessmentQuestion>,
    pub current_index: usize,
    /// Chosen option text keyed by question id. Grows monotonically within
    /// one quiz attempt.
    pub answers: BTreeMap<u32, String>,
    pub result: Option<AssessmentResult>,
}

impl AssessmentData {
    /// Add the tag if absent, remove it if present.
    pub fn toggle_interest(&mut self, tag: &str) {
        if let Some(pos) = self.interests.iter().position(|t| t == tag) {
            self.interests.remove(pos);
        } else {
            self.interests.push(tag.to_string());
        }
    }

    pub fn current_question(&self) -> Option<&AssessmentQuestion> {
        self.questions.get(self.current_index)
    }

    /// Discard the generated quiz and its progress, keeping the chosen
    /// interests so the user can regenerate without re-selecting.
    pub fn clear_quiz(&mut self) {
        self.questions.clear();
        self.current_index = 0;
        self.answers.clear();
    }
}

/// Ad hoc job-market lookup, independent of the guidance flows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobMarketData {
    pub query: String,
    pub report: Option<JobMarketReport>,
}

/// Expert-contact form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpertContactData {
    pub request: ExpertRequest,
    pub submitted: bool,
}
