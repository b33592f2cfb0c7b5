//! Screen identifiers — one tagged union per flow.
//!
//! Every screen the renderer knows is a variant here, so an out-of-range
//! (flow, step) combination cannot be constructed. Back-navigation targets
//! are an explicit per-screen table rather than step arithmetic: the two
//! branches of the post-12th flow (colleges vs. careers) are not
//! step-symmetric, and the career-list screen returns to the course hub,
//! not to the college branch's neighboring screen.

/// The screen currently presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    AfterTenth(TenthScreen),
    AfterTwelfth(TwelfthScreen),
    Assessment(AssessmentScreen),
    ExpertContact(ExpertScreen),
    JobMarket,
}

/// Screens of the post-10th guidance flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenthScreen {
    StreamPick,
    CareerList,
    CareerPathway,
}

/// Screens of the post-12th guidance flow. `CareerList`/`CareerPathway`
/// form the "find careers" branch; `ProfileForm` through `AdmissionPlan`
/// form the "find colleges" branch. Both fork from `CourseHub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwelfthScreen {
    StreamPick,
    CourseList,
    CourseHub,
    ProfileForm,
    CollegeList,
    AdmissionPlan,
    CareerList,
    CareerPathway,
}

/// Screens of the skills-assessment flow. `InterestPick` is the inserted
/// sub-screen between choosing a quiz mode and answering questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentScreen {
    ModePick,
    InterestPick,
    Question,
    Result,
}

/// Screens of the expert-contact flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpertScreen {
    Form,
    Confirmation,
}

impl Screen {
    /// The in-flow predecessor for plain back-navigation, if any.
    ///
    /// `None` means back-navigation leaves the flow (to Landing, or a full
    /// reset from Landing itself). The assessment sub-screens that discard
    /// quiz progress are handled by the controller before this table is
    /// consulted.
    pub fn predecessor(&self) -> Option<Screen> {
        use Screen::*;
        match self {
            AfterTenth(step) => {
                use TenthScreen::*;
                match step {
                    StreamPick => None,
                    CareerList => Some(AfterTenth(StreamPick)),
                    CareerPathway => Some(AfterTenth(CareerList)),
                }
            }
            AfterTwelfth(step) => {
                use TwelfthScreen::*;
                match step {
                    StreamPick => None,
                    CourseList => Some(AfterTwelfth(StreamPick)),
                    CourseHub => Some(AfterTwelfth(CourseList)),
                    ProfileForm => Some(AfterTwelfth(CourseHub)),
                    CollegeList => Some(AfterTwelfth(ProfileForm)),
                    AdmissionPlan => Some(AfterTwelfth(CollegeList)),
                    CareerList => Some(AfterTwelfth(CourseHub)),
                    CareerPathway => Some(AfterTwelfth(CareerList)),
                }
            }
            Assessment(step) => {
                use AssessmentScreen::*;
                match step {
                    ModePick | InterestPick | Question => None,
                    Result => Some(Assessment(Question)),
                }
            }
            Landing | ExpertContact(_) | JobMarket => None,
        }
    }
}
