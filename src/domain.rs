//! Shared domain types for the guidance session.
//!
//! All wire-facing types mirror the JSON shapes the advisory gateway
//! constrains the provider to emit: camelCase keys and closed string
//! enums. The stream enums serialize as their full display labels, which
//! are also the values the response schemas enumerate.

use serde::{Deserialize, Serialize};

/// The fixed interest tags offered when personalizing the quiz.
pub const COMMON_INTERESTS: [&str; 10] = [
    "Physics",
    "Mathematics",
    "Computer Science",
    "Biology",
    "Chemistry",
    "History",
    "Literature",
    "Art & Design",
    "Economics",
    "Music",
];

/// Subject streams a student can take into 11th and 12th grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenthStream {
    #[serde(rename = "Maths (PCM/PCMB)")]
    Maths,
    #[serde(rename = "Biology (PCB/PCMB)")]
    Biology,
    Commerce,
    #[serde(rename = "Arts/Humanities")]
    Arts,
}

impl TenthStream {
    pub const ALL: [TenthStream; 4] = [Self::Maths, Self::Biology, Self::Commerce, Self::Arts];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Maths => "Maths (PCM/PCMB)",
            Self::Biology => "Biology (PCB/PCMB)",
            Self::Commerce => "Commerce",
            Self::Arts => "Arts/Humanities",
        }
    }
}

impl std::fmt::Display for TenthStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Subject streams completed in 12th grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwelfthStream {
    #[serde(rename = "PCM (Physics, Chemistry, Maths)")]
    Pcm,
    #[serde(rename = "PCB (Physics, Chemistry, Biology)")]
    Pcb,
    Commerce,
    #[serde(rename = "Arts/Humanities")]
    Arts,
}

impl TwelfthStream {
    pub const ALL: [TwelfthStream; 4] = [Self::Pcm, Self::Pcb, Self::Commerce, Self::Arts];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pcm => "PCM (Physics, Chemistry, Maths)",
            Self::Pcb => "PCB (Physics, Chemistry, Biology)",
            Self::Commerce => "Commerce",
            Self::Arts => "Arts/Humanities",
        }
    }
}

impl std::fmt::Display for TwelfthStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated earning potential of a career, as categorized by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryPotential {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for SalaryPotential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(s)
    }
}

/// One career suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerOption {
    pub career_name: String,
    pub description: String,
    pub estimated_salary_potential: SalaryPotential,
}

/// Admission difficulty tier for a suggested college.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeTier {
    Dream,
    Reach,
    Safety,
}

impl std::fmt::Display for CollegeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Dream => "Dream",
            Self::Reach => "Reach",
            Self::Safety => "Safety",
        };
        f.write_str(s)
    }
}

/// One college suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub college_name: String,
    pub location: String,
    pub tier: CollegeTier,
    pub reason: String,
}

/// Free-text academic profile used for college matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentProfile {
    pub marks_10th: String,
    pub marks_12th: String,
    pub achievements: String,
}

/// A generated multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
}

/// Outcome of a completed quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub summary: String,
    pub suggested_streams: Vec<TenthStream>,
    pub suggested_careers: Vec<CareerOption>,
}

/// Current market demand for a queried career or skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(s)
    }
}

/// Job-market snapshot for a queried career or skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMarketReport {
    pub summary: String,
    pub demand: DemandLevel,
    pub salary_trends: String,
    pub required_skills: Vec<String>,
}

/// Expert-consultation request form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpertRequest {
    pub full_name: String,
    pub email: String,
    pub topic: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_option_parses_wire_shape() {
        let json = r#"{
            "careerName": "Accountant",
            "description": "Manages financial records.",
            "estimatedSalaryPotential": "High"
        }"#;
        let option: CareerOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.career_name, "Accountant");
        assert_eq!(option.estimated_salary_potential, SalaryPotential::High);
    }

    #[test]
    fn college_parses_wire_shape() {
        let json = r#"{
            "collegeName": "IIT Bombay",
            "location": "Mumbai, India",
            "tier": "Reach",
            "reason": "Strong program fit."
        }"#;
        let college: College = serde_json::from_str(json).unwrap();
        assert_eq!(college.tier, CollegeTier::Reach);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let json = r#"{
            "collegeName": "X",
            "location": "Y",
            "tier": "Stretch",
            "reason": "Z"
        }"#;
        assert!(serde_json::from_str::<College>(json).is_err());
    }

    #[test]
    fn streams_roundtrip_through_labels() {
        for stream in TenthStream::ALL {
            let json = serde_json::to_string(&stream).unwrap();
            assert_eq!(json, format!("\"{}\"", stream.label()));
            let parsed: TenthStream = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, stream);
        }
        for stream in TwelfthStream::ALL {
            let json = serde_json::to_string(&stream).unwrap();
            assert_eq!(json, format!("\"{}\"", stream.label()));
        }
    }

    #[test]
    fn assessment_result_parses_stream_labels() {
        let json = r#"{
            "summary": "Strong analytical skills.",
            "suggestedStreams": ["Commerce", "Maths (PCM/PCMB)"],
            "suggestedCareers": []
        }"#;
        let result: AssessmentResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.suggested_streams,
            vec![TenthStream::Commerce, TenthStream::Maths]
        );
    }

    #[test]
    fn job_market_report_parses_wire_shape() {
        let json = r#"{
            "summary": "Growing field.",
            "demand": "High",
            "salaryTrends": "Competitive and rising",
            "requiredSkills": ["Python", "Statistics"]
        }"#;
        let report: JobMarketReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.demand, DemandLevel::High);
        assert_eq!(report.required_skills.len(), 2);
    }
}
