//! Response schemas for structure-constrained completions.
//!
//! These follow the `generateContent` response-schema dialect (uppercase
//! type names, `enum` for closed string sets). Each function matches the
//! domain type the advisory gateway parses the reply into.

use serde_json::{Value, json};

use crate::domain::TenthStream;

/// Array of career options with a closed salary-potential set.
pub fn career_options() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "careerName": { "type": "STRING" },
                "description": { "type": "STRING" },
                "estimatedSalaryPotential": {
                    "type": "STRING",
                    "enum": ["High", "Medium", "Low"]
                },
            },
            "required": ["careerName", "description", "estimatedSalaryPotential"],
        },
    })
}

/// Array of course-name strings.
pub fn course_list() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
    })
}

/// Array of college suggestions with a closed tier set.
pub fn colleges() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "collegeName": { "type": "STRING" },
                "location": { "type": "STRING" },
                "tier": { "type": "STRING", "enum": ["Dream", "Reach", "Safety"] },
                "reason": { "type": "STRING" },
            },
            "required": ["collegeName", "location", "tier", "reason"],
        },
    })
}

/// Array of multiple-choice quiz questions.
pub fn quiz_questions() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "question": { "type": "STRING" },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } },
            },
            "required": ["id", "question", "options"],
        },
    })
}

/// Quiz analysis: summary, streams restricted to the fixed 10th-grade set,
/// and suggested careers.
pub fn assessment_result() -> Value {
    let stream_labels: Vec<&str> = TenthStream::ALL.iter().map(|s| s.label()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "suggestedStreams": {
                "type": "ARRAY",
                "items": { "type": "STRING", "enum": stream_labels },
            },
            "suggestedCareers": career_options(),
        },
        "required": ["summary", "suggestedStreams", "suggestedCareers"],
    })
}

/// Job-market snapshot with a closed demand set.
pub fn job_market_report() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "demand": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
            "salaryTrends": { "type": "STRING" },
            "requiredSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": ["summary", "demand", "salaryTrends", "requiredSkills"],
    })
}
