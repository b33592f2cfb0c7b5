//! Prompt construction for each advisory operation.

use std::collections::BTreeMap;

use crate::domain::{StudentProfile, TenthStream, TwelfthStream};

pub fn career_options_after_tenth(stream: TenthStream) -> String {
    format!(
        "For a student who has chosen the {stream} stream after 10th grade in India, list a \
         diverse range of career options available globally. Rank them with high-paying careers \
         at the top. For each career, provide a concise one-sentence description. The salary \
         potential should be categorized as 'High', 'Medium', or 'Low'."
    )
}

pub fn career_pathway_after_tenth(stream: TenthStream, career: &str) -> String {
    format!(
        "Provide a detailed, step-by-step roadmap for a student from India to become a {career}, \
         starting after choosing the {stream} stream in 11th grade. The roadmap should be easy to \
         understand and actionable. Include key subjects, recommended entrance exams, \
         undergraduate courses, top colleges (examples), and essential skills to develop. Format \
         the response as clear, sequential text with headings and bullet points."
    )
}

pub fn course_options(stream: TwelfthStream) -> String {
    format!(
        "List a comprehensive and diverse list of popular undergraduate courses a student in \
         India can pursue after completing 12th grade with the {stream} stream. Include a mix of \
         traditional, modern, and interdisciplinary courses available worldwide. Focus on \
         providing a wide variety of options beyond the obvious choices. Return a JSON array of \
         strings with course names. Just provide the array, no other text."
    )
}

pub fn college_suggestions(course: &str, profile: &StudentProfile) -> String {
    format!(
        "Based on the following student profile, suggest a list of suitable colleges (in India \
         and abroad) for pursuing a '{course}'. Profile: 10th marks: {marks_10th}, 12th marks: \
         {marks_12th}, Achievements: {achievements}. Categorize colleges into 'Dream', 'Reach', \
         and 'Safety' tiers. Provide a brief reason for each suggestion.",
        marks_10th = profile.marks_10th,
        marks_12th = profile.marks_12th,
        achievements = profile.achievements,
    )
}

pub fn admission_pathway(college: &str, course: &str) -> String {
    format!(
        "Provide a detailed step-by-step guide on how a student from India can get admission \
         into '{college}' for the '{course}' program. Include details about entrance exams, \
         eligibility criteria (like board percentages), application process, and important tips. \
         Format the response as clear, sequential text."
    )
}

pub fn career_options_after_course(course: &str) -> String {
    format!(
        "List the best career options available after completing a '{course}'. Rank them with \
         high-paying careers at the top. For each career, provide a concise one-sentence \
         description. The salary potential should be categorized as 'High', 'Medium', or 'Low'."
    )
}

pub fn career_pathway_after_course(course: &str, career: &str) -> String {
    format!(
        "Provide a detailed pathway on how to become a {career} after completing a {course} \
         degree. Include information on further studies (if required), certifications, \
         entry-level job roles, and career progression. Format the response as clear, sequential \
         text."
    )
}

pub fn interest_quiz(interests: &[String]) -> String {
    format!(
        "Create a skills assessment quiz for a high school student whose interests include: \
         {interests}. Generate 8 scenario-based, multiple-choice questions designed to evaluate \
         their aptitude in logical reasoning, creativity, communication, and problem-solving. \
         The scenarios MUST be tailored to their interests. For example, if they like 'Physics', \
         a question could involve a hypothetical experiment. If they like 'Literature', a \
         question could be about interpreting a character's motive. Each question must have a \
         unique ID from 1 to 8 and 4 distinct, plausible options.",
        interests = interests.join(", ")
    )
}

pub fn open_ended_quiz() -> String {
    "Create a skills assessment quiz for a high school student who is completely unsure about \
     their interests. Generate 5 Higher-Order Thinking Skills (HOTS) questions. These questions \
     should be engaging, open-ended scenarios that test critical thinking, creativity, and \
     problem-solving abilities without relying on specific subject knowledge. For example, 'You \
     find a mysterious old map where the landmarks change every hour. What's your first step to \
     decipher it?' Each question must have a unique ID from 1 to 5 and 4 distinct, creative \
     options that reflect different approaches to the problem."
        .to_string()
}

pub fn analyze_interest_quiz(answers: &BTreeMap<u32, String>) -> String {
    format!(
        "A student has completed a skills assessment. Here are their answers: {answers}. \
         Analyze these answers to identify their core strengths across logical reasoning, \
         creativity, communication, and problem-solving. Based on this analysis:\n\
         1. Write a brief, encouraging summary (2-3 sentences) of their strengths.\n\
         2. Suggest 2-3 suitable subject streams for them after 10th grade from this list: \
         {streams}.\n\
         3. Suggest 4 diverse career options that align with their strengths. For each career, \
         provide a name, a one-sentence description, and an estimated salary potential ('High', \
         'Medium', or 'Low').",
        answers = serialize_answers(answers),
        streams = tenth_stream_list(),
    )
}

pub fn analyze_open_ended_quiz(answers: &BTreeMap<u32, String>) -> String {
    format!(
        "A student, who is confused about their career path, has answered a Higher-Order \
         Thinking Skills quiz. Here are their answers: {answers}. Analyze these responses to \
         uncover their underlying aptitudes and potential fields of interest (e.g., Analytical \
         Problem-Solving, Creative Innovation, Strategic Planning, Empathetic Communication). \
         Based on this deep analysis:\n\
         1. Write an insightful summary (3-4 sentences) explaining their core cognitive \
         strengths and potential passion areas. Connect their answer choices to these \
         strengths.\n\
         2. Suggest 2-3 suitable subject streams for them after 10th grade from this list: \
         {streams}.\n\
         3. Suggest 4 diverse career options that align with their identified aptitudes. For \
         each career, provide a name, a one-sentence description, and an estimated salary \
         potential ('High', 'Medium', or 'Low').",
        answers = serialize_answers(answers),
        streams = tenth_stream_list(),
    )
}

pub fn job_market_report(query: &str) -> String {
    format!(
        "Analyze the current job market for a \"{query}\". Provide a brief summary, the current \
         demand ('High', 'Medium', or 'Low'), a short description of salary trends (e.g., \
         \"Competitive and rising\"), and a list of 5-7 essential skills required for this role."
    )
}

fn tenth_stream_list() -> String {
    TenthStream::ALL
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Answers go into the prompt as a JSON object keyed by question id.
fn serialize_answers(answers: &BTreeMap<u32, String>) -> String {
    serde_json::to_string(answers).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_parameters() {
        let prompt = career_options_after_tenth(TenthStream::Commerce);
        assert!(prompt.contains("Commerce stream after 10th grade"));

        let prompt = career_pathway_after_tenth(TenthStream::Maths, "Engineer");
        assert!(prompt.contains("become a Engineer"));
        assert!(prompt.contains("Maths (PCM/PCMB) stream"));

        let prompt = admission_pathway("MIT", "Computer Science");
        assert!(prompt.contains("'MIT'"));
        assert!(prompt.contains("'Computer Science'"));
    }

    #[test]
    fn interest_quiz_joins_tags() {
        let interests = vec!["Physics".to_string(), "Music".to_string()];
        let prompt = interest_quiz(&interests);
        assert!(prompt.contains("Physics, Music"));
    }

    #[test]
    fn analysis_serializes_answers_by_id() {
        let mut answers = BTreeMap::new();
        answers.insert(1, "Option A".to_string());
        answers.insert(2, "Option B".to_string());
        let prompt = analyze_interest_quiz(&answers);
        assert!(prompt.contains(r#"{"1":"Option A","2":"Option B"}"#));
        assert!(prompt.contains("Maths (PCM/PCMB), Biology (PCB/PCMB), Commerce, Arts/Humanities"));
    }

    #[test]
    fn college_prompt_embeds_profile() {
        let profile = StudentProfile {
            marks_10th: "92%".to_string(),
            marks_12th: "88%".to_string(),
            achievements: "Math Olympiad".to_string(),
        };
        let prompt = college_suggestions("B.Tech", &profile);
        assert!(prompt.contains("10th marks: 92%"));
        assert!(prompt.contains("Achievements: Math Olympiad"));
    }
}
