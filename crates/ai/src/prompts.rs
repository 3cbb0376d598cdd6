//! Prompt builders. Both ask for a single JSON object so the reply can be
//! parsed without a schema-aware client.

use smartedtech_core::grading::{PracticeLevel, TutorLevel};
use smartedtech_core::Subject;

pub fn practice_prompt(subject: Subject, level: PracticeLevel) -> String {
    format!(
        "Create a personalized educational assignment for a student in {subject} at a {level} level.\n\
\n\
The assignment should include:\n\
1. A title that describes the assignment\n\
2. A brief description (1-2 sentences)\n\
3. Detailed content with learning objectives, problems to solve, and explanations\n\
4. A list of 3-5 educational resources for further learning\n\
\n\
Format the entire response as a single, valid JSON object with the following structure:\n\
{{\n\
    \"title\": \"Assignment Title\",\n\
    \"description\": \"Brief description of the assignment\",\n\
    \"content\": \"Detailed content with markdown formatting\",\n\
    \"resources\": [\"Resource 1\", \"Resource 2\", \"Resource 3\"]\n\
}}\n",
        subject = subject,
        level = level.as_str(),
    )
}

fn tutor_difficulty(level: TutorLevel) -> &'static str {
    match level {
        TutorLevel::Low => "basic concepts that need reinforcement",
        TutorLevel::Medium => "intermediate concepts to strengthen understanding",
        TutorLevel::High => "advanced concepts to challenge the student",
    }
}

pub fn tutor_prompt(subject: Subject, level: TutorLevel) -> String {
    format!(
        "Create a personalized tutoring session for a student studying {subject}.\n\
Their performance level is: {level} (they need {difficulty}).\n\
\n\
Please provide:\n\
1. A title for this tutoring session\n\
2. A brief explanation of a key concept in {subject} appropriate for their level\n\
3. 3-5 practice questions with multiple-choice answers (A, B, C, D)\n\
4. The correct answers to these questions\n\
\n\
Format the response as a single JSON object with these fields:\n\
- title: string\n\
- content: string (the concept explanation)\n\
- quiz_data: array of question objects, each with:\n\
  - question: string\n\
  - options: array of 4 strings\n\
  - correct_answer: string (A, B, C, or D)\n",
        subject = subject,
        level = level.as_str(),
        difficulty = tutor_difficulty(level),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn practice_prompt_names_subject_level_and_keys() {
        let prompt = practice_prompt(Subject::Chemistry, PracticeLevel::Advanced);
        assert!(prompt.contains("student in Chemistry at a advanced level"));
        for key in ["\"title\"", "\"description\"", "\"content\"", "\"resources\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }

    #[test]
    fn tutor_prompt_describes_difficulty() {
        let prompt = tutor_prompt(Subject::Physics, TutorLevel::Low);
        assert!(prompt.contains("Their performance level is: low"));
        assert!(prompt.contains("basic concepts that need reinforcement"));
        assert!(prompt.contains("quiz_data"));
    }
}
