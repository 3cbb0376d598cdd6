//! Static booster composer.
//!
//! Output depends only on the inputs; the same request always yields
//! byte-identical content.

use super::boosters_model::{AssessmentQuestion, BoosterAssessment, BoosterContent, BoosterResource};
use crate::grading::BoosterTier;

/// Builds the diagnostic summary, strategies, resources and assessment for a
/// graded assignment.
pub fn compose_booster(
    tier: BoosterTier,
    subject: &str,
    assignment_title: &str,
    grade: f64,
    feedback: &str,
) -> BoosterContent {
    BoosterContent {
        diagnostic_summary: diagnostic_summary(tier, assignment_title, grade, feedback),
        strategies: strategies(tier),
        resources: resources(tier, subject),
        assessment: BoosterAssessment {
            questions: vec![
                multiple_choice(question_one(tier, subject), options_one(tier)),
                multiple_choice(question_two(tier, assignment_title), options_two(tier)),
                AssessmentQuestion::ShortAnswer {
                    question: "Write a 1-sentence revised thesis statement that is more specific than: 'This paper discusses the topic.'".to_string(),
                },
                AssessmentQuestion::ShortAnswer {
                    question: format!(
                        "Based on the feedback '{feedback}', what is the single most important change you must make for the next assignment?"
                    ),
                },
                multiple_choice(question_five(tier).to_string(), options_five(tier)),
            ],
            guidance: guidance(tier, feedback),
        },
    }
}

/// Renders a grade the way scores are shown to students: whole numbers keep
/// one decimal (`92.0`), fractional ones print as-is (`87.5`).
pub fn format_grade(grade: f64) -> String {
    if grade.fract() == 0.0 {
        format!("{grade:.1}")
    } else {
        format!("{grade}")
    }
}

fn header(tier: BoosterTier) -> &'static str {
    match tier {
        BoosterTier::One => "🎯 From Excellence to Mastery",
        BoosterTier::Two => "📝 Elevating Your Strong Foundation",
        BoosterTier::Three => "🚀 Building Core Academic Strength",
        BoosterTier::Four => "🌱 Establishing Essential Skills",
    }
}

fn focus_area(tier: BoosterTier) -> &'static str {
    match tier {
        BoosterTier::One => {
            "refining your analytical depth and developing originality in your work"
        }
        BoosterTier::Two => "strengthening your organization and supporting evidence",
        BoosterTier::Three => "mastering core requirements and improving execution",
        BoosterTier::Four => "understanding instructions and building foundational skills",
    }
}

fn diagnostic_summary(
    tier: BoosterTier,
    assignment_title: &str,
    grade: f64,
    feedback: &str,
) -> String {
    let verdict = match tier {
        BoosterTier::One => "shows excellent work!",
        BoosterTier::Two => "demonstrates solid understanding.",
        BoosterTier::Three => "shows you're on the right track.",
        BoosterTier::Four => "indicates areas for improvement.",
    };
    format!(
        "{header}\n\nYour grade of {grade}% on '{assignment_title}' {verdict} The feedback indicates: {feedback}\n\nYour focus should be on {focus}.",
        header = header(tier),
        grade = format_grade(grade),
        focus = focus_area(tier),
    )
}

fn strategies(tier: BoosterTier) -> Vec<String> {
    let items: [&str; 3] = match tier {
        BoosterTier::One => [
            "Schedule dedicated time for deeper research beyond required sources",
            "Create an outline that deliberately challenges conventional thinking on the topic",
            "Implement a peer review process with high-performing classmates",
        ],
        BoosterTier::Two => [
            "Create a detailed outline with clear topic sentences for each paragraph",
            "Develop an evidence tracking system to ensure claims are well-supported",
            "Schedule specific revision sessions focused solely on clarity and flow",
        ],
        BoosterTier::Three => [
            "Break down assignment requirements into a checklist before starting",
            "Create a timeline with specific milestones for each section of the assignment",
            "Use templates or examples to understand proper formatting and structure",
        ],
        BoosterTier::Four => [
            "Schedule a meeting with your instructor to clarify assignment expectations",
            "Create a basic outline that directly addresses each requirement point by point",
            "Set up a regular study schedule with short, focused sessions",
        ],
    };
    to_strings(&items)
}

fn resources(tier: BoosterTier, subject: &str) -> Vec<BoosterResource> {
    let link = |name: String, url: &str| BoosterResource {
        name,
        url: url.to_string(),
    };
    match tier {
        BoosterTier::One | BoosterTier::Two => vec![
            link(
                "Advanced Research Methods Guide".into(),
                "https://www.coursera.org/learn/research-methods",
            ),
            link(
                "Critical Thinking in Academic Writing".into(),
                "https://owl.purdue.edu/owl/general_writing/academic_writing/",
            ),
            link(
                format!("Advanced {subject} Resources"),
                "https://scholar.google.com/",
            ),
        ],
        BoosterTier::Three | BoosterTier::Four => vec![
            link(
                "Understanding Assignment Rubrics".into(),
                "https://www.thoughtco.com/rubric-basics-3081258",
            ),
            link(
                "Basic Academic Writing Structure".into(),
                "https://owl.purdue.edu/owl/general_writing/academic_writing/essay_writing/",
            ),
            link(
                "Time Management for Students".into(),
                "https://www.mindtools.com/pages/article/newHTE_88.htm",
            ),
        ],
    }
}

fn multiple_choice(question: String, options: Vec<String>) -> AssessmentQuestion {
    AssessmentQuestion::MultipleChoice {
        question,
        options,
        correct_answer: 0,
    }
}

fn question_one(tier: BoosterTier, subject: &str) -> String {
    match tier {
        BoosterTier::One => format!(
            "When conducting research for an advanced {subject} assignment, which approach is most effective?"
        ),
        BoosterTier::Two => format!(
            "Which organizational structure would best support a complex argument in {subject}?"
        ),
        BoosterTier::Three => format!(
            "When citing sources in a {subject} assignment, what is the most important consideration?"
        ),
        BoosterTier::Four => format!(
            "What is the first step you should take when receiving a new {subject} assignment?"
        ),
    }
}

fn options_one(tier: BoosterTier) -> Vec<String> {
    let options: [&str; 4] = match tier {
        BoosterTier::One => [
            "Consulting peer-reviewed journals and primary sources",
            "Using only the required textbook",
            "Relying on general websites for information",
            "Asking classmates for their notes",
        ],
        BoosterTier::Two => [
            "Thesis-driven structure with topic sentences that build upon each other",
            "Chronological order regardless of argument strength",
            "Random arrangement of facts and opinions",
            "Listing information without connecting ideas",
        ],
        BoosterTier::Three => [
            "Ensuring all borrowed ideas are properly attributed",
            "Only citing direct quotes",
            "Citing only at the end of the paper",
            "Using as few citations as possible",
        ],
        BoosterTier::Four => [
            "Carefully read all instructions and the rubric",
            "Start writing immediately",
            "Ask a friend what they're doing",
            "Wait until the day before to begin",
        ],
    };
    to_strings(&options)
}

fn question_two(tier: BoosterTier, assignment_title: &str) -> String {
    match tier {
        BoosterTier::One => format!(
            "For an assignment like '{assignment_title}', what would elevate it from good to excellent?"
        ),
        BoosterTier::Two => format!(
            "When developing your thesis for '{assignment_title}', what approach would strengthen your argument?"
        ),
        BoosterTier::Three => format!(
            "What strategy would help ensure you meet all requirements for '{assignment_title}'?"
        ),
        BoosterTier::Four => format!(
            "What is the most important first step when planning '{assignment_title}'?"
        ),
    }
}

fn options_two(tier: BoosterTier) -> Vec<String> {
    let options: [&str; 4] = match tier {
        BoosterTier::One => [
            "Incorporating original analysis that extends beyond class discussions",
            "Using more quotes from the textbook",
            "Making the paper longer than required",
            "Using complex vocabulary throughout",
        ],
        BoosterTier::Two => [
            "Making it specific, debatable, and supported by evidence",
            "Keeping it vague to cover more topics",
            "Making it as complex as possible with technical terms",
            "Focusing only on your personal opinion",
        ],
        BoosterTier::Three => [
            "Creating a checklist of all requirements before starting",
            "Skimming the instructions quickly",
            "Focusing only on the parts you find interesting",
            "Waiting until you finish to check requirements",
        ],
        BoosterTier::Four => [
            "Breaking down the assignment into smaller, manageable tasks",
            "Writing as much as possible in one sitting",
            "Focusing only on the introduction",
            "Skipping the planning phase entirely",
        ],
    };
    to_strings(&options)
}

fn question_five(tier: BoosterTier) -> &'static str {
    match tier {
        BoosterTier::One => {
            "When is the optimal time to begin the editing process for a high-quality assignment?"
        }
        BoosterTier::Two => {
            "What is the most effective approach to integrating evidence into your assignment?"
        }
        BoosterTier::Three => "What is the best strategy for managing your time on an assignment?",
        BoosterTier::Four => "How should you approach asking for help with your assignment?",
    }
}

fn options_five(tier: BoosterTier) -> Vec<String> {
    let options: [&str; 4] = match tier {
        BoosterTier::One => [
            "After completing a full draft, with enough time for multiple revision rounds",
            "The night before the deadline",
            "Only after receiving feedback from the instructor",
            "Only focusing on spelling and grammar checks",
        ],
        BoosterTier::Two => [
            "Introduce evidence, explain its relevance, and connect it to your thesis",
            "Include as many quotes as possible without explanation",
            "Save all evidence for the conclusion",
            "Rely primarily on personal anecdotes instead of research",
        ],
        BoosterTier::Three => [
            "Break the assignment into smaller tasks with specific deadlines",
            "Complete the entire assignment the day before it's due",
            "Focus on the easiest parts first and possibly skip difficult sections",
            "Work on multiple assignments simultaneously without a plan",
        ],
        BoosterTier::Four => [
            "Be specific about what you don't understand and seek help early",
            "Wait until the last minute to ask questions",
            "Ask for general help without identifying specific issues",
            "Avoid asking for help to seem self-sufficient",
        ],
    };
    to_strings(&options)
}

fn guidance(tier: BoosterTier, feedback: &str) -> String {
    let advice = match tier {
        BoosterTier::One => "For excellence, focus on developing original insights and ensuring your work demonstrates mastery beyond course expectations.",
        BoosterTier::Two => "To strengthen your work, focus on improving the organization and ensuring each point is well-supported with evidence.",
        BoosterTier::Three => "To improve, ensure you're meeting all core requirements and develop a systematic approach to assignment completion.",
        BoosterTier::Four => "Start by mastering the fundamentals: understanding instructions, basic research skills, and meeting submission requirements.",
    };
    format!("Focus on addressing the specific feedback you received: {feedback}\n\n{advice}")
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
