//! Static study material served when the generative model is unavailable or
//! its reply cannot be used.

use smartedtech_core::generation::{GeneratedPractice, GeneratedTutorSession};
use smartedtech_core::grading::{PracticeLevel, TutorLevel};
use smartedtech_core::tutor::QuizQuestion;

struct PracticeTemplate {
    title: &'static str,
    description: &'static str,
    content: &'static str,
    resources: &'static [&'static str],
}

impl PracticeTemplate {
    fn to_generated(&self) -> GeneratedPractice {
        GeneratedPractice {
            title: self.title.to_string(),
            description: self.description.to_string(),
            content: self.content.to_string(),
            resources: self.resources.iter().map(|r| r.to_string()).collect(),
        }
    }
}

const PHYSICS_REMEDIAL: PracticeTemplate = PracticeTemplate {
    title: "Basic Physics Concepts Review",
    description: "A review of fundamental physics concepts to strengthen your understanding.",
    content: "# Basic Physics Concepts Review\n\n\
## Learning Objectives\n\
- Describe motion using distance, displacement, speed and velocity\n\
- State Newton's three laws of motion\n\
- Draw simple free-body diagrams\n\n\
## Key Ideas\n\
An object keeps its state of motion unless a net force acts on it. \
The net force on an object equals its mass times its acceleration (F = ma).\n\n\
## Practice Problems\n\
1. A car travels 120 km in 2 hours. What is its average speed?\n\
2. A 5 kg box is pushed with a net force of 20 N. What is its acceleration?\n\
3. Explain why a passenger lurches forward when a bus brakes suddenly.\n",
    resources: &[
        "Khan Academy: Basic Physics",
        "Physics Classroom: Newton's Laws",
        "YouTube: Crash Course Physics",
    ],
};

const PHYSICS_STANDARD: PracticeTemplate = PracticeTemplate {
    title: "Intermediate Physics: Forces and Motion",
    description: "Explore the relationship between forces and motion in various scenarios.",
    content: "# Intermediate Physics: Forces and Motion\n\n\
## Learning Objectives\n\
- Resolve forces into components\n\
- Apply Newton's second law to connected bodies\n\
- Include friction in equilibrium and dynamics problems\n\n\
## Practice Problems\n\
1. A 10 kg block rests on a 30 degree incline with no friction. Find its acceleration.\n\
2. Two blocks of 2 kg and 3 kg are joined by a string over a frictionless pulley. Find the tension.\n\
3. A crate needs 150 N to start sliding on a floor. Its mass is 40 kg. Find the coefficient of static friction.\n",
    resources: &[
        "OpenStax: College Physics",
        "MIT OpenCourseWare: Classical Mechanics",
        "PhET Interactive Simulations: Forces and Motion",
        "HyperPhysics: Mechanics",
    ],
};

const PHYSICS_ADVANCED: PracticeTemplate = PracticeTemplate {
    title: "Advanced Physics: Dynamics and Conservation Laws",
    description: "A deep dive into dynamics, energy conservation, and advanced problem-solving techniques.",
    content: "# Advanced Physics: Dynamics and Conservation Laws\n\n\
## Learning Objectives\n\
- Use work-energy and impulse-momentum theorems together\n\
- Analyse elastic and inelastic collisions in two dimensions\n\
- Apply conservation of angular momentum to rotating systems\n\n\
## Practice Problems\n\
1. A 2 kg ball moving at 6 m/s strikes a stationary 4 kg ball elastically. Find both final velocities.\n\
2. A skater spinning at 3 rad/s pulls in her arms, halving her moment of inertia. Find her new angular velocity.\n\
3. Derive the escape velocity from Earth's surface using energy conservation.\n",
    resources: &[
        "Feynman Lectures on Physics",
        "Taylor: Classical Mechanics",
        "arXiv.org: Research papers on classical mechanics",
        "NPTEL: Advanced Dynamics",
        "American Journal of Physics: Selected articles",
    ],
};

const CHEMISTRY_REMEDIAL: PracticeTemplate = PracticeTemplate {
    title: "Fundamentals of Chemistry Review",
    description: "A comprehensive review of basic chemistry concepts and principles.",
    content: "# Fundamentals of Chemistry Review\n\n\
## Learning Objectives\n\
- Describe atomic structure and isotopes\n\
- Read the periodic table by group and period\n\
- Balance simple chemical equations\n\n\
## Practice Problems\n\
1. How many protons, neutrons and electrons does carbon-14 have?\n\
2. Balance: H2 + O2 -> H2O\n\
3. Why do elements in the same group share chemical properties?\n",
    resources: &[
        "Khan Academy: General Chemistry",
        "Crash Course: Chemistry Basics",
        "ChemGuide: Basic Concepts",
    ],
};

const CHEMISTRY_STANDARD: PracticeTemplate = PracticeTemplate {
    title: "Intermediate Chemistry: Reactions and Equilibrium",
    description: "Explore chemical reactions, equilibrium, and thermodynamics in various systems.",
    content: "# Intermediate Chemistry: Reactions and Equilibrium\n\n\
## Learning Objectives\n\
- Write equilibrium constant expressions\n\
- Predict shifts with Le Chatelier's principle\n\
- Relate enthalpy change to bond energies\n\n\
## Practice Problems\n\
1. Write Kc for N2 + 3H2 <-> 2NH3.\n\
2. Predict the effect of raising pressure on the equilibrium above.\n\
3. Estimate the enthalpy change for burning methane from average bond energies.\n",
    resources: &[
        "OpenStax: Chemistry",
        "MIT OpenCourseWare: Principles of Chemical Science",
        "ChemCollective: Virtual Lab",
        "Journal of Chemical Education: Selected articles",
    ],
};

const CHEMISTRY_ADVANCED: PracticeTemplate = PracticeTemplate {
    title: "Advanced Chemistry: Quantum Mechanics and Spectroscopy",
    description: "A deep dive into quantum chemistry, molecular spectroscopy, and advanced analytical techniques.",
    content: "# Advanced Chemistry: Quantum Mechanics and Spectroscopy\n\n\
## Learning Objectives\n\
- Solve the particle-in-a-box model and apply it to conjugated molecules\n\
- Interpret IR and NMR spectra\n\
- Relate molecular orbital diagrams to bond order\n\n\
## Practice Problems\n\
1. Estimate the HOMO-LUMO gap of butadiene with the particle-in-a-box model.\n\
2. Assign the major peaks in the IR spectrum of ethyl acetate.\n\
3. Use a molecular orbital diagram to explain why O2 is paramagnetic.\n",
    resources: &[
        "McQuarrie: Quantum Chemistry",
        "Atkins: Physical Chemistry",
        "Journal of the American Chemical Society: Research articles",
        "Gaussian: Computational Chemistry Software",
        "Spectral Database for Organic Compounds (SDBS)",
    ],
};

const MATHEMATICS_REMEDIAL: PracticeTemplate = PracticeTemplate {
    title: "Essential Mathematics Review",
    description: "A comprehensive review of fundamental mathematical concepts and problem-solving techniques.",
    content: "# Essential Mathematics Review\n\n\
## Learning Objectives\n\
- Simplify algebraic expressions\n\
- Solve linear equations in one variable\n\
- Work with fractions, ratios and percentages\n\n\
## Practice Problems\n\
1. Solve 3x + 7 = 22.\n\
2. Simplify 2(a + 3) - 4(a - 1).\n\
3. A jacket costs 80 after a 20% discount. What was the original price?\n",
    resources: &[
        "Khan Academy: Algebra Basics",
        "Purplemath: Algebra Lessons",
        "Math is Fun: Interactive Exercises",
    ],
};

const MATHEMATICS_STANDARD: PracticeTemplate = PracticeTemplate {
    title: "Intermediate Mathematics: Functions and Analysis",
    description: "Explore functions, their properties, and applications in various mathematical contexts.",
    content: "# Intermediate Mathematics: Functions and Analysis\n\n\
## Learning Objectives\n\
- Identify domain, range and inverses of functions\n\
- Differentiate polynomial and exponential functions\n\
- Use derivatives to find maxima and minima\n\n\
## Practice Problems\n\
1. Find the inverse of f(x) = (2x - 1) / 3.\n\
2. Differentiate g(x) = x^3 e^x.\n\
3. A rectangle has perimeter 40. Find the dimensions that maximise its area.\n",
    resources: &[
        "OpenStax: Calculus",
        "MIT OpenCourseWare: Single Variable Calculus",
        "Paul's Online Math Notes",
        "Desmos: Graphing Calculator",
    ],
};

const MATHEMATICS_ADVANCED: PracticeTemplate = PracticeTemplate {
    title: "Advanced Mathematics: Analysis and Abstract Algebra",
    description: "A rigorous exploration of mathematical analysis, abstract algebra, and proof techniques.",
    content: "# Advanced Mathematics: Analysis and Abstract Algebra\n\n\
## Learning Objectives\n\
- Write epsilon-delta proofs of limits and continuity\n\
- Prove basic results about groups and subgroups\n\
- Use induction and contradiction fluently\n\n\
## Practice Problems\n\
1. Prove that f(x) = x^2 is continuous at every real number.\n\
2. Show that every subgroup of a cyclic group is cyclic.\n\
3. Prove that the square root of 2 is irrational.\n",
    resources: &[
        "Rudin: Principles of Mathematical Analysis",
        "Dummit and Foote: Abstract Algebra",
        "arXiv.org: Mathematics research papers",
        "American Mathematical Monthly: Selected articles",
        "MathOverflow: Advanced mathematics Q&A",
    ],
};

fn practice_template(subject: &str, level: PracticeLevel) -> Option<&'static PracticeTemplate> {
    let template = match (subject.trim().to_ascii_lowercase().as_str(), level) {
        ("physics", PracticeLevel::Remedial) => &PHYSICS_REMEDIAL,
        ("physics", PracticeLevel::Standard) => &PHYSICS_STANDARD,
        ("physics", PracticeLevel::Advanced) => &PHYSICS_ADVANCED,
        ("chemistry", PracticeLevel::Remedial) => &CHEMISTRY_REMEDIAL,
        ("chemistry", PracticeLevel::Standard) => &CHEMISTRY_STANDARD,
        ("chemistry", PracticeLevel::Advanced) => &CHEMISTRY_ADVANCED,
        ("mathematics", PracticeLevel::Remedial) => &MATHEMATICS_REMEDIAL,
        ("mathematics", PracticeLevel::Standard) => &MATHEMATICS_STANDARD,
        ("mathematics", PracticeLevel::Advanced) => &MATHEMATICS_ADVANCED,
        _ => return None,
    };
    Some(template)
}

/// Table entry for `subject` (case-insensitive), or a generic assignment
/// naming the subject and level.
pub fn fallback_practice(subject: &str, level: PracticeLevel) -> GeneratedPractice {
    if let Some(template) = practice_template(subject, level) {
        return template.to_generated();
    }
    GeneratedPractice {
        title: format!("{subject} Practice Assignment"),
        description: format!("A practice assignment for {subject} at the {level} level."),
        content: format!(
            "# {subject} Practice Assignment\n\n\
## Learning Objectives\n\
- Understand key concepts in {subject}\n\
- Practice solving problems\n\
- Apply knowledge to real-world scenarios\n\n\
## Practice Problems\n\
1. Problem 1\n\
2. Problem 2\n\
3. Problem 3"
        ),
        resources: vec![
            format!("{subject} Textbook"),
            "Online Resources".to_string(),
            "Practice Exercises".to_string(),
        ],
    }
}

fn question(text: &str, options: [&str; 4], correct: &str) -> QuizQuestion {
    QuizQuestion {
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
    }
}

/// One-question session for `subject`. Physics distinguishes the low level;
/// the other known subjects use a single session for every level.
pub fn fallback_tutor_session(subject: &str, level: TutorLevel) -> GeneratedTutorSession {
    let (content, quiz) = match (subject.trim().to_ascii_lowercase().as_str(), level) {
        ("physics", TutorLevel::Low) => (
            "Let's review Newton's Laws of Motion. These fundamental principles describe the \
relationship between an object and the forces acting on it."
                .to_string(),
            question(
                "What is Newton's First Law?",
                [
                    "Objects in motion stay in motion unless acted upon by a force",
                    "Force equals mass times acceleration",
                    "For every action there is an equal and opposite reaction",
                    "Energy cannot be created or destroyed",
                ],
                "A",
            ),
        ),
        ("physics", _) => (
            "Let's explore the concepts of work, energy, and power in physics systems.".to_string(),
            question(
                "What is the unit of power?",
                ["Joule", "Newton", "Watt", "Pascal"],
                "C",
            ),
        ),
        ("chemistry", _) => (
            "Let's review the periodic table and element properties.".to_string(),
            question(
                "What element has the symbol 'Na'?",
                ["Nitrogen", "Sodium", "Neon", "Nickel"],
                "B",
            ),
        ),
        ("mathematics", _) => (
            "Let's practice solving quadratic equations using different methods.".to_string(),
            question(
                "What is the quadratic formula?",
                ["x = (-b ± √(b² - 4ac))/2a", "E = mc²", "a² + b² = c²", "F = ma"],
                "A",
            ),
        ),
        _ => (
            format!("Let's review some key concepts in {subject}."),
            question(
                &format!("This is a sample question about {subject}"),
                ["Option A", "Option B", "Option C", "Option D"],
                "A",
            ),
        ),
    };

    GeneratedTutorSession {
        title: format!("Personalized {subject} Practice"),
        content,
        quiz_data: vec![quiz],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_lookup_ignores_case() {
        let practice = fallback_practice("CHEMISTRY", PracticeLevel::Standard);
        assert_eq!(
            practice.title,
            "Intermediate Chemistry: Reactions and Equilibrium"
        );
        assert_eq!(practice.resources.len(), 4);
    }

    #[test]
    fn unknown_subject_gets_generic_practice() {
        let practice = fallback_practice("Biology", PracticeLevel::Remedial);
        assert_eq!(practice.title, "Biology Practice Assignment");
        assert_eq!(
            practice.description,
            "A practice assignment for Biology at the remedial level."
        );
        assert!(practice.content.starts_with("# Biology Practice Assignment"));
        assert_eq!(
            practice.resources,
            vec!["Biology Textbook", "Online Resources", "Practice Exercises"]
        );
    }

    #[test]
    fn physics_low_differs_from_other_levels() {
        let low = fallback_tutor_session("Physics", TutorLevel::Low);
        let high = fallback_tutor_session("Physics", TutorLevel::High);
        assert_eq!(low.quiz_data[0].correct_answer, "A");
        assert_eq!(high.quiz_data[0].question, "What is the unit of power?");
        assert_eq!(high.quiz_data[0].correct_answer, "C");
        assert_eq!(low.title, "Personalized Physics Practice");
    }

    #[test]
    fn unknown_subject_gets_generic_session() {
        let session = fallback_tutor_session("History", TutorLevel::Medium);
        assert_eq!(session.content, "Let's review some key concepts in History.");
        assert_eq!(
            session.quiz_data[0].question,
            "This is a sample question about History"
        );
        assert!(session.quiz_data[0].is_well_formed());
    }
}
