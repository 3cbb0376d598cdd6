//! Personalized tutor module - generated sessions, quizzes and grading.

mod tutor_model;
mod tutor_service;
mod tutor_traits;

pub use tutor_model::{
    score_quiz, NewPersonalizedTutor, PersonalizedTutor, QuizQuestion, QuizResult,
    ANSWER_LETTERS,
};
pub use tutor_service::TutorService;
pub use tutor_traits::{TutorRepositoryTrait, TutorServiceTrait};
