//! SmartEdTech AI - study material generation using rig-core.
//!
//! # Architecture
//!
//! - `model`: text-completion seam with the Gemini client and a test double
//! - `prompts`: practice and tutoring prompt builders
//! - `content_generator`: reply parsing and validation, implements the core
//!   `ContentGeneratorTrait`
//! - `fallback`: static material used when generation fails
//! - `config`: model id, API key and timeout supplied at runtime

pub mod config;
pub mod content_generator;
pub mod error;
pub mod fallback;
pub mod model;
pub mod prompts;

pub use config::{GenerationConfig, DEFAULT_GEMINI_MODEL, DEFAULT_GENERATION_TIMEOUT_SECS};
pub use content_generator::{extract_json_object, ContentGenerator};
pub use error::AiError;
pub use fallback::{fallback_practice, fallback_tutor_session};
pub use model::{FakeModel, GeminiModel, GenerativeModelTrait};
