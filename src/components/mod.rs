//! Reusable UI components

pub mod text_prompt;

pub use text_prompt::TextPromptState;
