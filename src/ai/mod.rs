mod client;
mod prompt;

pub use client::{CoachClient, CONNECTION_NOTICE, EMPTY_NOTICE, UNCONFIGURED_NOTICE};
pub use prompt::{
    date_ideas_prompt, draft_text_prompt, prayer_prompt, repair_prompt, system_instruction,
    PromptContext,
};
