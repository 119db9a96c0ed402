//! Prompt composition for the coaching collaborator. Pure string
//! building; the network side lives in the client.

/// Day context threaded into every coaching exchange.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub day: u32,
    pub role: String,
    pub title: String,
}

/// The fixed coaching persona plus the current day's context.
pub fn system_instruction(ctx: &PromptContext) -> String {
    format!(
        "You are a wise, masculine, Biblically-grounded marriage coach for men.\n\
         Your tone is brotherly, direct, encouraging, and tactical (like a special ops briefing).\n\
         You rely on principles from:\n\
         1. The Bible (Servant Leadership, Husband as Protector).\n\
         2. John Gottman (Repair attempts, turning towards bids).\n\
         3. Willard Harley (Emotional Needs, Love Bank).\n\
         4. Shaunti Feldhahn (Men/Women's inner lives).\n\
         \n\
         Current Context:\n\
         - User is on Day {}.\n\
         - Current Role: {}.\n\
         - Current Topic: {}.\n\
         \n\
         Keep responses short (under 150 words), actionable, and formatted with bullet points if needed.",
        ctx.day, ctx.role, ctx.title
    )
}

/// Canned prompt: three text-message drafts for today's focus.
pub fn draft_text_prompt(ctx: &PromptContext) -> String {
    format!(
        "Draft 3 distinct text messages I can send to my wife right now.\n\
         Context: My role today is '{}' and the focus is '{}'.\n\
         Make them: 1) Playful/Flirty, 2) Deep/Appreciative, 3) Brief/Checking-in.\n\
         Just give me the texts, labeled.",
        ctx.role, ctx.title
    )
}

/// Canned prompt: start a repair attempt after conflict.
pub fn repair_prompt() -> String {
    "I messed up and there is tension. Help me draft a verbal apology or text to start a repair attempt.\n\
     Focus on taking responsibility and not being defensive."
        .to_string()
}

/// Canned prompt: a short prayer tied to today's topic.
pub fn prayer_prompt() -> String {
    "Give me a short prayer for my wife based on today's topic.".to_string()
}

/// Canned prompt: date ideas that fit today's role.
pub fn date_ideas_prompt(ctx: &PromptContext) -> String {
    format!(
        "Give me 3 practical date ideas that fit the '{}' role.",
        ctx.role
    )
}
