use clap::{Args, Subcommand};

use crate::ai::{
    date_ideas_prompt, draft_text_prompt, prayer_prompt, repair_prompt, system_instruction,
    CoachClient, PromptContext,
};
use crate::content::resolve_for_day;

use super::AppContext;

/// Ask the AI coach (the War Room)
#[derive(Args)]
pub struct CoachCommand {
    #[command(subcommand)]
    command: CoachSubcommand,
}

#[derive(Subcommand)]
enum CoachSubcommand {
    /// Ask a free-form question
    Ask {
        /// The question or situation
        prompt: String,
    },
    /// Draft three text messages for today's focus
    DraftText,
    /// Help starting a repair attempt after conflict
    Repair,
    /// A short prayer for your wife on today's topic
    Prayer,
    /// Date ideas that fit today's role
    DateIdeas,
}

impl CoachCommand {
    pub async fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        let outcome = ctx.coordinator().reconcile().await;
        let data = outcome.data;

        let custom = ctx.local.load_custom_library();
        let devotional = resolve_for_day(data.current_day(), &custom);

        let prompt_ctx = PromptContext {
            day: devotional.day,
            role: devotional.role.clone(),
            title: devotional.title.clone(),
        };

        let client = CoachClient::new(ctx.config.coach.value.clone());
        let status = if client.is_configured() { "online" } else { "offline" };
        println!(
            "War Room • Day {} • {} [{}]",
            prompt_ctx.day, prompt_ctx.role, status
        );
        println!();

        let prompt = match &self.command {
            CoachSubcommand::Ask { prompt } => prompt.clone(),
            CoachSubcommand::DraftText => draft_text_prompt(&prompt_ctx),
            CoachSubcommand::Repair => repair_prompt(),
            CoachSubcommand::Prayer => prayer_prompt(),
            CoachSubcommand::DateIdeas => date_ideas_prompt(&prompt_ctx),
        };

        if prompt.trim().is_empty() {
            println!("Nothing to ask.");
            return Ok(());
        }

        let response = client
            .generate(&prompt, &system_instruction(&prompt_ctx))
            .await;

        println!("{}", response);
        Ok(())
    }
}
