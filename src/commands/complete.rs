use chrono::{Duration, Local};
use clap::Args;

use crate::content::resolve_for_day;
use crate::progress::mark_complete;

use super::AppContext;

/// Mark today's briefing complete
#[derive(Args)]
pub struct CompleteCommand {}

impl CompleteCommand {
    pub async fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        let coordinator = ctx.coordinator();
        let outcome = coordinator.reconcile().await;
        let data = outcome.data;

        let today = Local::now().date_naive();
        let yesterday = today - Duration::days(1);

        if data.is_completed_on(today) {
            println!("Already completed today. Come back tomorrow.");
            return Ok(());
        }

        let custom = ctx.local.load_custom_library();
        let devotional = resolve_for_day(data.current_day(), &custom);

        let updated = mark_complete(&data, today, yesterday, &devotional.id);
        coordinator.record(&updated).await?;

        println!("Mission accomplished. You led your marriage well today.");
        println!();
        println!("  Streak: {} day(s)", updated.streak);
        println!("  Total missions: {}", updated.total_completed);
        println!();
        println!("Tomorrow's focus: Day {}", updated.current_day());

        Ok(())
    }
}
