use chrono::Local;
use clap::Args;

use crate::content::resolve_for_day;

use super::AppContext;

/// Show today's briefing
#[derive(Args)]
pub struct TodayCommand {
    /// Preview a specific day instead of the current one
    #[arg(long, short)]
    day: Option<u32>,
}

impl TodayCommand {
    pub async fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        let outcome = ctx.coordinator().reconcile().await;
        let data = outcome.data;

        let day = self.day.unwrap_or_else(|| data.current_day()).max(1);
        let custom = ctx.local.load_custom_library();
        let devotional = resolve_for_day(day, &custom);

        println!("Streak: {} • Total missions: {}", data.streak, data.total_completed);
        println!();
        print!("{}", devotional);

        let today = Local::now().date_naive();
        if data.is_completed_on(today) {
            println!();
            println!("Mission accomplished. You led your marriage well today.");
        }

        Ok(())
    }
}
