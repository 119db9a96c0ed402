use clap::Args;

use crate::content::resolve_for_day;

use super::AppContext;

/// Generate a rotation audit log for content verification
#[derive(Args)]
pub struct AuditCommand {
    /// Number of days to audit
    #[arg(long, default_value = "365")]
    days: u32,
}

impl AuditCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        let custom = ctx.local.load_custom_library();

        println!("{:>4}  {:6}  {:16}  {}", "Day", "Path", "Role", "Anchor");
        println!("{}", "-".repeat(72));

        for day in 1..=self.days.max(1) {
            let devo = resolve_for_day(day, &custom);
            println!(
                "{:>4}  {:6}  {:16}  {} - {}",
                devo.day,
                devo.path.to_string(),
                devo.role,
                devo.anchor.source,
                truncate(&devo.anchor.text, 48)
            );
        }

        Ok(())
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}…")
    }
}
