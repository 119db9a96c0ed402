use clap::Args;

use super::AppContext;

/// Show streak and skill mastery
#[derive(Args)]
pub struct ProgressCommand {}

impl ProgressCommand {
    pub async fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        let outcome = ctx.coordinator().reconcile().await;
        let data = outcome.data;

        println!("Your Leadership");
        println!("===============");
        println!();
        println!("  Day streak:     {}", data.streak);
        println!("  Total missions: {}", data.total_completed);
        println!(
            "  Joined:         {}",
            data.joined_date.format("%Y-%m-%d")
        );
        println!();
        println!("Skill Mastery");
        println!("-------------");

        let total = data.total_completed;
        print_level("Awareness Level", total, 30);
        print_level("Response Level", total.saturating_sub(30), 60);
        print_level("Repair Level", total.saturating_sub(90), 60);

        Ok(())
    }
}

fn print_level(label: &str, current: u32, max: u32) {
    let clamped = current.min(max);
    let width = 20u32;
    let filled = (clamped * width / max) as usize;
    let bar: String = "#".repeat(filled) + &"-".repeat(width as usize - filled);
    println!("  {:16} [{}] {}/{}", label, bar, clamped, max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_level_clamps_to_max() {
        // Exercised for panic-freedom at the boundaries.
        print_level("Awareness Level", 0, 30);
        print_level("Awareness Level", 30, 30);
        print_level("Awareness Level", 99, 30);
    }
}
