use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::content::parse_verses;

use super::AppContext;

/// Import custom verses from CSV (Reference, Verse, Topic)
#[derive(Args)]
pub struct ImportCommand {
    /// CSV file to import, or "-" for stdin
    file: PathBuf,
}

impl ImportCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
        let input = if self.file.to_str() == Some("-") {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(&self.file)
                .map_err(|e| format!("Failed to read '{}': {}", self.file.display(), e))?
        };

        let parsed = parse_verses(&input);
        if parsed.is_empty() {
            println!("No verses found. Expected a header line, then: Reference, Verse, Topic");
            return Ok(());
        }

        let mut library = ctx.local.load_custom_library();
        let count = parsed.len();
        library.extend(parsed);
        ctx.local.save_custom_library(&library)?;

        println!(
            "Successfully imported {} verse(s)! The rotation engine will now cycle these into your faith days.",
            count
        );
        println!("Custom library size: {}", library.len());

        Ok(())
    }
}
