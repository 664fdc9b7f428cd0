use shared_types::*;
use std::fs;
use std::path::{Path, PathBuf};
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut types = Vec::new();

    // Link model
    types.push(clean_type(ActionType::export_to_string()?));
    types.push(clean_type(ActionItem::export_to_string()?));
    types.push(clean_type(SynthesizedLink::export_to_string()?));
    types.push(clean_type(PartitionedActions::export_to_string()?));

    // Card payloads
    types.push(clean_type(CardPaymentsRecord::export_to_string()?));
    types.push(clean_type(ResolvedAction::export_to_string()?));
    types.push(clean_type(ContactRail::export_to_string()?));
    types.push(clean_type(PublicCardView::export_to_string()?));
    types.push(clean_type(CardStatusResponse::export_to_string()?));
    types.push(clean_type(CardOwnerResponse::export_to_string()?));
    types.push(clean_type(ClaimRequest::export_to_string()?));
    types.push(clean_type(ClaimResponse::export_to_string()?));
    types.push(clean_type(CardEditState::export_to_string()?));
    types.push(clean_type(SaveCardRequest::export_to_string()?));

    let output_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("../web/src/api-types").to_path_buf());
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Every type lands in the same file, so per-type imports are dropped.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
