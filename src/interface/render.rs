use crate::engine::constants::WEIGHT_DISPLAY_PRECISION;
use crate::engine::{Balance, DeltaLabel, MixReport, RatioLabel};
use crate::models::AggregateTotals;
use crate::state::ContainerForm;

/// Format a weight in grams to one decimal place, trimming ".0".
pub fn format_grams(weight: f64) -> String {
    if !weight.is_finite() {
        return "-".to_string();
    }
    // Adding 0.0 turns -0.0 into 0.0.
    let rounded = (weight * WEIGHT_DISPLAY_PRECISION).round() / WEIGHT_DISPLAY_PRECISION + 0.0;
    format!("{}g", rounded)
}

/// Format a required amount, or "n/a" when the ratio makes it undefined.
pub fn format_required(required: Option<f64>) -> String {
    required.map(format_grams).unwrap_or_else(|| "n/a".to_string())
}

fn format_delta(delta: Option<DeltaLabel>) -> String {
    delta.map(|d| d.to_string()).unwrap_or_default()
}

/// Display the ratio line.
pub fn display_ratio(label: &RatioLabel) {
    println!("Coco to sugar ratio: {}", label);
}

/// Display actual and required amounts side by side.
///
/// Nothing is shown until either substance has weight.
pub fn display_balance(totals: &AggregateTotals, balance: &Balance) {
    if !totals.has_any() {
        println!("Add coco or sugar to see the required amounts.");
        return;
    }

    println!();
    println!("{:<10} {:>14} {:>14}", "", "Coco", "Sugar");
    println!(
        "{:<10} {:>14} {:>14}",
        "Actual",
        format_grams(totals.coco_total),
        format_grams(totals.sugar_total)
    );
    println!(
        "{:<10} {:>14} {:>14}",
        "Required",
        format_required(balance.required_coco),
        format_required(balance.required_sugar)
    );
    println!(
        "{:<10} {:>14} {:>14}",
        "",
        format_delta(balance.coco_delta),
        format_delta(balance.sugar_delta)
    );
}

/// Display a full report.
pub fn display_report(report: &MixReport) {
    println!();
    println!("=== Drinking Chocolate ===");
    println!();
    display_ratio(&report.label);
    display_balance(&report.totals, &report.balance);

    println!();
    if report.containers.is_empty() {
        println!("Containers: (none)");
    } else {
        println!("--- Containers ({}) ---", report.containers.len());
        for record in &report.containers {
            println!(
                "  {:<8} {}: {}",
                record.id,
                record.substance,
                format_grams(record.net_weight)
            );
        }
    }
    println!();
}

/// One-line summary of a form, collapsed when minimised.
pub fn form_summary(form: &ContainerForm) -> String {
    let head = format!("{} {}: {}", form.id, form.substance, format_grams(form.value));
    if form.minimised {
        head
    } else {
        format!(
            "{} (container {}, gross {})",
            head,
            format_grams(form.container_weight),
            format_grams(form.gross_weight)
        )
    }
}

/// Display the container forms.
pub fn display_forms(forms: &[ContainerForm]) {
    if forms.is_empty() {
        println!("No containers yet.");
        return;
    }

    for form in forms {
        println!("  {}", form_summary(form));
    }
}
