use chrono::Local;
use flyover_core::PassTime;

/// Render the predicted passes for the console, one per line.
pub fn format_passes(passes: &[PassTime]) -> String {
    if passes.is_empty() {
        return "No upcoming passes found for your location.".to_string();
    }

    passes
        .iter()
        .map(format_pass)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_pass(pass: &PassTime) -> String {
    let when = match pass.rise_datetime() {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%a %b %d %Y %H:%M:%S %z")
            .to_string(),
        // Epoch values chrono cannot represent are shown raw
        None => format!("epoch {}", pass.risetime),
    };

    format!("Next pass at {} for {} seconds!", when, pass.duration)
}
