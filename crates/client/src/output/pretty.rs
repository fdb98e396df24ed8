//! Pretty output formatting.

use eventcal_core::calendar::Event;

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Start: {}\n  End: {}",
        event.title,
        event.id,
        event.start_time.to_rfc3339(),
        event.end_time.to_rfc3339()
    );
    if !event.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", event.description));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events in storage.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}
