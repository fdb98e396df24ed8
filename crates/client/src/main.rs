//! eventcal-client CLI entry point.

use clap::Parser;
use eventcal_client::cli::{Cli, Commands, OutputFormat};
use eventcal_client::client::events::EventRequest;
use eventcal_client::client::EventcalClient;
use eventcal_client::output::{format_output, pretty};
use eventcal_core::calendar::EventId;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = EventcalClient::new(&cli.base_url);

    match cli.command {
        Commands::Events(events_cmd) => {
            use eventcal_client::cli::events::EventsAction;
            match events_cmd.action {
                EventsAction::List => {
                    let events = client.list_events().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
                    }
                }
                EventsAction::Create {
                    start,
                    end,
                    title,
                    description,
                } => {
                    let event = client
                        .create_event(&EventRequest {
                            start_time: start,
                            end_time: end,
                            title,
                            description,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_event(&event))
                        }
                    }
                }
                EventsAction::Get { id } => {
                    let event = client.get_event(EventId(id)).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_event(&event)),
                    }
                }
                EventsAction::Update {
                    id,
                    start,
                    end,
                    title,
                    description,
                } => {
                    let event = client
                        .update_event(
                            EventId(id),
                            &EventRequest {
                                start_time: start,
                                end_time: end,
                                title,
                                description,
                            },
                        )
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_event(&event))
                        }
                    }
                }
                EventsAction::Delete { id } => {
                    client.delete_event(EventId(id)).await?;
                    if !cli.quiet {
                        println!("Deleted event {}", id);
                    }
                }
                EventsAction::Reset => {
                    client.reset_events().await?;
                    if !cli.quiet {
                        println!("Deleted all events");
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use eventcal_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Check => {
                    let health = client.health().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                        OutputFormat::Pretty => {
                            println!(
                                "Health:\n  Status: {}\n  Events: {}",
                                health.status, health.events
                            )
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
