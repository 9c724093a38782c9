use clap::Parser;
use contact_page::cli::commands::{cmd_smoke, cmd_submit};
use contact_page::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve endpoint: CLI > config
    let endpoint = cli.endpoint.as_deref().or(config.endpoint.as_deref());

    match cli.command {
        Commands::Submit {
            full_name,
            email,
            phone,
            message,
            transport,
        } => {
            let transport_name = transport.as_deref().unwrap_or(&config.transport);
            let endpoint = match endpoint {
                Some(url) => url,
                None if transport_name == "mock" => "mock://contact",
                None => {
                    return Err("No endpoint configured (use --endpoint or contact-page.yaml)".into());
                }
            };

            let values = [
                ("full_name", full_name.as_str()),
                ("email", email.as_str()),
                ("phone", phone.as_str()),
                ("message", message.as_str()),
            ];

            let confirmed = cmd_submit(endpoint, &values, transport_name, cli.verbose)?;
            if !confirmed {
                std::process::exit(1);
            }
        }
        Commands::Smoke => {
            cmd_smoke(cli.verbose)?;
        }
    }

    Ok(())
}
