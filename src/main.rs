use anyhow::{Context, Result};
use cert_gen::{
    batch_generate_certificates, generate_certificate, validate_certificate, CertificateContext,
    CertificateRequest, FileStore, ParticipantStore, Settings,
};
use cli::{Cli, Commands};
use std::path::Path;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        log::info!("{} not found, using built-in settings", path.display());
        return Ok(Settings::default());
    }
    Settings::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    let settings = load_settings(&cli.config)?;
    let mut store = FileStore::open(&cli.data)
        .with_context(|| format!("Failed to load data from {}", cli.data.display()))?;

    match cli.command {
        Commands::Generate {
            participant,
            template,
            validation_url,
        } => {
            let ctx = CertificateContext::new(settings);
            let mut request = CertificateRequest::new(participant).template(template);
            if let Some(url) = validation_url {
                request = request.validation_url(url);
            }

            let certificate = generate_certificate(&ctx, &store, &request)
                .with_context(|| format!("Failed to generate certificate for {participant}"))?;
            store
                .record_certificate_generated(participant, &certificate.filepath)
                .with_context(|| format!("Failed to record certificate in {}", cli.data.display()))?;

            println!("{}", certificate.filepath.display());
        }
        Commands::Batch { event, template } => {
            let ctx = CertificateContext::new(settings);
            // every certificate is recorded in the data file as soon as it is written
            let result = batch_generate_certificates(&ctx, &mut store, event, template)
                .with_context(|| format!("Failed to generate certificates for event {event}"))?;

            println!("Total:     {}", result.total);
            println!("Generated: {}", result.generated);
            println!("Errors:    {}", result.errors);
            for error in result.error_details.iter() {
                println!(
                    "  {} ({}): {}",
                    error.participant_name, error.participant_id, error.error
                );
            }
        }
        Commands::Validate { participant } => {
            let validation = validate_certificate(&store, participant);
            match (validation.valid, validation.participant, validation.event) {
                (true, Some(participant), Some(event)) => {
                    println!("Valid certificate: {} - {}", participant.name, event.name);
                }
                _ => {
                    anyhow::bail!("No valid certificate for participant {participant}");
                }
            }
        }
    }

    Ok(())
}
