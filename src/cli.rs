use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates the certificate for one participant
    Generate {
        /// Id of the participant
        participant: u64,
        /// Template to use instead of the event's or the default one
        #[clap(long)]
        template: Option<u64>,
        /// Base URL encoded in QR codes, overriding the settings file
        #[clap(long)]
        validation_url: Option<String>,
    },
    /// Generates certificates for every participant of an event
    Batch {
        /// Id of the event
        event: u64,
        /// Template to use instead of the event's or the default one
        #[clap(long)]
        template: Option<u64>,
    },
    /// Checks whether a participant holds a valid certificate
    Validate {
        /// Id of the participant
        participant: u64,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Settings file; built-in defaults are used when it does not exist
    #[clap(long, env = "CERT_GEN_CONFIG", default_value = "cert-gen.toml")]
    pub config: PathBuf,

    /// JSON file holding organisations, events, participants and templates
    #[clap(long, env = "CERT_GEN_DATA", default_value = "cert-gen.json")]
    pub data: PathBuf,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate() {
        let cli = Cli::parse_from([
            "cert-gen",
            "--data",
            "store.json",
            "generate",
            "12",
            "--validation-url",
            "https://example.org/v",
        ]);
        assert_eq!(cli.data, PathBuf::from("store.json"));
        match cli.command {
            Commands::Generate {
                participant,
                template,
                validation_url,
            } => {
                assert_eq!(participant, 12);
                assert_eq!(template, None);
                assert_eq!(validation_url.as_deref(), Some("https://example.org/v"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
