use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{LatencyConfig, LogFormat, MedisightConfig};

/// Rule-based clinical assistant: health Q&A, consultation analysis and export.
#[derive(Parser, Debug)]
#[command(name = "medisight", version)]
pub struct Cli {
    /// Config file path (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the simulated service latency
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Seed for the mock transcript picker
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the health assistant a question
    Ask {
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Query the clinician dashboard chat
    Dashboard {
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Analyze a consultation transcript file ("-" or nothing reads stdin)
    Analyze { path: Option<PathBuf> },

    /// Transcribe, analyze and export a recorded consultation
    Consult {
        /// Audio file (mp3, m4a, wav, flac, ogg, webm)
        audio: PathBuf,

        #[arg(long)]
        doctor: Option<String>,

        #[arg(long)]
        specialty: Option<String>,

        /// Consultation length in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Export format: json, txt or pdf
        #[arg(short, long, default_value = "txt")]
        format: String,
    },

    /// Print the daily health tips
    Tips,

    /// Format a health reminder
    Reminder { kind: String, time: String },

    /// Show or initialize the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write the default config file
    Init,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut MedisightConfig) {
        if self.no_delay {
            config.latency = LatencyConfig::zero();
        }
        if let Some(seed) = self.seed {
            config.transcript_seed = Some(seed);
        }
        if self.json_logs {
            config.log_format = LogFormat::Json;
        }
    }
}
