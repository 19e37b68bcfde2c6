use std::fmt::Write as _;
use std::path::Path;

use eyre::{eyre, WrapErr};
use medisight_core::models::consultation::ConsultationMetadata;
use medisight_core::models::health::HealthResponse;
use medisight_transcribe::audio_format_for_extension;
use medisight_transcribe::error::TranscribeError;
use tokio::io::AsyncReadExt;

use crate::cli::{Command, ConfigAction};
use crate::config::{self, MedisightConfig};
use crate::state::AppState;

/// Run one command and return what should be printed to stdout.
pub async fn run(
    state: &AppState,
    config: &MedisightConfig,
    config_path: Option<&Path>,
    command: Command,
) -> eyre::Result<String> {
    match command {
        Command::Ask { query } => {
            let response = state.health.process_health_query(&query.join(" ")).await;
            Ok(format_health_response(&response))
        }
        Command::Dashboard { query } => {
            let reply = state.dashboard.query(&query.join(" ")).await;
            let mut out = reply.message;
            if !reply.data.is_null() {
                out.push_str("\n\n");
                out.push_str(&serde_json::to_string_pretty(&reply.data)?);
            }
            Ok(out)
        }
        Command::Analyze { path } => {
            let transcript = read_transcript(path.as_deref()).await?;
            let analysis = state.consultations.analyze_transcript(&transcript).await?;
            Ok(serde_json::to_string_pretty(&analysis)?)
        }
        Command::Consult {
            audio,
            doctor,
            specialty,
            duration,
            format,
        } => {
            let bytes = read_audio(&audio).await?;
            let metadata = ConsultationMetadata {
                date: None,
                doctor,
                specialty,
                duration_minutes: duration,
            };
            let consultation = state
                .consultations
                .process_consultation(&bytes, metadata)
                .await?;
            Ok(state
                .consultations
                .export_consultation(consultation.id, &format)
                .await?)
        }
        Command::Tips => Ok(state
            .health
            .health_tips()
            .iter()
            .enumerate()
            .map(|(i, tip)| format!("{}. {tip}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")),
        Command::Reminder { kind, time } => Ok(state.health.health_reminder(&kind, &time)),
        Command::Config { action } => match action {
            ConfigAction::Show => Ok(serde_json::to_string_pretty(config)?),
            ConfigAction::Init => {
                let path = match config_path {
                    Some(path) => {
                        config::save_config_to(path, config)?;
                        path.to_path_buf()
                    }
                    None => config::save_config(config)?,
                };
                Ok(format!("wrote {}", path.display()))
            }
        },
    }
}

pub fn format_health_response(response: &HealthResponse) -> String {
    let mut out = format!("[severity: {}]\n{}\n", response.severity, response.response);
    if !response.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for suggestion in &response.suggestions {
            let _ = writeln!(out, "- {suggestion}");
        }
    }
    if let Some(follow_up) = &response.follow_up {
        let _ = write!(out, "\n{follow_up}");
    }
    out.trim_end().to_string()
}

async fn read_transcript(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read transcript {}", path.display())),
        _ => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .wrap_err("failed to read transcript from stdin")?;
            Ok(buf)
        }
    }
}

async fn read_audio(path: &Path) -> eyre::Result<Vec<u8>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| eyre!("audio file has no extension: {}", path.display()))?;
    audio_format_for_extension(ext)
        .ok_or_else(|| TranscribeError::UnsupportedFormat(format!(".{ext}")))?;

    tokio::fs::read(path)
        .await
        .wrap_err_with(|| format!("failed to read audio {}", path.display()))
}
