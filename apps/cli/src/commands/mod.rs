pub mod analysis;
pub mod chat;
pub mod key;
pub mod sequence;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dnalens_client::HttpAnalysisClient;
use dnalens_core::presets::{find_example, EXAMPLE_SEQUENCES};
use dnalens_formats::import::read_sequence_file;
use dnalens_session::{Session, SqliteCredentialStore};

use crate::config::{api_key_from_env, AppConfig};

/// Where the raw sequence text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Example(String),
    Stdin,
}

/// Raw validator input for a source. File contents replace the input as-is.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Inline(text) => Ok(text.clone()),
        InputSource::File(path) => {
            let imported = read_sequence_file(path)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            log::info!("Imported {} as {}", path.display(), imported.format);
            if imported.is_multi_record() {
                let names: Vec<_> = imported.records.iter().map(|r| r.name()).collect();
                log::warn!(
                    "{} contains {} records ({}); their residues are analysed as one sequence",
                    path.display(),
                    imported.records.len(),
                    names.join(", ")
                );
            }
            Ok(imported.content)
        }
        InputSource::Example(name) => find_example(name)
            .map(|e| e.sequence.to_string())
            .with_context(|| {
                let known: Vec<_> = EXAMPLE_SEQUENCES.iter().map(|e| e.name).collect();
                format!("Unknown example '{}'. Available: {}", name, known.join(", "))
            }),
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read sequence from stdin")?;
            Ok(text)
        }
    }
}

pub fn open_credentials(config: &AppConfig) -> Result<SqliteCredentialStore> {
    let dir = config.data_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    let path = config.credentials_path()?;
    SqliteCredentialStore::open(&path)
        .with_context(|| format!("Failed to open credential store {}", path.display()))
}

/// A session against the configured service, with the persistent key store
pub fn open_session(config: &AppConfig) -> Result<Session<HttpAnalysisClient, SqliteCredentialStore>> {
    let client = HttpAnalysisClient::new(config.client.clone())
        .context("Failed to initialise HTTP client")?;
    let credentials = open_credentials(config)?;
    Ok(Session::new(client, credentials).with_api_key_override(api_key_from_env()))
}
