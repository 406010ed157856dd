use anyhow::{Context, Result};
use dnalens_session::{mask_key, CredentialStore};

pub fn set_key(store: &mut impl CredentialStore, key: &str) -> Result<String> {
    store.set(key).context("Failed to save API key")?;
    Ok("API key saved".to_string())
}

/// Masked display of the stored key
pub fn show_key(store: &impl CredentialStore) -> Result<String> {
    let stored = store.get().context("Failed to read API key")?;
    Ok(match stored {
        Some(key) => format!("Stored API key: {}", mask_key(&key)),
        None => "No API key stored".to_string(),
    })
}

pub fn clear_key(store: &mut impl CredentialStore) -> Result<String> {
    let removed = store.clear().context("Failed to clear API key")?;
    Ok(if removed {
        "API key removed".to_string()
    } else {
        "No API key stored".to_string()
    })
}
