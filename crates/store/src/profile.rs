//! Player profile persistence and export
//!
//! The profile only pre-fills the login form. It is overwritten on every login
//! and on every explicit save, and exported as `dados_jogador.json` on request.
//! A missing or unreadable profile is treated as empty.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::PlayerIdentity;
use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use crate::types::ContactKind;

/// Storage key of the profile.
pub const PROFILE_KEY: &str = "jogador_memoria";

/// File name of the exported profile.
pub const EXPORT_FILE_NAME: &str = "dados_jogador.json";

/// Stored player data. Only the contact field of the active edition is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    /// Epoch milliseconds of the last save.
    #[serde(default)]
    pub ts: i64,
}

impl PlayerProfile {
    pub fn new(name: &str, contact: &str, kind: ContactKind, ts: i64) -> Self {
        let mut profile = Self {
            name: name.trim().to_string(),
            ts,
            ..Self::default()
        };
        profile.set_contact(kind, contact.trim());
        profile
    }

    pub fn from_identity(identity: &PlayerIdentity, ts: i64) -> Self {
        Self::new(identity.name(), identity.contact(), identity.kind(), ts)
    }

    pub fn contact(&self, kind: ContactKind) -> Option<&str> {
        match kind {
            ContactKind::Business => self.empresa.as_deref(),
            ContactKind::Phone => self.telefone.as_deref(),
        }
    }

    fn set_contact(&mut self, kind: ContactKind, value: &str) {
        let slot = match kind {
            ContactKind::Business => &mut self.empresa,
            ContactKind::Phone => &mut self.telefone,
        };
        *slot = Some(value.to_string());
    }

    /// Fill empty fields from a previously stored profile.
    pub fn or_stored(mut self, stored: &PlayerProfile, kind: ContactKind) -> Self {
        if self.name.is_empty() {
            self.name = stored.name.clone();
        }
        if self.contact(kind).map_or(true, str::is_empty) {
            let fallback = stored.contact(kind).unwrap_or_default().to_string();
            self.set_contact(kind, &fallback);
        }
        self
    }
}

/// Reads and writes the profile under [`PROFILE_KEY`].
#[derive(Debug, Clone)]
pub struct ProfileStore<S> {
    kv: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn try_load(&self) -> Result<Option<PlayerProfile>> {
        let Some(raw) = self.kv.get(PROFILE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                key: PROFILE_KEY.to_string(),
                source,
            })
    }

    /// Stored profile, or an empty one when missing or unreadable.
    pub fn load(&self) -> PlayerProfile {
        match self.try_load() {
            Ok(profile) => profile.unwrap_or_default(),
            Err(e) => {
                log::warn!("ignoring stored profile: {e}");
                PlayerProfile::default()
            }
        }
    }

    pub fn save(&mut self, profile: &PlayerProfile) -> Result<()> {
        let raw = serde_json::to_string(profile).map_err(|source| StoreError::Encode {
            key: PROFILE_KEY.to_string(),
            source,
        })?;
        self.kv.set(PROFILE_KEY, &raw)
    }

    /// Record a successful login. Failures are logged and ignored.
    pub fn remember(&mut self, identity: &PlayerIdentity) -> PlayerProfile {
        let profile = PlayerProfile::from_identity(identity, crate::now_ms());
        if let Err(e) = self.save(&profile) {
            log::warn!("could not save profile: {e}");
        }
        profile
    }

    /// Save the form contents (falling back to the stored profile for empty
    /// fields) and export them as [`EXPORT_FILE_NAME`] inside `export_dir`.
    ///
    /// Saving to the store is best-effort; only the export can fail.
    pub fn save_and_export(
        &mut self,
        name: &str,
        contact: &str,
        kind: ContactKind,
        export_dir: &Path,
    ) -> Result<PathBuf> {
        let profile =
            PlayerProfile::new(name, contact, kind, crate::now_ms()).or_stored(&self.load(), kind);
        if let Err(e) = self.save(&profile) {
            log::warn!("could not save profile: {e}");
        }
        export_profile(&profile, export_dir)
    }
}

/// Write `profile` as pretty JSON to `<dir>/dados_jogador.json`.
pub fn export_profile(profile: &PlayerProfile, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let body = serde_json::to_string_pretty(profile).map_err(|source| StoreError::Encode {
        key: PROFILE_KEY.to_string(),
        source,
    })?;
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, body).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("profile exported to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_business_profile_json_shape() {
        let p = PlayerProfile::new(" Ana ", " ACME ", ContactKind::Business, 42);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["empresa"], "ACME");
        assert_eq!(json["ts"], 42);
        assert!(json.get("telefone").is_none());
    }

    #[test]
    fn test_phone_profile_json_shape() {
        let p = PlayerProfile::new("Ana", "11 98765-4321", ContactKind::Phone, 1);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["telefone"], "11 98765-4321");
        assert!(json.get("empresa").is_none());
    }

    #[test]
    fn test_missing_profile_loads_default() {
        let store = ProfileStore::new(MemoryStore::new());
        assert_eq!(store.try_load().unwrap(), None);
        assert_eq!(store.load(), PlayerProfile::default());
    }

    #[test]
    fn test_malformed_profile_loads_default() {
        let mut kv = MemoryStore::new();
        kv.set(PROFILE_KEY, "{not json").unwrap();
        let store = ProfileStore::new(kv);
        assert!(matches!(store.try_load(), Err(StoreError::Malformed { .. })));
        assert_eq!(store.load(), PlayerProfile::default());
    }

    #[test]
    fn test_partial_profile_uses_defaults() {
        let mut kv = MemoryStore::new();
        kv.set(PROFILE_KEY, r#"{"nome":"Bia"}"#).unwrap();
        let p = ProfileStore::new(kv).load();
        assert_eq!(p.name, "Bia");
        assert_eq!(p.empresa, None);
        assert_eq!(p.ts, 0);
    }

    #[test]
    fn test_remember_overwrites() {
        let mut store = ProfileStore::new(MemoryStore::new());
        let first = PlayerIdentity::validate("Ana", "ACME", ContactKind::Business).unwrap();
        let second = PlayerIdentity::validate("Bia", "Globex", ContactKind::Business).unwrap();
        store.remember(&first);
        store.remember(&second);

        let p = store.load();
        assert_eq!(p.name, "Bia");
        assert_eq!(p.contact(ContactKind::Business), Some("Globex"));
        assert!(p.ts > 0);
    }

    #[test]
    fn test_or_stored_fills_blanks_only() {
        let stored = PlayerProfile::new("Ana", "ACME", ContactKind::Business, 1);
        let p = PlayerProfile::new("", "Globex", ContactKind::Business, 2)
            .or_stored(&stored, ContactKind::Business);
        assert_eq!(p.name, "Ana");
        assert_eq!(p.contact(ContactKind::Business), Some("Globex"));
        assert_eq!(p.ts, 2);
    }
}
