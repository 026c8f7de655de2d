use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Player data that outlives a process: best score and the sound toggle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub high_score: u32,
    pub sound: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            high_score: 0,
            sound: true,
        }
    }
}

/// Reads and writes the profile as a small YAML document. Persistence is
/// best-effort: every failure degrades to defaults or a logged warning,
/// never into the game loop.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Profile {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Profile::default(),
        };
        match serde_yaml_ng::from_str(&text) {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring malformed profile");
                Profile::default()
            }
        }
    }

    pub fn save(&self, profile: &Profile) {
        let result = serde_yaml_ng::to_string(profile)
            .map_err(|err| err.to_string())
            .and_then(|text| {
                if let Some(dir) = self.path.parent() {
                    fs::create_dir_all(dir).map_err(|err| err.to_string())?;
                }
                fs::write(&self.path, text).map_err(|err| err.to_string())
            });
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), %err, "failed to save profile");
        }
    }
}

/// `~/.serpent`, falling back to the working directory when HOME is unset.
pub fn data_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".serpent"),
        None => PathBuf::from("."),
    }
}

pub fn default_profile_path() -> PathBuf {
    data_dir().join("profile.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ProfileStore {
        let path = std::env::temp_dir()
            .join(format!("serpent-test-{}-{}", std::process::id(), name));
        let _ = fs::remove_file(&path);
        ProfileStore::new(path)
    }

    #[test]
    fn test_missing_profile_loads_defaults() {
        let store = temp_store("missing.yaml");
        assert_eq!(store.load(), Profile::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store("roundtrip.yaml");
        let profile = Profile {
            high_score: 37,
            sound: false,
        };
        store.save(&profile);
        assert_eq!(store.load(), profile);
        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_malformed_profile_loads_defaults() {
        let store = temp_store("malformed.yaml");
        fs::write(&store.path, ": not yaml [").unwrap();
        assert_eq!(store.load(), Profile::default());
        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_partial_profile_fills_missing_fields() {
        let store = temp_store("partial.yaml");
        fs::write(&store.path, "high_score: 12\n").unwrap();
        let profile = store.load();
        assert_eq!(profile.high_score, 12);
        assert!(profile.sound);
        let _ = fs::remove_file(&store.path);
    }
}
