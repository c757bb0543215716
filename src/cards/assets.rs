//! Static card assets read from disk.

use std::path::{Path, PathBuf};

use crate::error::CardError;

/// File name of the adaptive-card sample inside the cards directory.
const ADAPTIVE_CARD_FILE: &str = "AdaptiveCardSample.json";

/// Reads card payloads from a directory of JSON assets.
///
/// The asset is re-read and re-parsed on every call — there is no cache, so
/// edits to the file show up on the next turn. A missing or unreadable file,
/// or one that is not valid JSON, fails the turn that needed it.
#[derive(Debug, Clone)]
pub struct CardAssets {
    cards_dir: PathBuf,
}

impl CardAssets {
    pub fn new(cards_dir: impl Into<PathBuf>) -> Self {
        Self {
            cards_dir: cards_dir.into(),
        }
    }

    /// Path of the adaptive-card sample asset.
    pub fn adaptive_card_path(&self) -> PathBuf {
        self.cards_dir.join(ADAPTIVE_CARD_FILE)
    }

    /// Loads and parses the adaptive-card sample. The payload is opaque to
    /// the bot; it is attached to the reply unchanged.
    pub async fn load_adaptive_card(&self) -> Result<serde_json::Value, CardError> {
        let path = self.adaptive_card_path();
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| CardError::AssetRead {
                path: display_path(&path),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| CardError::AssetParse {
            path: display_path(&path),
            source,
        })
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn assets_with_file(contents: &str) -> (tempfile::TempDir, CardAssets) {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(ADAPTIVE_CARD_FILE)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let assets = CardAssets::new(dir.path());
        (dir, assets)
    }

    #[tokio::test]
    async fn loads_and_parses_the_asset() {
        let (_dir, assets) = assets_with_file(r#"{"type": "AdaptiveCard", "body": []}"#);
        let card = assets.load_adaptive_card().await.unwrap();
        assert_eq!(card["type"], "AdaptiveCard");
    }

    #[tokio::test]
    async fn missing_asset_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let assets = CardAssets::new(dir.path());
        let err = assets.load_adaptive_card().await.unwrap_err();
        assert!(matches!(err, CardError::AssetRead { .. }));
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let (_dir, assets) = assets_with_file("{ not json");
        let err = assets.load_adaptive_card().await.unwrap_err();
        assert!(matches!(err, CardError::AssetParse { .. }));
    }

    #[tokio::test]
    async fn asset_is_reread_on_every_load() {
        let (dir, assets) = assets_with_file(r#"{"version": "1.0"}"#);
        assert_eq!(assets.load_adaptive_card().await.unwrap()["version"], "1.0");

        std::fs::write(
            dir.path().join(ADAPTIVE_CARD_FILE),
            r#"{"version": "1.3"}"#,
        )
        .unwrap();
        assert_eq!(assets.load_adaptive_card().await.unwrap()["version"], "1.3");
    }
}
