// Digit sprite discovery: a directory of `0.png`..`9.png`, `colon.png`,
// `bg.png` and an app icon.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ticktock_core::{asset_keys, Asset, AssetProvider};

pub const ASSETS_ENV: &str = "TICKTOCK_ASSETS";
const ASSET_DIR: &str = "assets";

/// Asset directory candidates, in search order: `$TICKTOCK_ASSETS` if set,
/// otherwise `<exe_dir>/assets` then `./assets`.
pub fn asset_dir_candidates() -> Vec<PathBuf> {
    if let Some(dir) = std::env::var_os(ASSETS_ENV) {
        return vec![PathBuf::from(dir)];
    }
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join(ASSET_DIR));
    }
    dirs.push(PathBuf::from(ASSET_DIR));
    dirs
}

/// Images found in one asset directory, keyed by [`asset_keys`].
#[derive(Debug, Clone, Default)]
pub struct DirAssetProvider {
    dir: Option<PathBuf>,
    images: HashMap<String, Asset>,
}

impl DirAssetProvider {
    /// Loads from the first existing candidate directory.
    pub fn discover() -> Self {
        let candidates = asset_dir_candidates();
        match candidates.iter().find(|d| d.is_dir()) {
            Some(dir) => Self::load(dir),
            None => {
                log::warn!("Asset directory not found (tried {:?}), using font glyphs", candidates);
                Self::default()
            }
        }
    }

    pub fn load(dir: &Path) -> Self {
        let mut images = HashMap::new();

        let mut wanted: Vec<(&str, Vec<String>)> = asset_keys::DIGITS
            .iter()
            .map(|k| (*k, vec![format!("{}.png", k)]))
            .collect();
        wanted.push((asset_keys::COLON, vec!["colon.png".into()]));
        wanted.push((asset_keys::BACKGROUND, vec!["bg.png".into()]));
        wanted.push((asset_keys::ICON, vec!["icon.ico".into(), "icon.png".into()]));

        for (key, files) in wanted {
            let Some(path) = files.iter().map(|f| dir.join(f)).find(|p| p.is_file()) else {
                continue;
            };
            match image::image_dimensions(&path) {
                Ok((width, height)) => {
                    images.insert(
                        key.to_string(),
                        Asset {
                            path,
                            width,
                            height,
                        },
                    );
                }
                Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        log::info!("Loaded {} assets from {}", images.len(), dir.display());
        Self {
            dir: Some(dir.to_path_buf()),
            images,
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetProvider for DirAssetProvider {
    fn image(&self, key: &str) -> Option<&Asset> {
        self.images.get(key)
    }
}
