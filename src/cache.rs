//! Texture cache keyed by filename

use crate::texture::TextureData;

use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct CachedTexture {
    filename: String,
    /// None when loading failed
    data: Option<TextureData>,
}

/// Textures loaded relative to a base directory
///
/// Each filename is loaded once.  Filenames compare without regard to ASCII
/// case.  Files that fail to load keep their slot so the failure is only
/// reported once.
///
///     use texraster::TextureCache;
///
///     let mut cache = TextureCache::new("does/not/exist");
///     let i = cache.load("Missing.png");
///     assert_eq!(cache.load("missing.PNG"), i);
///     assert!(cache.get(i).is_none());
///     assert_eq!(cache.len(), 1);
///
#[derive(Debug,Default)]
pub struct TextureCache {
    base_path: PathBuf,
    textures: Vec<CachedTexture>,
}

impl TextureCache {
    /// Create an empty cache loading files from `base_path`
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self { base_path: base_path.as_ref().to_path_buf(), textures: vec![] }
    }
    /// Create an empty cache loading files next to the model file `model`
    pub fn for_model<P: AsRef<Path>>(model: P) -> Self {
        Self::new(base_path_of(model))
    }
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
    /// Index of texture `filename`, loading it if not yet cached
    pub fn load(&mut self, filename: &str) -> usize {
        if let Some(i) = self.find(filename) {
            return i;
        }
        let path = self.base_path.join(filename);
        let data = match TextureData::from_file(&path) {
            Ok(t) => {
                info!("Texture '{}': {}x{} {} bpp", path.display(), t.width, t.height, t.components * 8);
                Some(t)
            },
            Err(e) => {
                warn!("Error loading '{}': {}", path.display(), e);
                None
            },
        };
        self.insert(filename, data)
    }
    /// Add already decoded texture data under `filename`
    ///
    /// Replaces the data of a cached entry with the same name
    pub fn insert(&mut self, filename: &str, data: Option<TextureData>) -> usize {
        if let Some(i) = self.find(filename) {
            self.textures[i].data = data;
            return i;
        }
        self.textures.push(CachedTexture { filename: filename.to_string(), data });
        self.textures.len() - 1
    }
    /// Index of a cached texture
    pub fn find(&self, filename: &str) -> Option<usize> {
        self.textures.iter().position(|t| t.filename.eq_ignore_ascii_case(filename))
    }
    /// Texture at index `i`, None if it failed to load or does not exist
    pub fn get(&self, i: usize) -> Option<&TextureData> {
        self.textures.get(i).and_then(|t| t.data.as_ref())
    }
    /// Loaded textures by index, failed loads are None
    pub fn textures(&self) -> Vec<Option<&TextureData>> {
        self.textures.iter().map(|t| t.data.as_ref()).collect()
    }
    pub fn len(&self) -> usize {
        self.textures.len()
    }
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Directory containing `model`, textures are resolved relative to it
///
/// Both `/` and `\` separate directories
///
///     use texraster::base_path_of;
///     use std::path::PathBuf;
///
///     assert_eq!(base_path_of("models/crate.obj"), PathBuf::from("models/"));
///     assert_eq!(base_path_of("models\\crate.obj"), PathBuf::from("models\\"));
///     assert_eq!(base_path_of("crate.obj"), PathBuf::from(""));
///
pub fn base_path_of<P: AsRef<Path>>(model: P) -> PathBuf {
    let s = model.as_ref().to_string_lossy();
    match s.rfind(|c: char| c == '/' || c == '\\') {
        Some(i) => PathBuf::from(&s[..= i]),
        None => PathBuf::new(),
    }
}
