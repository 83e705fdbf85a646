use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Extensions tried in order when resolving a brand's logo art.
const LOGO_EXTENSIONS: [&str; 2] = ["txt", "ascii"];

/// Text-art payload shown on a logo card. Opaque to the core; the board
/// renderer centers the lines inside the card rect.
#[derive(Clone, Debug)]
pub struct LogoArt {
    pub lines: Vec<String>,
}

/// Derives the on-disk file stem for a brand: accents folded to plain
/// ASCII, lowercased, words joined with underscores. "Hermés" becomes
/// "hermes", "Loro Piana" becomes "loro_piana".
pub fn brand_file_stem(brand: &str) -> String {
    let mut folded = String::with_capacity(brand.len());
    for ch in brand.chars() {
        match fold_accent(ch) {
            Some(plain) => folded.push_str(plain),
            None => folded.extend(ch.to_lowercase()),
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join("_")
}

fn fold_accent(ch: char) -> Option<&'static str> {
    let plain = match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => "a",
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => "e",
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => "i",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ø' => "o",
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => "u",
        'ç' | 'Ç' => "c",
        'ñ' | 'Ñ' => "n",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        _ => return None,
    };
    Some(plain)
}

/// Resolves logo payloads by brand, caching hits and misses. A missing
/// file is a degraded-but-valid outcome; the card falls back to text.
pub struct LogoLibrary {
    root: PathBuf,
    cache: HashMap<String, Option<LogoArt>>,
}

impl LogoLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LogoLibrary {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn load(&mut self, brand: &str) -> Option<&LogoArt> {
        if !self.cache.contains_key(brand) {
            let art = self.read_art(brand);
            if art.is_none() {
                warn!(brand, "no logo art found, card will show text instead");
            }
            self.cache.insert(brand.to_string(), art);
        }
        self.cache.get(brand).and_then(|art| art.as_ref())
    }

    fn read_art(&self, brand: &str) -> Option<LogoArt> {
        let stem = brand_file_stem(brand);
        for ext in LOGO_EXTENSIONS {
            let path = self.root.join(format!("{stem}.{ext}"));
            let Ok(raw) = fs::read_to_string(&path) else {
                continue;
            };
            debug!(path = %path.display(), "loaded logo art");
            return Some(LogoArt {
                lines: raw.lines().map(str::to_string).collect(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_fold_accents_and_join_words() {
        assert_eq!(brand_file_stem("Hermés"), "hermes");
        assert_eq!(brand_file_stem("Loro Piana"), "loro_piana");
        assert_eq!(brand_file_stem("Bottega  Veneta"), "bottega_veneta");
        assert_eq!(brand_file_stem("YSL"), "ysl");
        assert_eq!(brand_file_stem("Éternel Übermaß"), "eternel_ubermass");
    }

    #[test]
    fn missing_art_is_a_cached_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = LogoLibrary::new(dir.path());
        assert!(library.load("Cartier").is_none());
        assert!(library.load("Cartier").is_none());
    }

    #[test]
    fn art_is_found_under_the_folded_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hermes.txt"), "__H__\n |H| \n").unwrap();
        let mut library = LogoLibrary::new(dir.path());
        let art = library.load("Hermés").unwrap();
        assert_eq!(art.lines, vec!["__H__", " |H| "]);
    }
}
