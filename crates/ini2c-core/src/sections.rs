//! sections.rs — Lecture du fichier INI en sections ordonnées.
//!
//! Règles (ligne par ligne, après `trim`) :
//!   - vide ou `#...`         → ignorée (commentaires pleine ligne uniquement)
//!   - `[nom]`                → nouvelle section courante, contenu remis à ""
//!   - autre, section active  → ligne + '\n' ajoutée au contenu
//!   - autre, avant tout `[]` → jetée
//!
//! Fins de ligne : `\r\n`, `\n` et `\r` seul (ancien format Mac) sont
//! toutes reconnues ; aucun `\r` ne reste donc dans le contenu.
//!
//! Aucun échappement ici : le contenu est gardé tel quel.

use std::fs;

use camino::Utf8Path;
use indexmap::IndexMap;
use log::{debug, trace};

use crate::error::{Error, Result};

/// Nom de section → contenu brut, dans l’ordre de première apparition.
pub type Sections = IndexMap<String, String>;

/// Lit et découpe un fichier INI (UTF-8).
pub fn parse_file(path: &Utf8Path) -> Result<Sections> {
    let text = fs::read_to_string(path).map_err(|e| Error::input(path, e))?;
    let sections = parse_str(&text);
    debug!("{path}: {} section(s)", sections.len());
    Ok(sections)
}

/// Découpe un texte INI déjà en mémoire.
pub fn parse_str(text: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;

    for (ln, raw) in split_lines(text).enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(name) = header_name(line) {
            trace!("ligne {}: section [{name}]", ln + 1);
            // Un nom répété garde sa position mais repart de zéro.
            sections.insert(name.to_string(), String::new());
            current = Some(name.to_string());
        } else if let Some(name) = &current {
            if let Some(body) = sections.get_mut(name) {
                body.push_str(line);
                body.push('\n');
            }
        } else {
            trace!("ligne {}: hors section, ignorée", ln + 1);
        }
    }
    sections
}

/// Découpe sur `\r\n`, `\r` ou `\n`.
fn split_lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = (!text.is_empty()).then_some(text);
    std::iter::from_fn(move || {
        let s = rest?;
        match s.find(['\r', '\n']) {
            Some(i) => {
                let skip = if s[i..].starts_with("\r\n") { 2 } else { 1 };
                let tail = &s[i + skip..];
                rest = (!tail.is_empty()).then_some(tail);
                Some(&s[..i])
            }
            None => {
                rest = None;
                Some(s)
            }
        }
    })
}

fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}
