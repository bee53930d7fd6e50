//! error.rs — Erreurs du cœur ini-to-c.
//!
//! Deux familles seulement : l’accès à l’entrée (lecture du .ini) et l’accès
//! aux sorties (.h / .c). L’`io::Error` d’origine est conservée en `source`.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Entrée introuvable, illisible ou non UTF-8.
    #[error("lecture {path}: {source}")]
    Input {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// Création / écriture d’un artefact impossible.
    #[error("écriture {path}: {source}")]
    Output {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn input(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Chemin fautif (entrée ou sortie).
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Input { path, .. } | Self::Output { path, .. } => path,
        }
    }

    /// `io::ErrorKind` sous-jacent (pratique pour les tests et les logs).
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Input { source, .. } | Self::Output { source, .. } => source.kind(),
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
