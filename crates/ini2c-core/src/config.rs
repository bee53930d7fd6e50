//! config.rs — Paramètres d’une génération ini-to-c.
//!
//! Pas de fichier de config : tout vient de la ligne de commande.
//! Seule la verbosité des logs se règle aussi par l’ENV (`INI2C_LOG`,
//! syntaxe `env_logger`, ex. `INI2C_LOG=debug`).

use camino::{Utf8Path, Utf8PathBuf};

/// Longueur max d’un identifiant C généré (C11 : 63 caractères significatifs
/// pour un identifiant interne).
pub const MAX_IDENT_LEN: usize = 63;

/// Extension de l’artefact de déclarations.
pub const DECL_EXT: &str = "h";

/// Extension de l’artefact de définitions.
pub const DEFN_EXT: &str = "c";

/// Variable d’environnement lue pour le filtre de logs.
pub const LOG_ENV: &str = "INI2C_LOG";

/// Une invocation complète : entrée, base des sorties, préfixe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Fichier INI à lire.
    pub input: Utf8PathBuf,
    /// Nom de base commun aux deux sorties (`<base>.h`, `<base>.c`).
    pub out_base: Utf8PathBuf,
    /// Préfixe ajouté à chaque identifiant C.
    pub prefix: String,
    /// Confirmation sur stdout après écriture.
    pub verbose: bool,
}

impl Options {
    pub fn new(
        input: impl Into<Utf8PathBuf>,
        out_base: impl Into<Utf8PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            out_base: out_base.into(),
            prefix: prefix.into(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, yes: bool) -> Self {
        self.verbose = yes;
        self
    }

    /// `<base>.h`
    pub fn decl_path(&self) -> Utf8PathBuf {
        with_ext(&self.out_base, DECL_EXT)
    }

    /// `<base>.c`
    pub fn defn_path(&self) -> Utf8PathBuf {
        with_ext(&self.out_base, DEFN_EXT)
    }
}

/// Ajoute l’extension sans toucher à une extension déjà présente
/// (`gen/help.v2` → `gen/help.v2.h`).
pub(crate) fn with_ext(base: &Utf8Path, ext: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{base}.{ext}"))
}
