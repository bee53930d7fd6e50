//! ini2c-core — Cœur de ini-to-c
//!
//! Transforme un fichier INI (sections `[nom]` + lignes de texte libre,
//! commentaires `#` pleine ligne) en une paire de fichiers C exposant le
//! contenu brut de chaque section comme constante chaîne.
//!
//! ## Modules
//! - `sections` : lecture INI → `Sections` (ordre d’apparition conservé).
//! - `cname`    : identifiants C, littéraux, garde d’inclusion.
//! - `emit`     : rendu et écriture de `<base>.h` / `<base>.c`.
//! - `config`   : `Options` d’une invocation + constantes.
//! - `error`    : `Error` (entrée / sortie) et `Result`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod cname;
pub mod config;
pub mod emit;
pub mod error;
pub mod sections;

use log::info;

// ---------- Reexports de confort ----------
pub use config::Options;
pub use emit::{Artifact, ArtifactKind, EmitPlan};
pub use error::{Error, Result};
pub use sections::{parse_file, parse_str, Sections};

/// Pipeline complet : lecture de `options.input`, puis écriture de la paire.
pub fn generate(options: &Options) -> Result<Vec<Artifact>> {
    let sections = parse_file(&options.input)?;
    let plan = EmitPlan::new(options.out_base.clone(), options.input.as_str());
    let artifacts = plan.emit_all(&sections, &options.prefix)?;
    info!(
        "{} → {} + {} ({} constante(s))",
        options.input,
        options.decl_path(),
        options.defn_path(),
        sections.len()
    );
    Ok(artifacts)
}
