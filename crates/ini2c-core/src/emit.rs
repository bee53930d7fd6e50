//! emit.rs — Émission des artefacts C pour ini-to-c
//!
//! À partir des `Sections`, produire et écrire :
//! - Déclarations `<base>.h` (garde d’inclusion + un `extern const char` par section)
//! - Définitions `<base>.c`  (`#include "<base>.h"` + une constante par section)
//!
//! Les deux textes sont rendus en mémoire puis écrits dans l’ordre `.h`, `.c`.
//! Pas de nettoyage si le `.c` échoue après le `.h` : la prochaine exécution
//! réécrit la paire.
//!
//! Usage typique :
//! ```no_run
//! use ini2c_core::emit::EmitPlan;
//! # let sections = ini2c_core::Sections::new();
//! let plan = EmitPlan::new("gen/help", "help.ini");
//! plan.emit_all(&sections, "help_").expect("write");
//! ```

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

use crate::cname::{c_identifier, c_string_body, guard_macro};
use crate::config::{with_ext, DECL_EXT, DEFN_EXT};
use crate::error::{Error, Result};
use crate::sections::Sections;

/* ───────────────────────────── Types publics ───────────────────────────── */

/// Type d’artefact produit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `<base>.h`
    Declarations,
    /// `<base>.c`
    Definitions,
}

impl ArtifactKind {
    pub const fn ext(self) -> &'static str {
        match self {
            Self::Declarations => DECL_EXT,
            Self::Definitions => DEFN_EXT,
        }
    }
}

/// Artefact écrit (pour logs/tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: Utf8PathBuf,
    /// Taille en octets UTF-8.
    pub size: usize,
}

/// Plan d’émission d’une paire `.h`/`.c`.
#[derive(Debug, Clone)]
pub struct EmitPlan {
    /// Nom de base commun, tel que donné par l’appelant (peut contenir des dossiers).
    pub base: Utf8PathBuf,
    /// Libellé de l’entrée repris dans la bannière.
    pub input_label: String,
}

impl EmitPlan {
    pub fn new(base: impl Into<Utf8PathBuf>, input_label: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            input_label: input_label.into(),
        }
    }

    pub fn path_for(&self, kind: ArtifactKind) -> Utf8PathBuf {
        with_ext(&self.base, kind.ext())
    }

    /// Rend le texte d’un artefact, sans toucher au disque.
    pub fn render(&self, kind: ArtifactKind, sections: &Sections, prefix: &str) -> String {
        let base = self.base.as_str();
        match kind {
            ArtifactKind::Declarations => render_header(sections, &self.input_label, base, prefix),
            ArtifactKind::Definitions => render_source(sections, &self.input_label, base, prefix),
        }
    }

    /// Émet **les deux** artefacts, `.h` d’abord.
    pub fn emit_all(&self, sections: &Sections, prefix: &str) -> Result<Vec<Artifact>> {
        let decl = self.render(ArtifactKind::Declarations, sections, prefix);
        let defn = self.render(ArtifactKind::Definitions, sections, prefix);
        Ok(vec![
            self.write(ArtifactKind::Declarations, &decl)?,
            self.write(ArtifactKind::Definitions, &defn)?,
        ])
    }

    fn write(&self, kind: ArtifactKind, text: &str) -> Result<Artifact> {
        let path = self.path_for(kind);
        write_text(&path, text)?;
        debug!("{kind:?} → {path} ({} octets)", text.len());
        Ok(Artifact {
            kind,
            path,
            size: text.len(),
        })
    }
}

/* ───────────────────────────── Rendus (render_*) ───────────────────────────── */

/// Bannière commune aux deux fichiers (sans saut de ligne final).
pub fn banner(input_label: &str) -> String {
    format!(
        "// THIS IS AN AUTOMATICALLY-GENERATED FILE!\n\
         // It was generated from {input_label}\n\
         // Edits will be lost"
    )
}

/// Contenu du `.h`.
pub fn render_header(sections: &Sections, input_label: &str, base: &str, prefix: &str) -> String {
    let guard = guard_macro(base);
    let mut s = banner(input_label);
    let _ = write!(s, "\n\n#ifndef {guard}_H\n#define {guard}_H\n\n");
    for name in sections.keys() {
        let _ = writeln!(s, "extern const char {}[];", c_identifier(name, prefix));
    }
    let _ = writeln!(s, "\n#endif // {guard}_H");
    s
}

/// Contenu du `.c`.
pub fn render_source(sections: &Sections, input_label: &str, base: &str, prefix: &str) -> String {
    let mut s = banner(input_label);
    let _ = writeln!(s, "\n\n#include \"{base}.{DECL_EXT}\"");
    for (name, content) in sections {
        let _ = writeln!(
            s,
            "\nconst char {}[] = \"{}\";",
            c_identifier(name, prefix),
            c_string_body(content)
        );
    }
    s
}

/* ───────────────────────────── Helpers locaux ───────────────────────────── */

// Le dossier parent n’est pas créé : un dossier absent est une erreur de sortie.
fn write_text(path: &Utf8Path, s: &str) -> Result<()> {
    let mut f = File::create(path).map_err(|e| Error::output(path, e))?;
    f.write_all(s.as_bytes()).map_err(|e| Error::output(path, e))?;
    Ok(())
}

/* ───────────────────────────── Tests ───────────────────────────── */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::parse_str;

    #[test]
    fn default_paths_ok() {
        let plan = EmitPlan::new("out/strings", "in.ini");
        assert_eq!(plan.path_for(ArtifactKind::Declarations), Utf8PathBuf::from("out/strings.h"));
        assert_eq!(plan.path_for(ArtifactKind::Definitions), Utf8PathBuf::from("out/strings.c"));
    }

    #[test]
    fn header_render_exact() {
        let s = parse_str("[a]\nx\n[b c]\n");
        let h = render_header(&s, "in.ini", "my-out", "p_");
        assert_eq!(
            h,
            "// THIS IS AN AUTOMATICALLY-GENERATED FILE!\n\
             // It was generated from in.ini\n\
             // Edits will be lost\n\
             \n\
             #ifndef MY_OUT_H\n\
             #define MY_OUT_H\n\
             \n\
             extern const char p_a[];\n\
             extern const char p_b_c[];\n\
             \n\
             #endif // MY_OUT_H\n"
        );
    }

    #[test]
    fn source_render_exact() {
        let s = parse_str("[a]\nsay \"hi\"\n[b]\n");
        let c = render_source(&s, "in.ini", "my-out", "p_");
        assert_eq!(
            c,
            "// THIS IS AN AUTOMATICALLY-GENERATED FILE!\n\
             // It was generated from in.ini\n\
             // Edits will be lost\n\
             \n\
             #include \"my-out.h\"\n\
             \n\
             const char p_a[] = \"say \\\"hi\\\"\\n\";\n\
             \n\
             const char p_b[] = \"\";\n"
        );
    }

    #[test]
    fn missing_directory_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().join("nope").join("out")).unwrap();
        let err = EmitPlan::new(base, "in.ini")
            .emit_all(&Sections::new(), "p_")
            .unwrap_err();
        assert!(matches!(err, Error::Output { .. }));
        assert!(err.path().as_str().ends_with(".h"));
    }
}
