use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use camino::Utf8PathBuf;
use clap::Args as ClapArgs;
use log::debug;

use ini2c_core::Options;

const ALT_MODES: [&str; 2] = ["completions", "man"];

#[derive(ClapArgs, Debug, Default)]
pub struct Args {
    /// Fichier INI d’entrée
    #[arg(long = "in", value_name = "PATH", required_unless_present_any = ALT_MODES)]
    pub input: Option<PathBuf>,

    /// Nom de base des sorties (`<base>.h` et `<base>.c`)
    #[arg(long, value_name = "BASE", required_unless_present_any = ALT_MODES)]
    pub out: Option<PathBuf>,

    /// Préfixe de tous les identifiants C générés
    #[arg(long, required_unless_present_any = ALT_MODES)]
    pub prefix: Option<String>,

    /// Confirme les fichiers écrits sur stdout
    #[arg(long)]
    pub verbose: bool,
}

pub fn exec<W: Write>(args: Args, out: &mut W) -> Result<()> {
    // clap exige les trois options hors `--completions` / `--man`.
    let (Some(input), Some(base), Some(prefix)) = (args.input, args.out, args.prefix) else {
        bail!("--in, --out et --prefix sont requis");
    };

    let opts = Options::new(utf8(input)?, utf8(base)?, prefix)
        .with_verbose(args.verbose);
    let artifacts = ini2c_core::generate(&opts)?;
    for a in &artifacts {
        debug!("{:?}: {} ({} octets)", a.kind, a.path, a.size);
    }

    if opts.verbose {
        writeln!(out, "Generated {}.c and {}.h.", opts.out_base, opts.out_base)?;
    }
    Ok(())
}

fn utf8(p: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(p).map_err(|p| anyhow!("chemin non UTF-8: {}", p.display()))
}
