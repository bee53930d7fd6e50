//! ini2c-cli/src/lib.rs — CLI lib pour ini-to-c
//!
//! Usage :
//!   ini-to-c --in <fichier.ini> --out <base> --prefix <préfixe> [--verbose]
//!   ini-to-c --completions <shell>
//!   ini-to-c --man
//!
//! Sans `--verbose`, rien n’est écrit sur stdout en cas de succès. Les logs
//! (`INI2C_LOG`) partent sur stderr.

use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;

pub mod commands;

/// Point d’entrée du binaire (à appeler depuis src/main.rs)
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.generate.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(cli, &mut out)
}

/// Comme `run`, mais avec des arguments et une sortie fournis (tests, outils).
/// Les logs ne sont pas initialisés ici.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    dispatch(cli, out)
}

#[derive(Parser, Debug)]
#[command(
    name = "ini-to-c",
    version,
    about = "Convertit un fichier INI en constantes chaîne C (.h + .c)"
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: commands::generate::Args,

    /// Imprime le script d’autocomplétion pour ce shell puis quitte
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "man")]
    pub completions: Option<Shell>,

    /// Imprime la page man (roff) puis quitte
    #[arg(long)]
    pub man: bool,
}

fn dispatch<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if let Some(shell) = cli.completions {
        return commands::completions::exec(shell, out);
    }
    if cli.man {
        return commands::man::exec(out);
    }
    commands::generate::exec(cli.generate, out)
}

/// `env_logger` sur stderr : `INI2C_LOG` prioritaire, sinon `warn`
/// (`info` avec `--verbose`).
fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env = env_logger::Env::default().filter_or(ini2c_core::config::LOG_ENV, default);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
