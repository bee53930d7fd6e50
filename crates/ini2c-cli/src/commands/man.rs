use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;

use crate::Cli;

pub fn exec<W: Write>(out: &mut W) -> Result<()> {
    let man = Man::new(Cli::command());
    man.render(out)?;
    Ok(())
}
