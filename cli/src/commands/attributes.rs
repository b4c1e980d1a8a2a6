use anyhow::Result;

use crate::commands::style_config;

pub fn run(cli: &crate::cli::Cli) -> Result<()> {
    let style = style_config(cli, None)?.to_style()?;
    let default = style.catalog.first();

    for name in &style.catalog {
        let marker = if name == default { "*" } else { " " };
        println!("{marker} {name:<40} {}", name.display_name());
    }
    Ok(())
}
