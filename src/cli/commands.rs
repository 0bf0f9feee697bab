//! Command dispatch

use std::fs;
use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::browse::browse;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::Taxonomy;
use crate::view::{render, Glyphs, TreeView};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    settings.color.apply();
    let glyphs = if cli.ascii || settings.ascii {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    };

    match &cli.command {
        Some(Commands::Show { collapse }) => _show(collapse, &glyphs),
        Some(Commands::Browse) => _browse(&glyphs),
        Some(Commands::Summary) => _summary(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _show(&[], &glyphs),
    }
}

/// Validate the builtin dataset before handing it to the view: a malformed
/// taxonomy fails fast instead of rendering garbage.
fn load_view() -> CliResult<TreeView> {
    let taxonomy = Taxonomy::builtin();
    taxonomy.validate()?;
    Ok(TreeView::new(taxonomy))
}

#[instrument(skip(glyphs))]
fn _show(collapse: &[String], glyphs: &Glyphs) -> CliResult<()> {
    debug!("sections to collapse: {:?}", collapse);
    let mut view = load_view()?;
    for key in collapse {
        view.toggle(key);
    }
    print!("{}", render(&view, glyphs));
    Ok(())
}

#[instrument(skip(glyphs))]
fn _browse(glyphs: &Glyphs) -> CliResult<()> {
    let mut view = load_view()?;
    browse(&mut view, glyphs)?;
    Ok(())
}

#[instrument]
fn _summary() -> CliResult<()> {
    let view = load_view()?;
    let summary = view.summary();
    output::info(&format!(
        "{} sections, {} processes",
        summary.section_count, summary.process_count
    ));
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}

fn _config_init() -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::InvalidArgs("cannot determine config directory".to_string()))?;
    if path.exists() {
        output::warning(&format!("config already exists: {}", path.display()));
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, Settings::template())?;
    output::action("Created", &path.display());
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::warning("cannot determine config directory"),
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
