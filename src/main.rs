//! Vitrine CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use tracing::{error, info};

use vitrine::{
    catalog::{Catalog, Outcome},
    dialogs::SubmitOutcome,
    fixtures,
    listing::{write_field_errors, write_palette, write_products},
    store::ProductStore,
    validation::{ProductRules, Validator},
};

use crate::config::{CatalogConfig, Cli, Command};

mod config;
mod logging;

/// Vitrine CLI entry point
pub fn main() -> ExitCode {
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = logging::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("Logging error: {e}");
        }

        return ExitCode::FAILURE;
    }

    run(cli).unwrap_or_else(|e| {
        error!("{e:#}");

        ExitCode::FAILURE
    })
}

/// Exit status for a form that fails validation.
const INVALID_FORM: u8 = 2;

fn run(cli: Cli) -> Result<ExitCode> {
    let rules = load_rules(&cli.catalog)?;
    let validator = Validator::new(rules.clone());

    match cli.command {
        Command::List => {
            let store = load_store(&cli.catalog, &validator)?;

            write_products(io::stdout().lock(), &store)?;
        }
        Command::Palette => {
            write_palette(io::stdout().lock(), Catalog::new().palette())?;
        }
        Command::Validate { form } => {
            let form = fixtures::read_form(&form)
                .with_context(|| format!("reading form {}", form.display()))?;

            let mut out = io::stdout().lock();

            match validator.validate(&form) {
                Ok(fields) => writeln!(out, "{:?} is valid", fields.title())?,
                Err(errors) => {
                    write_field_errors(&mut out, &errors)?;

                    return Ok(ExitCode::from(INVALID_FORM));
                }
            }
        }
        Command::Run { script } => {
            let actions = fixtures::read_script(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            let store = load_store(&cli.catalog, &validator)?;
            let mut catalog = Catalog::with_store(store).with_rules(rules);

            let mut out = io::stdout().lock();

            for (step, action) in actions.into_iter().enumerate() {
                match catalog.dispatch(action) {
                    Ok(Outcome::Submitted(SubmitOutcome::Rejected(errors))) => {
                        writeln!(out, "{step}: rejected")?;
                        write_field_errors(&mut out, &errors)?;
                    }
                    Ok(outcome) => writeln!(out, "{step}: {outcome}")?,
                    Err(e) => writeln!(out, "{step}: error: {e}")?,
                }
            }

            write_products(&mut out, catalog.store())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_rules(config: &CatalogConfig) -> Result<ProductRules> {
    let mut rules = match &config.rules {
        Some(path) => fixtures::read_rules(path)
            .with_context(|| format!("reading rules {}", path.display()))?,
        None => ProductRules::default(),
    };

    rules.categories.extend(&config.categories);

    Ok(rules)
}

fn load_store(config: &CatalogConfig, validator: &Validator) -> Result<ProductStore> {
    let Some(path) = &config.products else {
        return Ok(ProductStore::new());
    };

    let store = fixtures::read_store(path, validator)
        .with_context(|| format!("reading products {}", path.display()))?;

    info!(products = store.len(), path = %path.display(), "catalog seeded");

    Ok(store)
}
