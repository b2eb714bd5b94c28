//! academy-quote - prices one course selection from stdin.
//!
//! Reads a JSON `CourseSelection` (optionally wrapped with the current
//! cart) from stdin and writes the priced line item as JSON to stdout.
//!
//! ```text
//! echo '{"course_key":"toefl","start_date":"2025-03-03","paid_weeks":4}' | academy-quote
//! ```

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use academy_tuition::adapters::{InMemoryCatalogRepository, YamlCatalogSource};
use academy_tuition::application::{
    AddCartItemCommand, AddCartItemHandler, ReloadCatalogHandler,
};
use academy_tuition::config::{AppConfig, ConfigError};
use academy_tuition::domain::cart::{CartLineItem, LineItemError};
use academy_tuition::domain::pricing::CourseSelection;
use academy_tuition::ports::CatalogError;

#[derive(Debug, Error)]
enum QuoteCliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error("Invalid selection JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    LineItem(#[from] LineItemError),
}

/// Stdin payload: a bare selection, or a selection with the current cart.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuoteRequest {
    WithCart {
        selection: CourseSelection,
        #[serde(default)]
        cart: Vec<CartLineItem>,
    },
    Bare(CourseSelection),
}

#[tokio::main]
async fn main() -> ExitCode {
    // No subscriber exists until the config is read; report straight to stderr.
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };
    config.logging.init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn load_config() -> Result<AppConfig, QuoteCliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    Ok(config)
}

async fn run(config: AppConfig) -> Result<(), QuoteCliError> {
    let repository = Arc::new(InMemoryCatalogRepository::default());
    let source = Arc::new(YamlCatalogSource::new(&config.catalog.path));
    ReloadCatalogHandler::new(source, repository.clone())
        .handle()
        .await?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let (selection, cart) = match serde_json::from_str(&input)? {
        QuoteRequest::WithCart { selection, cart } => (selection, cart),
        QuoteRequest::Bare(selection) => (selection, Vec::new()),
    };
    debug!(course = %selection.course_key, cart_items = cart.len(), "Quote requested");

    let result = AddCartItemHandler::new(repository)
        .handle(AddCartItemCommand::add(selection, cart))
        .await?;

    println!("{}", serde_json::to_string_pretty(&result.item)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn invalid_config_fails_before_logging_starts() {
        env::set_var("ACADEMY__LOGGING__LEVEL", "chatty");
        let result = load_config();
        env::remove_var("ACADEMY__LOGGING__LEVEL");

        assert!(matches!(result, Err(QuoteCliError::Config(_))));
    }

    #[test]
    fn request_accepts_bare_selection_or_cart_wrapper() {
        let bare: QuoteRequest =
            serde_json::from_str(r#"{"course_key":"toefl","paid_weeks":2}"#).unwrap();
        assert!(matches!(bare, QuoteRequest::Bare(_)));

        let wrapped: QuoteRequest = serde_json::from_str(
            r#"{"selection":{"course_key":"toefl","paid_weeks":2},"cart":[]}"#,
        )
        .unwrap();
        assert!(matches!(wrapped, QuoteRequest::WithCart { .. }));
    }
}
