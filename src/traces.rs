// src/traces.rs
//
// Journal : abonné tracing global (fmt + EnvFilter)
// -------------------------------------------------
// - RUST_LOG pilote le filtre (défaut : info)
// - installation unique par processus (OnceLock)

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INITIALISE: OnceLock<()> = OnceLock::new();

/// Filtre par défaut si RUST_LOG est absent ou illisible.
pub const FILTRE_DEFAUT: &str = "info";

/// Installe l’abonné global (journal sur stderr, la table reste sur stdout).
pub fn init_tracing() -> Result<(), InitError> {
    INITIALISE
        .set(())
        .map_err(|_| InitError::AlreadyInitialised)?;

    let ansi = std::io::stderr().is_terminal();
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    Registry::default()
        .with(filtre)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| InitError::Installation(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("tracing déjà initialisé")]
    AlreadyInitialised,
    #[error("installation de l’abonné impossible: {0}")]
    Installation(String),
}
