//! User-facing errors
//!
//! Views never show transport details; every failure collapses into one of
//! these fixed messages.

use thiserror::Error;

/// Message shown in place of a screen's content after a failed fetch
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The category distribution could not be loaded
    #[error("Error al cargar los datos")]
    MetricsUnavailable,

    /// The recommendation lookup failed (unknown id or service error)
    #[error("No se encontraron recomendaciones para ese ID de producto")]
    RecommendationsUnavailable,
}
