//! Core library for the `snowday` CLI.
//!
//! This crate defines:
//! - Location query classification (city name vs postal code)
//! - The snow day chance heuristic
//! - Abstraction over the weather provider boundary
//! - Favorites persistence and localized message catalogs
//! - Configuration & credentials handling
//!
//! It is used by `snowday-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod favorites;
pub mod i18n;
pub mod location;
pub mod lookup;
pub mod model;
pub mod predict;
pub mod provider;

pub use config::Config;
pub use error::LookupError;
pub use favorites::{FavoritesStore, JsonFavorites};
pub use i18n::{Language, MessageKey};
pub use location::ResolvedParams;
pub use lookup::resolve_and_fetch;
pub use model::{Prediction, WeatherObservation};
pub use predict::predict;
pub use provider::WeatherProvider;
