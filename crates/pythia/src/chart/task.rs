//! Async entry points that keep ephemeris work off the runtime threads.

use crate::chart::engine::ChartEngine;
use crate::chart::horary::HoraryReading;
use crate::chart::natal::NatalChart;
use crate::ephemeris::{EphemerisProvider, GeoLocation};
use crate::error::OracleError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::{self, JoinError};

fn worker_error(err: JoinError) -> OracleError {
    OracleError::Worker(err.to_string())
}

/// Run [`ChartEngine::natal`] on the blocking pool.
pub async fn natal_off_thread<P>(
    engine: Arc<ChartEngine<P>>,
    birth: DateTime<Utc>,
    location: Option<GeoLocation>,
    place: Option<String>,
) -> Result<NatalChart, OracleError>
where
    P: EphemerisProvider + 'static,
{
    task::spawn_blocking(move || engine.natal(birth, location, place))
        .await
        .map_err(worker_error)?
}

/// Run [`ChartEngine::horary`] on the blocking pool.
pub async fn horary_off_thread<P>(
    engine: Arc<ChartEngine<P>>,
    at: DateTime<Utc>,
    location: Option<GeoLocation>,
) -> Result<HoraryReading, OracleError>
where
    P: EphemerisProvider + 'static,
{
    task::spawn_blocking(move || engine.horary(at, location))
        .await
        .map_err(worker_error)?
}
