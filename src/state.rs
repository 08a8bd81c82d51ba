//! The map state aggregate: single owner of all mutable session data.
//!
//! [`MapState`] owns the sample store, the wall set, and the transmitter
//! location. All mutation goes through its validated operations and all
//! computation reads one consistent `&self` snapshot, so no locking is
//! needed on a single logical thread of control.
//!
//! Every successful mutation bumps a revision counter. Computed grids
//! carry the revision they were built from; an external scheduler
//! compares revisions to decide when to pull a fresh grid, which
//! decouples computation cadence from presentation cadence and coalesces
//! bursts of mutations into one recompute.

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::geometry::{PixelPoint, Wall};
use crate::domain::grid::{CoverageGrid, GridSpec};
use crate::domain::sample::{rssi_in_domain, Sample};
use crate::error::{CoverageError, CoverageResult};
use crate::export::MapSnapshot;
use crate::interpolate::SpatialInterpolator;
use crate::store::{SampleStore, SignalStats};

/// Owner of all mutable coverage-map state for one session.
#[derive(Debug, Clone)]
pub struct MapState {
    config: EngineConfig,
    samples: SampleStore,
    walls: Vec<Wall>,
    transmitter: Option<PixelPoint>,
    revision: u64,
}

impl MapState {
    /// Creates a map state with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::InvalidConfig`] when the configuration
    /// fails validation.
    pub fn new(config: EngineConfig) -> CoverageResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Creates a map state with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_config(EngineConfig::default())
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            samples: SampleStore::new(config.sample_capacity),
            config,
            walls: Vec::new(),
            transmitter: None,
            revision: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Stores an observed sample.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::RssiOutOfDomain`] for readings outside
    /// the plausible RSSI domain; the reading is rejected rather than
    /// clamped so stored statistics stay trustworthy.
    pub fn add_sample(&mut self, sample: Sample) -> CoverageResult<()> {
        if !rssi_in_domain(sample.rssi_dbm) {
            debug!(rssi_dbm = sample.rssi_dbm, "rejected out-of-domain sample");
            return Err(CoverageError::rssi_out_of_domain(sample.rssi_dbm));
        }
        self.samples.add(sample);
        self.revision += 1;
        Ok(())
    }

    /// Registers a wall segment between two points.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::DegenerateWall`] for zero-length
    /// segments, which are not stored.
    pub fn add_wall(&mut self, a: PixelPoint, b: PixelPoint) -> CoverageResult<()> {
        let wall = Wall::new(a, b)?;
        self.walls.push(wall);
        self.revision += 1;
        Ok(())
    }

    /// Sets the transmitter location. Last write wins.
    pub fn set_transmitter(&mut self, position: PixelPoint) {
        self.transmitter = Some(position);
        self.revision += 1;
    }

    /// Atomically empties samples, walls, and transmitter.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.walls.clear();
        self.transmitter = None;
        self.revision += 1;
        info!("cleared map state");
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The stored samples.
    #[must_use]
    pub fn samples(&self) -> &SampleStore {
        &self.samples
    }

    /// The registered walls, in insertion order.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// The transmitter location, if set.
    #[must_use]
    pub fn transmitter(&self) -> Option<PixelPoint> {
        self.transmitter
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Revision counter, bumped by every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Descriptive statistics over the current samples, or `None` when
    /// empty. Recomputed in full on each call.
    #[must_use]
    pub fn stats(&self) -> Option<SignalStats> {
        self.samples.stats()
    }

    // -----------------------------------------------------------------------
    // Grid computation
    // -----------------------------------------------------------------------

    /// Interpolates a coverage grid from the stored samples.
    ///
    /// The returned grid is stamped with the current revision.
    #[must_use]
    pub fn interpolate(&self, grid: &GridSpec) -> CoverageGrid {
        let interpolator =
            SpatialInterpolator::new(self.config.decay, self.config.confidence_gain);
        let mut out = interpolator.interpolate(self.samples.iter(), grid);
        out.revision = self.revision;
        out
    }

    /// Predicts a coverage grid from the transmitter and wall set.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::MissingTransmitter`] when no transmitter
    /// is configured.
    pub fn predict(&self, grid: &GridSpec) -> CoverageResult<CoverageGrid> {
        let transmitter = self.transmitter.ok_or(CoverageError::MissingTransmitter)?;
        let mut out = self
            .config
            .propagation
            .predict_grid(transmitter, &self.walls, grid);
        out.revision = self.revision;
        Ok(out)
    }

    /// Predicts signal strength at a single point.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::MissingTransmitter`] when no transmitter
    /// is configured.
    pub fn predict_at(&self, target: PixelPoint) -> CoverageResult<f64> {
        let transmitter = self.transmitter.ok_or(CoverageError::MissingTransmitter)?;
        Ok(self
            .config
            .propagation
            .predict_at(transmitter, target, &self.walls))
    }

    // -----------------------------------------------------------------------
    // Snapshot
    // -----------------------------------------------------------------------

    /// Captures the current session as an exportable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            samples: self.samples.to_vec(),
            walls: self.walls.clone(),
            transmitter: self.transmitter,
            stats: self.stats(),
            exported_at: chrono::Utc::now(),
            source: self.samples.latest().map(|s| s.source.clone()),
        }
    }

    /// Replaces the current session with a snapshot's contents.
    ///
    /// The whole snapshot is validated first; on any error the prior
    /// state is left untouched. Samples are restored in arrival order
    /// under the configured capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::RssiOutOfDomain`] or
    /// [`CoverageError::DegenerateWall`] for invalid snapshot entries.
    pub fn import(&mut self, snapshot: &MapSnapshot) -> CoverageResult<()> {
        for s in &snapshot.samples {
            if !rssi_in_domain(s.rssi_dbm) {
                return Err(CoverageError::rssi_out_of_domain(s.rssi_dbm));
            }
        }
        // Deserialized walls bypass Wall::new, so re-check degeneracy.
        for w in &snapshot.walls {
            if w.a == w.b {
                return Err(CoverageError::DegenerateWall { x: w.a.x, y: w.a.y });
            }
        }

        let mut samples = SampleStore::new(self.config.sample_capacity);
        for s in &snapshot.samples {
            samples.add(s.clone());
        }
        self.samples = samples;
        self.walls = snapshot.walls.clone();
        self.transmitter = snapshot.transmitter;
        self.revision += 1;
        info!(
            samples = self.samples.len(),
            walls = self.walls.len(),
            "imported map snapshot"
        );
        Ok(())
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::{SourceId, Timestamp};

    fn make_sample(x: f64, y: f64, rssi: f64) -> Sample {
        Sample::with_timestamp(
            PixelPoint::new(x, y),
            rssi,
            Timestamp::new(0, 0),
            SourceId::new("TestNet"),
        )
    }

    #[test]
    fn new_state_is_empty() {
        let state = MapState::with_defaults();
        assert!(state.samples().is_empty());
        assert!(state.walls().is_empty());
        assert!(state.transmitter().is_none());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig {
            sample_capacity: 0,
            ..Default::default()
        };
        assert!(MapState::new(config).is_err());
    }

    #[test]
    fn out_of_domain_sample_leaves_state_untouched() {
        let mut state = MapState::with_defaults();
        state.add_sample(make_sample(0.0, 0.0, -60.0)).unwrap();
        let revision = state.revision();

        let err = state.add_sample(make_sample(1.0, 1.0, -20.0));
        assert!(matches!(
            err,
            Err(CoverageError::RssiOutOfDomain { .. })
        ));
        assert_eq!(state.samples().len(), 1);
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn degenerate_wall_is_rejected() {
        let mut state = MapState::with_defaults();
        let p = PixelPoint::new(10.0, 10.0);

        let err = state.add_wall(p, p);
        assert!(matches!(err, Err(CoverageError::DegenerateWall { .. })));
        assert!(state.walls().is_empty());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn transmitter_last_write_wins() {
        let mut state = MapState::with_defaults();
        state.set_transmitter(PixelPoint::new(1.0, 1.0));
        state.set_transmitter(PixelPoint::new(9.0, 9.0));
        assert_eq!(state.transmitter(), Some(PixelPoint::new(9.0, 9.0)));
    }

    #[test]
    fn clear_empties_everything_at_once() {
        let mut state = MapState::with_defaults();
        state.add_sample(make_sample(0.0, 0.0, -60.0)).unwrap();
        state
            .add_wall(PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 0.0))
            .unwrap();
        state.set_transmitter(PixelPoint::new(5.0, 5.0));

        state.clear();
        assert!(state.samples().is_empty());
        assert!(state.walls().is_empty());
        assert!(state.transmitter().is_none());
    }

    #[test]
    fn revision_tracks_every_successful_mutation() {
        let mut state = MapState::with_defaults();
        state.add_sample(make_sample(0.0, 0.0, -60.0)).unwrap();
        state
            .add_wall(PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 0.0))
            .unwrap();
        state.set_transmitter(PixelPoint::new(5.0, 5.0));
        state.clear();
        assert_eq!(state.revision(), 4);
    }

    #[test]
    fn grids_are_stamped_with_the_current_revision() {
        let mut state = MapState::with_defaults();
        state.add_sample(make_sample(50.0, 50.0, -60.0)).unwrap();
        state.set_transmitter(PixelPoint::new(0.0, 0.0));

        let grid = GridSpec::new(100.0, 100.0, 50.0).unwrap();
        assert_eq!(state.interpolate(&grid).revision, state.revision());
        assert_eq!(state.predict(&grid).unwrap().revision, state.revision());

        state.add_sample(make_sample(10.0, 10.0, -70.0)).unwrap();
        assert_eq!(state.interpolate(&grid).revision, state.revision());
    }

    #[test]
    fn predict_without_transmitter_fails() {
        let state = MapState::with_defaults();
        let grid = GridSpec::new(100.0, 100.0, 50.0).unwrap();
        assert!(matches!(
            state.predict(&grid),
            Err(CoverageError::MissingTransmitter)
        ));
        assert!(matches!(
            state.predict_at(PixelPoint::new(1.0, 1.0)),
            Err(CoverageError::MissingTransmitter)
        ));
    }

    #[test]
    fn prediction_uses_walls_and_transmitter() {
        let mut state = MapState::with_defaults();
        state.set_transmitter(PixelPoint::new(0.0, 0.0));
        state
            .add_wall(PixelPoint::new(50.0, -10.0), PixelPoint::new(50.0, 10.0))
            .unwrap();

        let predicted = state.predict_at(PixelPoint::new(100.0, 0.0)).unwrap();
        assert!((predicted - (-55.0)).abs() < 1e-12);
    }

    #[test]
    fn snapshot_round_trip_restores_state() {
        let mut state = MapState::with_defaults();
        state.add_sample(make_sample(10.0, 20.0, -58.0)).unwrap();
        state.add_sample(make_sample(60.0, 80.0, -72.0)).unwrap();
        state
            .add_wall(PixelPoint::new(0.0, 50.0), PixelPoint::new(100.0, 50.0))
            .unwrap();
        state.set_transmitter(PixelPoint::new(5.0, 5.0));

        let snapshot = state.snapshot();

        let mut restored = MapState::with_defaults();
        restored.import(&snapshot).unwrap();

        assert_eq!(restored.samples().to_vec(), state.samples().to_vec());
        assert_eq!(restored.walls(), state.walls());
        assert_eq!(restored.transmitter(), state.transmitter());
    }

    #[test]
    fn import_rejects_invalid_snapshot_untouched() {
        let mut state = MapState::with_defaults();
        state.add_sample(make_sample(0.0, 0.0, -60.0)).unwrap();

        let mut snapshot = state.snapshot();
        snapshot.samples.push(make_sample(1.0, 1.0, -10.0));

        assert!(state.import(&snapshot).is_err());
        assert_eq!(state.samples().len(), 1);
    }

    #[test]
    fn snapshot_carries_latest_source_and_stats() {
        let mut state = MapState::with_defaults();
        state.add_sample(make_sample(0.0, 0.0, -60.0)).unwrap();
        state.add_sample(make_sample(1.0, 0.0, -70.0)).unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.source, Some(SourceId::new("TestNet")));
        assert_eq!(snapshot.stats.unwrap().count, 2);
    }
}
