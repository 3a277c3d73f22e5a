//! Generation session: the surface a host application drives
//!
//! A session owns the generator, the host scene and at most one placement stream.
//! Starting a new generation first cancels the active stream and destroys every
//! asset realized from it.

use glam::Vec3;
use log::{info, warn};

use crate::algorithm::executor::{GeneratorConfig, Generation, TrackGenerator};
use crate::algorithm::selection::{RandomSelector, RandomSource};
use crate::io::configuration::GRID_SPACING;
use crate::mesh::{CollisionMeshBuilder, WeldReport, WeldThresholds};
use crate::scene::Scene;
use crate::spatial::{TileType, TrackGrid};
use crate::track::stream::PlacementStream;
use crate::track::walker::PlacementCommand;

/// Drives generation, incremental placement and collider building against a host scene
pub struct TrackSession<S: Scene, R: RandomSource = RandomSelector> {
    generator: TrackGenerator<R>,
    scene: S,
    spacing: f32,
    thresholds: WeldThresholds,
    current: Option<Generation>,
    stream: Option<PlacementStream>,
    handles: Vec<S::Handle>,
}

impl<S: Scene> TrackSession<S> {
    /// Session with default configuration and a seeded random selector
    pub fn seeded(scene: S, seed: u64) -> Self {
        Self::new(
            scene,
            TrackGenerator::seeded(GeneratorConfig::default(), seed),
        )
    }
}

impl<S: Scene, R: RandomSource> TrackSession<S, R> {
    /// Create a session placing into `scene`
    pub fn new(scene: S, generator: TrackGenerator<R>) -> Self {
        Self {
            generator,
            scene,
            spacing: GRID_SPACING,
            thresholds: WeldThresholds::default(),
            current: None,
            stream: None,
            handles: Vec::new(),
        }
    }

    /// Use a different world distance between cell centres
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Use different weld tolerances for the collider
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: WeldThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Build a new grid and start a new placement stream
    ///
    /// Any active stream is cancelled and its realized assets destroyed first.
    /// Generation itself never fails: a failed patch pass keeps whatever grid it
    /// reached, and the outcome is reported in [`Generation::mutation`].
    pub fn generate(&mut self) -> &Generation {
        self.cancel();

        let generation = self.generator.generate();
        let stream = PlacementStream::from_grid(&generation.grid, self.spacing);
        info!(
            "Queued {} placements for {} road tiles",
            stream.remaining(),
            generation.grid.road_count()
        );

        self.stream = Some(stream);
        self.current.insert(generation)
    }

    /// Realize the next queued command in the scene
    pub fn step(&mut self) -> Option<(PlacementCommand, S::Handle)> {
        let command = self.stream.as_mut()?.next()?;
        let handle = self
            .scene
            .place(command.asset, command.position, command.rotation());
        self.handles.push(handle);
        Some((command, handle))
    }

    /// Realize every remaining command, returning how many were placed
    pub fn drain(&mut self) -> usize {
        let mut placed = 0;
        while self.step().is_some() {
            placed += 1;
        }
        placed
    }

    /// Drain the stream, weld every placed mesh and install the collider
    ///
    /// Returns `None` when nothing has been placed.
    pub fn finish(&mut self) -> Option<WeldReport> {
        self.drain();
        if self.handles.is_empty() {
            return None;
        }

        let mut builder = CollisionMeshBuilder::new(self.thresholds);
        for &handle in &self.handles {
            match self.scene.placed_mesh(handle) {
                Some(placed) => builder.add(placed),
                None => warn!("Placed asset {handle:?} has no geometry; leaving it out of the collider"),
            }
        }

        let (collider, report) = builder.build();
        self.scene.set_collision_mesh(collider);
        info!(
            "Collider ready: {} vertices ({} merged), {} triangles",
            report.output_vertices,
            report.merged(),
            report.triangles
        );
        Some(report)
    }

    /// Discard unconsumed commands and destroy realized assets
    ///
    /// Returns the number of commands discarded.
    pub fn cancel(&mut self) -> usize {
        let discarded = self.stream.as_mut().map_or(0, PlacementStream::cancel);
        if !self.handles.is_empty() {
            self.scene.destroy_all(&self.handles);
            self.handles.clear();
        }
        discarded
    }

    /// Destroy everything placed and forget the current grid
    pub fn clear(&mut self) {
        self.cancel();
        self.stream = None;
        self.current = None;
    }

    /// World position of the first `StraightNS` cell in row-major order
    pub fn start_position(&self) -> Option<Vec3> {
        self.grid()?
            .first_of(TileType::StraightNS)
            .map(|point| point.world_position(self.spacing))
    }

    /// Set the row count from text; malformed input is ignored
    pub fn set_rows_text(&mut self, text: &str) -> bool {
        self.generator.config.set_rows_text(text)
    }

    /// Set the column count from text; malformed input is ignored
    pub fn set_columns_text(&mut self, text: &str) -> bool {
        self.generator.config.set_columns_text(text)
    }

    /// Set the patch size from text; malformed input is ignored
    pub fn set_patch_size_text(&mut self, text: &str) -> bool {
        self.generator.config.set_patch_size_text(text)
    }

    /// Configuration used by the next [`TrackSession::generate`]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.generator.config
    }

    /// Mutable access to the generator
    pub const fn generator_mut(&mut self) -> &mut TrackGenerator<R> {
        &mut self.generator
    }

    /// Result of the last generation, if any
    pub const fn generation(&self) -> Option<&Generation> {
        self.current.as_ref()
    }

    /// Current grid snapshot, if any
    pub fn grid(&self) -> Option<&TrackGrid> {
        self.current.as_ref().map(|generation| &generation.grid)
    }

    /// Active placement stream, if any
    pub const fn stream(&self) -> Option<&PlacementStream> {
        self.stream.as_ref()
    }

    /// Handles realized from the active stream
    pub fn handles(&self) -> &[S::Handle] {
        &self.handles
    }

    /// World distance between cell centres
    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The host scene
    pub const fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access to the host scene
    pub const fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Hand the host scene back
    pub fn into_scene(self) -> S {
        self.scene
    }
}
