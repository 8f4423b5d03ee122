use crate::model::{Plane, PlaneMap, Volume};

use super::{DisplayParameters, FocusState, InteractionMode, ViewportSize, ZoomLimits, ZoomState};

/// The volume together with all state derived from its shape. Replaced as a
/// unit so nothing can refer to the extents of a previous volume.
#[derive(Debug, Clone)]
pub struct LoadedVolume {
    pub volume: Volume,
    pub focus: FocusState,
    pub zoom: ZoomState,
}

impl LoadedVolume {
    fn new(volume: Volume, limits: ZoomLimits) -> Self {
        let focus = FocusState::new(volume.extents());
        let zoom = ZoomState::new(limits, focus.cursors());
        Self {
            volume,
            focus,
            zoom,
        }
    }
}

/// All viewer state, owned by the application and passed by reference to
/// the renderer, the interaction controller and the cine player.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    loaded: Option<LoadedVolume>,
    display: DisplayParameters,
    mode: InteractionMode,
    viewports: PlaneMap<ViewportSize>,
    zoom_limits: ZoomLimits,
    generation: u64,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ViewerSession {
    pub fn new(zoom_limits: ZoomLimits) -> Self {
        Self {
            loaded: None,
            display: DisplayParameters::default(),
            mode: InteractionMode::default(),
            viewports: PlaneMap::default(),
            zoom_limits,
            generation: 0,
        }
    }

    pub fn with_volume(volume: Volume) -> Self {
        let mut session = Self::default();
        session.replace_volume(volume);
        session
    }

    /// Installs `volume` and rederives slice, cursor and zoom state from it
    /// before anything can observe the new volume.
    pub fn replace_volume(&mut self, volume: Volume) {
        tracing::info!(
            "installing volume {:?} from {:?}",
            volume.dim(),
            volume.source()
        );
        self.loaded = Some(LoadedVolume::new(volume, self.zoom_limits));
        self.bump_generation();
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    /// Counter that changes whenever the volume is replaced or reshaped.
    /// Frames rendered under another generation are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_volume(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn loaded(&self) -> Option<&LoadedVolume> {
        self.loaded.as_ref()
    }

    pub fn volume(&self) -> Option<&Volume> {
        self.loaded.as_ref().map(|loaded| &loaded.volume)
    }

    pub fn focus(&self) -> Option<&FocusState> {
        self.loaded.as_ref().map(|loaded| &loaded.focus)
    }

    pub fn focus_mut(&mut self) -> Option<&mut FocusState> {
        self.loaded.as_mut().map(|loaded| &mut loaded.focus)
    }

    pub fn zoom(&self) -> Option<&ZoomState> {
        self.loaded.as_ref().map(|loaded| &loaded.zoom)
    }

    pub fn zoom_mut(&mut self) -> Option<&mut ZoomState> {
        self.loaded.as_mut().map(|loaded| &mut loaded.zoom)
    }

    pub fn display(&self) -> DisplayParameters {
        self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayParameters {
        &mut self.display
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> InteractionMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn viewport(&self, plane: Plane) -> ViewportSize {
        self.viewports[plane]
    }

    pub fn set_viewport(&mut self, plane: Plane, size: ViewportSize) {
        self.viewports[plane] = size;
    }

    /// Restores zoom, interaction mode, slice positions and display
    /// parameters to their defaults.
    pub fn reset(&mut self) {
        self.mode = InteractionMode::Pointer;
        self.display = DisplayParameters::default();
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.focus.recenter();
            loaded.zoom = ZoomState::new(self.zoom_limits, loaded.focus.cursors());
        }
        tracing::debug!("viewer state reset");
    }

    /// Centers every viewport on its plane's crosshair.
    pub fn center_on_crosshair(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.zoom.set_centers(loaded.focus.cursors());
        }
    }

    /// Rotates the axial plane of the loaded volume by 90 degrees, keeping
    /// the focus on the same voxel.
    pub fn rotate_axial(&mut self) {
        let Some(loaded) = self.loaded.take() else {
            return;
        };
        let rotated = loaded.volume.rotated_axial();
        let focus = loaded.volume.rotate_axial_voxel(loaded.focus.focus());
        let mut next = LoadedVolume::new(rotated, self.zoom_limits);
        next.focus.set_focus_voxel(focus);
        next.zoom = ZoomState::new(self.zoom_limits, next.focus.cursors());
        self.loaded = Some(next);
        self.bump_generation();
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
