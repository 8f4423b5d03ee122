mod intensity;
mod overlay;
mod slice;
mod viewport;
mod volume3d;


pub use intensity::{IntensityTransform, Normalization, quantize};
pub use overlay::{CROSSHAIR_COLOR, burn_crosshair};
pub use slice::{
    Crosshair, Interpolation, RenderOptions, RenderedSlice, plane_transform, render_plane,
    render_session_plane, render_viewport,
};
pub use viewport::ViewportTransform;
pub use volume3d::{
    ColorPoint, CompositeRenderer, OpacityPoint, TransferFunctions, ViewAxis,
    VolumeRenderInput, VolumeRenderer,
};
