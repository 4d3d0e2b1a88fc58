mod frame;
mod primitives;
mod recording_surface;
mod registry;
mod surface;

pub use frame::{DrawCommand, RenderFrame};
pub use primitives::{
    ArcPrimitive, Color, Font, LinePrimitive, RectPrimitive, TextAlign, TextBaseline,
    TextPrimitive,
};
pub use recording_surface::{RecordingSurface, SurfaceCall};
pub use registry::SurfaceRegistry;
pub use surface::{DrawingSurface, TextMeasurer};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
