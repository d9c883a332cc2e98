//! Backdrop composites the fixed-layout background texture for the StartUp Age.
//!
//! A run is a single linear pass over one owned [`Canvas`]:
//!
//! 1. **Canvas**: allocate a blank 3840×1080 surface.
//! 2. **Background**: cover-fit a photo onto it (scale to cover, center-crop the overflow).
//! 3. **Logo**: scale the overlay to a percentage of canvas height and anchor it with
//!    percentage paddings ([`PlacementSpec`]).
//! 4. **Outputs**: save the unscaled composite and a copy stretched to 4096×1080.
//! 5. **Diagnostics** (optional): draw the dialog footprint and aspect-ratio safe zones, labeled
//!    with a font supplied by a [`FontResolver`], and save a third image.
//!
//! Every offset is derived from percentages of the current canvas size, so the same specs work
//! on the small canvases used in tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod layout;
mod render;

pub use assets::decode::{decode_image, load_image};
pub use assets::fonts::{
    FileFontResolver, FontFamilyQuery, FontQuery, FontResolver, ResolvedFont, SystemFontResolver,
};
pub use foundation::core::{Axis, CANVAS_SIZE, CanvasSize, LOGO_FILE, Rgba8, TEXTURE_SIZE};
pub use foundation::error::{BackdropError, BackdropResult};
pub use foundation::math::round_half_even;
pub use layout::solver::{
    HorizontalAlign, Placement, PlacementSpec, VerticalAlign, centered_offset, percent_to_pixels,
    resolve_placement, scaled_element_size,
};
pub use render::background::{cover_fit, draw_background, draw_background_image};
pub use render::canvas::Canvas;
pub use render::diagnostics::{
    ASPECT_RATIOS, AspectRatioZone, DIALOG_ZONE, DialogZoneSpec, ZONE_BORDER_PX,
    aspect_zone_size, bordered_frame, dialog_zone_size, draw_aspect_ratio_zone, draw_diagnostics,
    draw_dialog_zone,
};
pub use render::element::{draw_element, place_element};
pub use render::output::{
    ensure_parent_dir, save_canvas, save_rgb, save_texture, texture_variant,
};
pub use render::pipeline::{BackdropOpts, BackdropOutputs, generate};
pub use render::text::{LABEL_ORIGIN, LABEL_SIZE_PX, draw_diagnostic_text, draw_label};
