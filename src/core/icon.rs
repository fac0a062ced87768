//! Briefcase icon rendering and the job that writes one PNG per size.

use crate::core::canvas::{self, TRANSPARENT};
use crate::core::{IconConfig, IconSpec, Job, RenderedIcon, Storage};
use crate::domain::model::IconGeometry;
use crate::utils::error::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

const BODY_FILL: Rgba<u8> = Rgba([0xD2, 0x69, 0x1E, 0xFF]);
const FLAP_FILL: Rgba<u8> = Rgba([0xCD, 0x85, 0x3F, 0xFF]);
const OUTLINE: Rgba<u8> = Rgba([0x8B, 0x45, 0x13, 0xFF]);

/// Renders the briefcase glyph onto a transparent square canvas.
///
/// Deterministic for a given size. Pixels outside the glyph keep alpha 0.
pub fn render_briefcase(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let geo = IconGeometry::for_size(size);

    // Handle first; the body overdraws its lower half.
    canvas::fill_rect(&mut img, geo.handle, OUTLINE);
    // Erase the interior, leaving the loop open at the bottom edge.
    canvas::fill_rect(&mut img, geo.handle_cut, TRANSPARENT);

    canvas::fill_rounded_rect(
        &mut img,
        geo.body,
        geo.corner_radius,
        BODY_FILL,
        OUTLINE,
        geo.stroke_width,
    );

    // Flap last so it overlays the top of the body.
    canvas::fill_triangle(
        &mut img,
        (geo.body.x0, geo.body.y0),
        (geo.body.x1, geo.body.y0),
        geo.flap_apex(),
        FLAP_FILL,
        OUTLINE,
    );

    img
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    img.write_to(&mut Cursor::new(&mut data), ImageFormat::Png)?;
    Ok(data)
}

pub struct IconJob<S: Storage, C: IconConfig> {
    storage: S,
    config: C,
}

impl<S: Storage, C: IconConfig> IconJob<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: IconConfig> Job for IconJob<S, C> {
    type Item = IconSpec;
    type Output = Vec<RenderedIcon>;

    fn name(&self) -> &'static str {
        "icon"
    }

    async fn plan(&self) -> Result<Vec<IconSpec>> {
        Ok(self
            .config
            .sizes()
            .iter()
            .map(|&size| IconSpec::new(size, self.config.name_prefix()))
            .collect())
    }

    async fn build(&self, specs: Vec<IconSpec>) -> Result<Vec<RenderedIcon>> {
        let mut icons = Vec::with_capacity(specs.len());

        for spec in specs {
            tracing::debug!("Rendering {} at {}px", spec.file_name, spec.size);
            let img = render_briefcase(spec.size);
            icons.push(RenderedIcon {
                file_name: spec.file_name,
                data: encode_png(&img)?,
            });
        }

        Ok(icons)
    }

    async fn publish(&self, icons: Vec<RenderedIcon>) -> Result<String> {
        for icon in &icons {
            self.storage.write_file(&icon.file_name, &icon.data).await?;
            println!("Saved {}/{}", self.config.output_path(), icon.file_name);
        }

        Ok(self.config.output_path().to_string())
    }
}
