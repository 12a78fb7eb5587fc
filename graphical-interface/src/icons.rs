use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::errors::MapError;

const AIRPORT_ICON: &[u8] = include_bytes!("../assets/airport.png");
const PLANE_ICON: &[u8] = include_bytes!("../assets/plane.png");

/// Textures registered on the surface for the symbol layers.
pub struct Icons {
    pub airport: TextureHandle,
    pub plane: TextureHandle,
}

impl Icons {
    /// Decodes and uploads both icons. Any decode failure aborts setup.
    pub fn load(ctx: &Context) -> Result<Self, MapError> {
        Ok(Self {
            airport: register(ctx, "airport-icon", AIRPORT_ICON)?,
            plane: register(ctx, "plane-icon", PLANE_ICON)?,
        })
    }
}

fn register(ctx: &Context, name: &str, bytes: &[u8]) -> Result<TextureHandle, MapError> {
    let image = decode_icon(name, bytes)?;
    Ok(ctx.load_texture(name, image, TextureOptions::LINEAR))
}

/// Decodes an encoded bitmap into an RGBA image egui can upload.
pub fn decode_icon(name: &str, bytes: &[u8]) -> Result<ColorImage, MapError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|e| MapError::Icon {
            name: name.to_string(),
            reason: e.to_string(),
        })?
        .to_rgba8();

    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_icons_decode() {
        for (name, bytes) in [("airport", AIRPORT_ICON), ("plane", PLANE_ICON)] {
            let image = decode_icon(name, bytes).unwrap();
            assert_eq!(image.size, [32, 32]);
        }
    }

    #[test]
    fn test_corrupt_icon_is_fatal() {
        match decode_icon("plane", b"\x89PNG not really") {
            Err(MapError::Icon { name, .. }) => assert_eq!(name, "plane"),
            other => panic!("expected an icon error, got {:?}", other.map(|i| i.size)),
        }
    }

    #[test]
    fn test_icons_register_on_a_context() {
        let ctx = Context::default();
        let icons = Icons::load(&ctx).unwrap();
        assert_eq!(icons.airport.size(), [32, 32]);
        assert_ne!(icons.airport.id(), icons.plane.id());
    }
}
