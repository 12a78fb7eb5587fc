use egui::{load::SizedTexture, Image, Rect, Response, RichText, TextureHandle, Vec2};
use feed::AircraftSample;
use walkers::{Plugin, Position, Projector};

/// Plane symbol layer. Each icon is rotated by the sample's heading.
pub struct Planes<'a> {
    planes: &'a [AircraftSample],
    icon: &'a TextureHandle,
}

impl<'a> Planes<'a> {
    pub fn new(planes: &'a [AircraftSample], icon: &'a TextureHandle) -> Self {
        Self { planes, icon }
    }
}

impl Plugin for Planes<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for plane in self.planes {
            draw_plane(ui, projector, plane, self.icon);
        }
    }
}

fn draw_plane(ui: &mut egui::Ui, projector: &Projector, plane: &AircraftSample, icon: &TextureHandle) {
    let screen_position = projector.project(Position::from_lat_lon(plane.lat, plane.lon));

    let symbol_size = Vec2::new(22.0, 22.0);
    let rect = Rect::from_center_size(screen_position.to_pos2(), symbol_size);

    let response = ui.allocate_rect(rect, egui::Sense::hover());

    let image = Image::from_texture(SizedTexture::from_handle(icon))
        .fit_to_exact_size(symbol_size)
        .rotate(plane.heading.to_radians(), Vec2::splat(0.5));
    ui.put(rect, image);

    response.on_hover_ui_at_pointer(|ui| {
        ui.label(RichText::new(&plane.flight).strong());
        ui.label(format!("Heading: {:.0}°", plane.heading));
    });
}
