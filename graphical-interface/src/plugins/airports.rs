use egui::{load::SizedTexture, Image, Rect, Response, RichText, TextureHandle, Vec2};
use walkers::{Plugin, Projector};

use crate::types::Airport;

/// Airport symbol layer with a name/code popup while hovered.
pub struct Airports<'a> {
    airports: &'a [Airport],
    icon: &'a TextureHandle,
}

impl<'a> Airports<'a> {
    pub fn new(airports: &'a [Airport], icon: &'a TextureHandle) -> Self {
        Self { airports, icon }
    }
}

impl Plugin for Airports<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for airport in self.airports {
            airport.draw(ui, projector, self.icon);
        }
    }
}

impl Airport {
    fn draw(&self, ui: &mut egui::Ui, projector: &Projector, icon: &TextureHandle) {
        let screen_position = projector.project(self.position);

        let symbol_size = Vec2::new(24.0, 24.0);

        // The pin tip sits on the airport, so the icon is drawn above it.
        let rect = {
            let min_pos =
                screen_position.to_pos2() - Vec2::new(symbol_size.x / 2.0, symbol_size.y - 4.0);
            Rect::from_min_size(min_pos, symbol_size)
        };

        let response = ui.allocate_rect(rect, egui::Sense::hover());

        let image = Image::from_texture(SizedTexture::from_handle(icon)).fit_to_exact_size(symbol_size);
        ui.put(rect, image);

        response.on_hover_ui_at_pointer(|ui| {
            ui.label(RichText::new(&self.name).strong());
            ui.label(self.code());
        });
    }
}
