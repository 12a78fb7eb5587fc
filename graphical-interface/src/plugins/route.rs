use egui::{Color32, Response, Stroke};
use walkers::{Plugin, Projector};

use crate::types::Route;

const ROUTE_COLOR: Color32 = Color32::from_rgb(0, 150, 255);
const ROUTE_WIDTH: f32 = 3.0;

/// Line layer for the fixed route.
pub struct RouteLine<'a> {
    route: &'a Route,
}

impl<'a> RouteLine<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }
}

impl Plugin for RouteLine<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let [start, end] = self
            .route
            .positions()
            .map(|position| projector.project(position).to_pos2());

        ui.painter()
            .line_segment([start, end], Stroke::new(ROUTE_WIDTH, ROUTE_COLOR));
    }
}
