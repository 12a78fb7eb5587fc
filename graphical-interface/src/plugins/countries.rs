use egui::{Mesh, Response, Shape};
use walkers::{Plugin, Projector};

use crate::types::{CountryHighlight, CountryShape, Worldview};

/// Fill layer over the country boundaries.
///
/// Shapes rejected by the worldview are skipped, as are shapes whose fill
/// resolves to fully transparent.
pub struct Countries<'a> {
    shapes: &'a [CountryShape],
    highlight: &'a CountryHighlight,
    worldview: &'a Worldview,
}

impl<'a> Countries<'a> {
    pub fn new(
        shapes: &'a [CountryShape],
        highlight: &'a CountryHighlight,
        worldview: &'a Worldview,
    ) -> Self {
        Self {
            shapes,
            highlight,
            worldview,
        }
    }
}

impl Plugin for Countries<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let mut mesh = Mesh::default();

        for shape in self.shapes.iter().filter(|s| self.worldview.admits(s)) {
            let color = self.highlight.fill_color(&shape.code);
            if color.a() == 0 {
                continue;
            }

            for polygon in &shape.polygons {
                let base = mesh.vertices.len() as u32;
                for vertex in &polygon.vertices {
                    mesh.colored_vertex(projector.project(*vertex).to_pos2(), color);
                }
                for [a, b, c] in &polygon.triangles {
                    mesh.add_triangle(base + a, base + b, base + c);
                }
            }
        }

        if !mesh.is_empty() {
            ui.painter().add(Shape::mesh(mesh));
        }
    }
}
