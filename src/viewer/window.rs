use eframe::egui::{self, Align2, FontId, Painter, Pos2, Rect, Stroke, pos2, vec2};

use super::scene::FigureScene;
use crate::constants::figure;
use crate::error::GraphWeightsError;
use crate::layout::Point;

mod colors {
    use eframe::egui::Color32;

    pub const NODE_FILL: Color32 = Color32::from_rgb(135, 206, 235); // Sky blue
    pub const NODE_STROKE: Color32 = Color32::from_rgb(70, 130, 180); // Steel blue
    pub const EDGE: Color32 = Color32::from_rgb(51, 51, 51);
    pub const LABEL_TEXT: Color32 = Color32::BLACK;
    pub const LABEL_BG: Color32 = Color32::WHITE;
    pub const BACKGROUND: Color32 = Color32::WHITE;
}

struct GraphWindow {
    scene: FigureScene,
}

impl GraphWindow {
    fn to_screen(&self, rect: Rect, point: Point) -> Pos2 {
        let fitted = self
            .scene
            .fit(point, f64::from(rect.width()), f64::from(rect.height()));
        pos2(rect.min.x + fitted.x as f32, rect.min.y + fitted.y as f32)
    }

    fn paint(&self, painter: &Painter, rect: Rect) {
        let radius = figure::NODE_RADIUS as f32;
        let edge_stroke = Stroke::new(1.0, colors::EDGE);

        painter.text(
            self.to_screen(rect, self.scene.title_anchor()),
            Align2::CENTER_CENTER,
            self.scene.title(),
            FontId::proportional(figure::TITLE_FONT_SIZE as f32),
            colors::LABEL_TEXT,
        );

        for edge in self.scene.edges() {
            let from = self.to_screen(rect, edge.from);
            if edge.self_loop {
                painter.circle_stroke(from - vec2(0.0, radius), radius * 0.75, edge_stroke);
            } else {
                painter.line_segment([from, self.to_screen(rect, edge.to)], edge_stroke);
            }
        }

        for node in self.scene.nodes() {
            let center = self.to_screen(rect, node.center);
            painter.circle_filled(center, radius, colors::NODE_FILL);
            painter.circle_stroke(center, radius, Stroke::new(1.0, colors::NODE_STROKE));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                node.id.to_string(),
                FontId::proportional(figure::NODE_FONT_SIZE as f32),
                colors::LABEL_TEXT,
            );
        }

        for edge in self.scene.edges() {
            let Some(label) = edge.label.as_ref() else {
                continue;
            };
            let anchor = self.to_screen(rect, edge.label_anchor());
            let galley = painter.layout_no_wrap(
                label.clone(),
                FontId::proportional(figure::EDGE_FONT_SIZE as f32),
                colors::LABEL_TEXT,
            );
            let bounds = Rect::from_center_size(anchor, galley.size() + vec2(8.0, 4.0));
            painter.rect_filled(bounds, 3.0, colors::LABEL_BG);
            painter.galley(anchor - galley.size() / 2.0, galley, colors::LABEL_TEXT);
        }
    }
}

impl eframe::App for GraphWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.paint(&ui.painter_at(rect), rect);
            });
    }
}

/// Open the figure window and block until the user closes it
pub fn show_window(scene: FigureScene) -> Result<(), GraphWeightsError> {
    let (width, height) = scene.size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(figure::TITLE)
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([figure::MIN_WIDTH as f32, figure::MIN_HEIGHT as f32]),
        ..Default::default()
    };

    eframe::run_native(
        figure::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(GraphWindow { scene }) as Box<dyn eframe::App>)),
    )
    .map_err(|err| GraphWeightsError::WindowError {
        message: err.to_string(),
    })
}
