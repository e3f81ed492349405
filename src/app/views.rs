//! Top and side view painting

use eframe::egui;

use crate::core::constants::WINDOW_HEIGHT;
use crate::core::{Probe, ProbePair, SceneRect, ScenePoint};
use crate::theme::{colors, probe_color};

use super::ProbeVisApp;

/// Map a scene point (y up, origin bottom-left) into a canvas whose top-left is `origin`.
pub fn to_screen(origin: egui::Pos2, p: ScenePoint) -> egui::Pos2 {
    egui::pos2(origin.x + p.x, origin.y + WINDOW_HEIGHT - p.y)
}

fn to_screen_rect(origin: egui::Pos2, r: &SceneRect) -> egui::Rect {
    let [bottom_left, _, top_right, _] = r.corners();
    egui::Rect::from_two_pos(to_screen(origin, bottom_left), to_screen(origin, top_right))
}

impl ProbeVisApp {
    pub(crate) fn draw_background(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        let origin = rect.min;

        let stale = !matches!(&self.background_shapes, Some((cached, _)) if *cached == origin);
        if stale {
            self.background_shapes = Some((origin, self.build_background_shapes(origin)));
        }
        if let Some((_, shapes)) = &self.background_shapes {
            painter.extend(shapes.iter().cloned());
        }

        // Labels go through the font atlas every frame
        for label in &self.background.labels {
            painter.text(
                to_screen(origin, label.pos),
                egui::Align2::LEFT_BOTTOM,
                &label.text,
                egui::FontId::proportional(label.size),
                colors::TEXT_PRIMARY,
            );
        }
    }

    fn build_background_shapes(&self, origin: egui::Pos2) -> Vec<egui::Shape> {
        let stroke = egui::Stroke::new(1.0, colors::OUTLINE);
        let bg = &self.background;

        let circle: Vec<egui::Pos2> = bg.circle.iter().map(|p| to_screen(origin, *p)).collect();
        let side_box: Vec<egui::Pos2> = bg
            .side_box
            .corners()
            .iter()
            .map(|p| to_screen(origin, *p))
            .collect();

        let mut shapes = vec![
            egui::Shape::closed_line(circle, stroke),
            egui::Shape::closed_line(side_box, stroke),
        ];
        for swatch in &bg.swatches {
            shapes.push(egui::Shape::rect_filled(
                to_screen_rect(origin, &swatch.rect),
                0.0,
                probe_color(swatch.probe),
            ));
        }
        shapes
    }

    pub(crate) fn draw_probes(&self, painter: &egui::Painter, rect: egui::Rect) {
        let snapshot = self.snapshot();
        draw_pair(painter, rect.min, &snapshot.top_view);
        draw_pair(painter, rect.min, &snapshot.side_view);
    }
}

fn draw_pair(painter: &egui::Painter, origin: egui::Pos2, pair: &ProbePair) {
    for probe in Probe::ALL {
        painter.rect_filled(
            to_screen_rect(origin, &pair.marker(probe)),
            0.0,
            probe_color(probe),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{side_view, Background};

    #[test]
    fn to_screen_flips_y() {
        let origin = egui::pos2(0.0, 0.0);
        assert_eq!(to_screen(origin, ScenePoint::new(0.0, 0.0)), egui::pos2(0.0, 900.0));
        assert_eq!(to_screen(origin, ScenePoint::new(5.0, 875.0)), egui::pos2(5.0, 25.0));

        let shifted = egui::pos2(10.0, 20.0);
        assert_eq!(to_screen(shifted, ScenePoint::new(300.0, 700.0)), egui::pos2(310.0, 220.0));
    }

    #[test]
    fn screen_rect_keeps_size() {
        let origin = egui::pos2(0.0, 0.0);
        let marker = side_view(0, 150).marker(Probe::Ultrasound);
        let r = to_screen_rect(origin, &marker);
        assert_eq!(r.width(), 50.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(r.center(), egui::pos2(450.0, 800.0));
    }

    #[test]
    fn side_box_lands_in_lower_half() {
        let bg = Background::new();
        let r = to_screen_rect(egui::pos2(0.0, 0.0), &bg.side_box);
        assert_eq!(r.top(), 400.0);
        assert_eq!(r.bottom(), 800.0);
    }
}
