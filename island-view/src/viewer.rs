//! Interactive Minkowski island viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`Scene`] and implements
//! [`eframe::App`] to draw the island and expose its controls.

use eframe::App;
use island_core::{
    Affine3, Depth, IslandError, Point2, animation::Rgb, config::Config, scene::Scene,
};

/// Background fill of the drawing area.
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(26, 26, 38);

/// Main application state for the viewer.
///
/// The typical per-frame update is:
/// 1. Handle the depth slider and the Animate/Reset buttons.
/// 2. Fit the island to the central panel and advance the rotation.
/// 3. Draw the outline as a closed line loop.
pub struct Viewer {
    scene: Scene,
    /// Slider value; mirrors `scene.depth()` except while being dragged.
    depth: Depth,
    /// Last rejected depth change, shown in the status bar.
    last_error: Option<IslandError>,
}

impl Viewer {
    pub fn new(cfg: Config) -> Result<Self, IslandError> {
        let scene = Scene::new(cfg)?;
        let depth = scene.depth();
        Ok(Self {
            scene,
            depth,
            last_error: None,
        })
    }

    /// Pushes the slider's depth into the scene.
    fn apply_depth(&mut self) {
        match self.scene.set_depth(self.depth) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                self.last_error = Some(e);
                self.depth = self.scene.depth();
            }
        }
    }

    /// Stops the animation and restores the initial depth and angle.
    fn reset(&mut self) {
        self.scene.reset();
        self.depth = self.scene.depth();
        self.last_error = None;
    }

    fn toggle_animation(&mut self, now: f64) {
        self.scene.animator_mut().toggle(now);
    }

    /// Maps interleaved island vertices to screen positions.
    ///
    /// `transform` places island space into the panel's local pixels, and
    /// `origin` is the panel's top-left corner on screen.
    fn island_to_screen(
        vertices: &[f64],
        transform: &Affine3,
        origin: egui::Pos2,
    ) -> Vec<egui::Pos2> {
        vertices
            .chunks_exact(2)
            .map(|xy| {
                let p = transform.transform_point(Point2::new(xy[0], xy[1]));
                egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
            })
            .collect()
    }

    fn to_color32(rgb: Rgb) -> egui::Color32 {
        let [r, g, b] = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        egui::Color32::from_rgb(r, g, b)
    }

    /// Builds the top panel UI (depth, animation, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let max_depth = self.scene.config().max_depth;
                let slider = ui.add(egui::Slider::new(&mut self.depth, 0..=max_depth).text("Depth"));
                if slider.changed() {
                    self.apply_depth();
                }

                ui.separator();

                let animating = self.scene.animator().is_animating();
                if ui
                    .button(if animating { "⏸ Stop" } else { "▶ Animate" })
                    .clicked()
                {
                    let now = ctx.input(|i| i.time);
                    self.toggle_animation(now);
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (depth, vertex count, angle).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("angle = {:.2} rad", self.scene.animator().angle()));
                ui.separator();
                ui.label(format!("vertices = {}", self.scene.vertex_count()));
                ui.label(format!("depth = {}", self.scene.depth()));
                if let Some(err) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err.to_string());
                }
            });
        });
    }

    /// Builds the central panel where the island is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                let (w, h) = (f64::from(rect.width()), f64::from(rect.height()));
                self.scene.fit_to(w, h);

                let now = ctx.input(|i| i.time);
                let frame = self.scene.frame(w, h, now);

                let points =
                    Self::island_to_screen(self.scene.vertices(), &frame.transform, rect.min);
                if !points.is_empty() {
                    let stroke = egui::Stroke::new(1.0, Self::to_color32(frame.color));
                    painter.add(egui::Shape::closed_line(points, stroke));
                }

                if self.scene.animator().is_animating() {
                    ctx.request_repaint();
                }
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use island_core::compose_frame_transform;

    fn viewer() -> Viewer {
        Viewer::new(Config::default()).unwrap()
    }

    #[test]
    fn new_viewer_mirrors_scene_depth() {
        let v = viewer();
        assert_eq!(v.depth, 1);
        assert_eq!(v.scene.depth(), 1);
        assert!(v.last_error.is_none());
    }

    #[test]
    fn apply_depth_regenerates_scene() {
        let mut v = viewer();
        v.depth = 3;
        v.apply_depth();
        assert_eq!(v.scene.depth(), 3);
        assert_eq!(v.scene.vertex_count(), 4 * 512);
        assert!(v.last_error.is_none());
    }

    #[test]
    fn apply_depth_out_of_range_snaps_slider_back() {
        let mut v = viewer();
        v.depth = 42;
        v.apply_depth();
        assert_eq!(v.depth, 1);
        assert_eq!(v.scene.depth(), 1);
        assert_eq!(
            v.last_error,
            Some(IslandError::DepthTooLarge { depth: 42, max: 6 })
        );
    }

    #[test]
    fn reset_restores_basic_state() {
        let mut v = viewer();
        v.depth = 4;
        v.apply_depth();
        v.toggle_animation(0.0);
        v.scene.frame(800.0, 600.0, 2.0);

        v.reset();

        assert_eq!(v.depth, 1);
        assert_eq!(v.scene.depth(), 1);
        assert!(!v.scene.animator().is_animating());
        assert_eq!(v.scene.animator().angle(), 0.0);
    }

    #[test]
    fn toggle_animation_starts_and_stops() {
        let mut v = viewer();
        v.toggle_animation(1.0);
        assert!(v.scene.animator().is_animating());
        v.toggle_animation(2.0);
        assert!(!v.scene.animator().is_animating());
    }

    #[test]
    fn island_to_screen_offsets_by_panel_origin() {
        let transform = compose_frame_transform(Point2::new(100.0, 50.0), 0.0);
        let origin = egui::pos2(10.0, 20.0);
        let pts = Viewer::island_to_screen(&[0.0, 0.0, 5.0, -5.0], &transform, origin);
        assert_eq!(pts, vec![egui::pos2(110.0, 70.0), egui::pos2(115.0, 65.0)]);
    }

    #[test]
    fn island_to_screen_produces_one_position_per_vertex() {
        let mut v = viewer();
        v.scene.fit_to(400.0, 400.0);
        let pts = Viewer::island_to_screen(
            v.scene.vertices(),
            &Affine3::identity(),
            egui::Pos2::ZERO,
        );
        assert_eq!(pts.len(), v.scene.vertex_count());
    }

    #[test]
    fn to_color32_scales_unit_components() {
        assert_eq!(Viewer::to_color32([1.0, 1.0, 1.0]), egui::Color32::WHITE);
        assert_eq!(
            Viewer::to_color32([0.0, 0.5, 2.0]),
            egui::Color32::from_rgb(0, 128, 255)
        );
    }
}
