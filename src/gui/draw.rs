use super::{App, Config};
use eframe::egui::{
    pos2, vec2, Button, Color32, ColorImage, Painter, Rect, RichText, Rounding, Sense, Shape,
    Stroke, TextureFilter, TextureOptions, TextureWrapMode, Ui, Vec2,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// One filled rect shape per alive cell.
    Shapes,
    /// One texture pixel per cell, magnified with nearest-neighbor.
    Raster,
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_playback_controls(&mut self, ui: &mut Ui) {
        let text = if self.session.is_running() {
            "Stop"
        } else {
            "Start"
        };
        if ui.add(Self::new_button(text)).clicked() {
            self.session.toggle_running();
        }

        if ui.add(Self::new_button("Clear")).clicked() {
            self.session.clear();
        }

        ui.add_enabled(!self.session.is_running(), |ui: &mut Ui| {
            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Step")).clicked() {
                    self.session.step_once();
                }
                if ui.add(Self::new_button("Random fill")).clicked() {
                    self.session.randomize(Config::RANDOM_FILL_RATE);
                }
            })
            .response
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            if ui.add(Self::new_button("-")).clicked() {
                self.session.speed_down();
            }
            ui.label(Self::new_text(&format!("{}", self.session.speed())));
            if ui.add(Self::new_button("+")).clicked() {
                self.session.speed_up();
            }
        });

        let mut raster = self.renderer == RendererKind::Raster;
        if ui
            .checkbox(&mut raster, Self::new_text("Raster renderer"))
            .changed()
        {
            self.renderer = if raster {
                RendererKind::Raster
            } else {
                RendererKind::Shapes
            };
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.session.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.session.field().population()
        )));
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.frame_clock.fps().round() as u32
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        let aw = ui.available_width();
        ui.group(|ui| {
            ui.vertical(|ui| {
                self.draw_playback_controls(ui);

                ui.add_space(Config::GAP_ABOVE_STATS);

                self.draw_stats(ui);
            });

            // to adjust the bounds of the control panel
            ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
        });
    }

    fn draw_scene(&mut self, ui: &mut Ui) {
        let geometry = *self.session.geometry();
        let size = vec2(geometry.scene_width() as f32, geometry.scene_height() as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, Rounding::ZERO, Config::SCENE_BACKGROUND);

        match self.renderer {
            RendererKind::Shapes => {
                for y in 0..geometry.rows() as i32 {
                    for x in 0..geometry.cols() as i32 {
                        if !self.session.field().get(x, y) {
                            continue;
                        }
                        let (ox, oy) = geometry.cell_origin(x, y);
                        let cell = Rect::from_min_size(
                            rect.min + vec2(ox as f32, oy as f32),
                            Vec2::splat(geometry.cell_size() as f32),
                        );
                        painter.rect_filled(cell, Rounding::ZERO, Config::CELL_COLOR);
                    }
                }
            }
            RendererKind::Raster => {
                let mut image = ColorImage::new(
                    [geometry.cols(), geometry.rows()],
                    Config::SCENE_BACKGROUND,
                );
                for y in 0..geometry.rows() as i32 {
                    for x in 0..geometry.cols() as i32 {
                        if self.session.field().get(x, y) {
                            image[(x as usize, y as usize)] = Config::CELL_COLOR;
                        }
                    }
                }
                let texture_options = TextureOptions {
                    magnification: TextureFilter::Nearest,
                    minification: TextureFilter::Linear,
                    wrap_mode: TextureWrapMode::ClampToEdge,
                };
                self.texture.set(image, texture_options);
                let uv = Rect::from_min_max(pos2(0., 0.), pos2(1., 1.));
                painter.image(self.texture.id(), rect, uv, Color32::WHITE);
            }
        }

        painter.rect_stroke(
            rect,
            Rounding::ZERO,
            Stroke::new(Config::SCENE_BORDER_WIDTH, Config::SCENE_BORDER_COLOR),
        );

        self.draw_cursor(&painter, rect);

        self.scene_rect.replace(rect);
    }

    /// Dashed square around the cell the pointer is over.
    fn draw_cursor(&self, painter: &Painter, rect: Rect) {
        let Some((sx, sy)) = self.session.cursor() else {
            return;
        };
        let center = rect.min + vec2(sx as f32, sy as f32);
        let highlight = Rect::from_center_size(
            center,
            Vec2::splat(self.session.geometry().cell_size() as f32),
        );
        let stroke = Stroke::new(Config::CURSOR_STROKE_WIDTH, Config::CURSOR_COLOR);
        let corners = [
            highlight.left_top(),
            highlight.right_top(),
            highlight.right_bottom(),
            highlight.left_bottom(),
            highlight.left_top(),
        ];
        for edge in corners.windows(2) {
            painter.extend(Shape::dashed_line(
                edge,
                stroke,
                Config::CURSOR_DASH_LENGTH,
                Config::CURSOR_GAP_LENGTH,
            ));
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.vertical_centered(|ui| {
                self.draw_scene(ui);
            });
        });
    }
}
