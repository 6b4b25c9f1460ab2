use super::{Config, RendererKind};
use crate::utils::FrameClock;
use crate::Session;
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};

pub struct App {
    pub(super) session: Session,         // The whole game state.
    pub(super) renderer: RendererKind,   // Which of the two renderers draws the scene.
    pub(super) texture: TextureHandle,   // Texture backing the raster renderer.
    pub(super) scene_rect: Option<Rect>, // Part of the window displaying the field.
    pub(super) frame_clock: FrameClock,  // Frame cap + previous frame duration.
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        Self {
            session: Session::new(Config::GRID_COLS, Config::GRID_ROWS, Config::CELL_SIZE),
            renderer: RendererKind::Raster,
            texture: ctx.load_texture(
                "life field",
                ColorImage::default(),
                TextureOptions::default(),
            ),
            scene_rect: None,
            frame_clock: FrameClock::default(),
        }
    }

    fn handle_input(&mut self, ctx: &Context, scene_rect: Rect) {
        ctx.input(|input| {
            match input.pointer.latest_pos() {
                Some(pos) if scene_rect.contains(pos) => {
                    let px = (pos.x - scene_rect.left()) as f64;
                    let py = (pos.y - scene_rect.top()) as f64;
                    if input.pointer.primary_pressed() {
                        self.session.drag_started(px, py);
                    } else {
                        self.session.pointer_moved(px, py);
                    }
                    if input.pointer.primary_released() {
                        self.session.drag_ended();
                    }
                }
                _ => self.session.pointer_left(),
            }

            if input.key_pressed(Key::Space) {
                self.session.step_once();
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.session.toggle_running();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                // input goes through the scene rect captured last frame
                if let Some(scene_rect) = self.scene_rect {
                    self.handle_input(ctx, scene_rect);
                }

                self.draw(ui);

                self.session.advance(self.frame_clock.frame_dt());
            });

        self.frame_clock.sleep(Config::MAX_FPS);
    }
}
