use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const GRID_COLS: usize = 40;
    pub const GRID_ROWS: usize = 40;
    pub const CELL_SIZE: f64 = 15.;

    pub const MAX_FPS: f64 = 60.;
    pub const RANDOM_FILL_RATE: f64 = 0.3;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 220.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const GAP_ABOVE_STATS: f32 = 20.;

    pub const SCENE_BACKGROUND: Color32 = Color32::WHITE;
    pub const SCENE_BORDER_COLOR: Color32 = Color32::BLACK;
    pub const SCENE_BORDER_WIDTH: f32 = 1.;
    pub const CELL_COLOR: Color32 = Color32::RED;
    pub const CURSOR_COLOR: Color32 = Color32::BLACK;
    pub const CURSOR_STROKE_WIDTH: f32 = 1.;
    pub const CURSOR_DASH_LENGTH: f32 = 3.;
    pub const CURSOR_GAP_LENGTH: f32 = 1.;
}
