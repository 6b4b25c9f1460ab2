use super::{GameField, GridGeometry, Playback};
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DragState {
    Off,
    Fill,
    Clear,
}

/// The whole interactive state of one Game of Life pad: field, coordinate
/// mapping, playback, cursor and drag state. Event handlers and control
/// actions mutate the session; the view only reads it.
pub struct Session {
    field: GameField,
    geometry: GridGeometry,
    playback: Playback,
    drag: DragState,
    cursor: Option<(f64, f64)>, // snapped scene-pixel position
    generation: u64,
}

impl Session {
    pub fn new(cols: usize, rows: usize, cell_size: f64) -> Self {
        Self {
            field: GameField::blank(cols, rows),
            geometry: GridGeometry::new(cols, rows, cell_size),
            playback: Playback::new(),
            drag: DragState::Off,
            cursor: None,
            generation: 0,
        }
    }

    pub fn field(&self) -> &GameField {
        &self.field
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn speed(&self) -> u32 {
        self.playback.speed()
    }

    /// Snapped cursor position in scene pixels, `None` while the pointer
    /// is outside the scene.
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn cursor_cell(&self) -> Option<(i32, i32)> {
        self.cursor.map(|(px, py)| self.geometry.cell_at(px, py))
    }

    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        let (px, py) = self.geometry.clamp_to_scene(px, py);
        self.cursor = Some(self.geometry.snap_to_lattice(px, py));
        let (cx, cy) = self.geometry.cell_at(px, py);
        match self.drag {
            DragState::Fill => self.field.set(cx as usize, cy as usize, true),
            DragState::Clear => self.field.set(cx as usize, cy as usize, false),
            DragState::Off => {}
        }
    }

    /// Begins a paint or erase drag: the cell under the pointer is
    /// toggled and its new state decides which. Ignored while a drag is
    /// already active.
    pub fn drag_started(&mut self, px: f64, py: f64) {
        if self.drag != DragState::Off {
            return;
        }
        let (px, py) = self.geometry.clamp_to_scene(px, py);
        self.cursor = Some(self.geometry.snap_to_lattice(px, py));
        let (cx, cy) = self.geometry.cell_at(px, py);
        let filled = self.field.toggle(cx as usize, cy as usize);
        self.drag = if filled {
            DragState::Fill
        } else {
            DragState::Clear
        };
        debug!(drag = ?self.drag, "drag started");
    }

    pub fn drag_ended(&mut self) {
        if self.drag == DragState::Off {
            return;
        }
        debug!("drag ended");
        self.drag = DragState::Off;
    }

    pub fn pointer_left(&mut self) {
        self.cursor = None;
        self.drag_ended();
    }

    /// Advances the playback by one frame; steps the field when the
    /// throttle fires.
    pub fn advance(&mut self, dt: Duration) {
        if self.playback.tick(dt) {
            self.step_once();
        }
    }

    pub fn step_once(&mut self) {
        self.field = self.field.step();
        self.generation += 1;
    }

    pub fn start(&mut self) {
        self.playback.start();
    }

    pub fn stop(&mut self) {
        self.playback.stop();
    }

    pub fn toggle_running(&mut self) {
        self.playback.toggle();
    }

    pub fn speed_up(&mut self) {
        self.playback.speed_up();
    }

    pub fn speed_down(&mut self) {
        self.playback.speed_down();
    }

    pub fn clear(&mut self) {
        self.field.clear();
        self.generation = 0;
        // nothing to run on an empty field
        self.playback.stop();
    }

    pub fn randomize(&mut self, fill_rate: f64) {
        self.field.randomize(None, fill_rate);
        self.generation = 0;
    }
}
