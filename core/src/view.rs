use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const WIN_BANNER: &str = "You won! Press 'R'!";
pub const LOSS_BANNER: &str = "You Lost. Press 'R'!";

/// Center of a cell in drawing space.
pub fn cell_center(coords: Coord2, cell_size: u16) -> Point {
    let size = i32::from(cell_size);
    Point::new(
        i32::from(coords.0) * size + size / 2,
        i32::from(coords.1) * size + size / 2,
    )
}

/// Cell whose square strictly contains `point`, points on a border hit nothing.
pub fn hit_test(point: Point, cell_size: u16, side: Coord) -> Option<Coord2> {
    let size = i32::from(cell_size);
    let half = size / 2;
    if half == 0 || point.x < 0 || point.y < 0 {
        return None;
    }

    let col = Coord::try_from(point.x / size).ok()?;
    let row = Coord::try_from(point.y / size).ok()?;
    if col >= side || row >= side {
        return None;
    }

    let center = cell_center((col, row), cell_size);
    let inside = (point.x - center.x).abs() < half && (point.y - center.y).abs() < half;
    inside.then_some((col, row))
}

/// Formats whole elapsed seconds as `M:SS`.
pub fn format_elapsed(secs: f64) -> String {
    // truncation is floor here, elapsed time is never negative
    let secs = secs as u64;
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSprite {
    pub col: Coord,
    pub row: Coord,
    pub color: Color,
    pub size: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Overlay {
    /// Shown during play, drawn in the current flood color
    Hud {
        turns_left: String,
        elapsed: String,
        color: Color,
    },
    /// Full-board banner once the game ended
    Banner {
        text: &'static str,
        text_color: Color,
        background: Color,
    },
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Board side in drawing units.
    pub dimension: u32,
    pub cells: Vec<CellSprite>,
    pub overlay: Overlay,
}

impl Scene {
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin(self.dimension);
        for sprite in &self.cells {
            renderer.draw_cell(sprite);
        }
        renderer.draw_overlay(&self.overlay);
        renderer.finish();
    }
}

/// Drawing backend supplied by the host.
pub trait Renderer {
    fn begin(&mut self, _dimension: u32) {}

    fn draw_cell(&mut self, sprite: &CellSprite);

    fn draw_overlay(&mut self, overlay: &Overlay);

    fn finish(&mut self) {}
}

impl<G: BoardGenerator> FloodGame<G> {
    /// Describes the current frame. Finished games show only their banner.
    pub fn scene(&self) -> Scene {
        let cell_size = self.config().cell_size;
        let dimension = u32::from(self.grid().side()) * u32::from(cell_size);

        let (cells, overlay) = match self.state() {
            EngineState::Won => (Vec::new(), Overlay::Banner {
                text: WIN_BANNER,
                text_color: Color::BLACK,
                background: Color::GREEN,
            }),
            EngineState::Lost => (Vec::new(), Overlay::Banner {
                text: LOSS_BANNER,
                text_color: Color::WHITE,
                background: Color::RED,
            }),
            EngineState::Idle | EngineState::Animating { .. } => {
                let cells = self
                    .grid()
                    .cells()
                    .map(|cell| CellSprite {
                        col: cell.col(),
                        row: cell.row(),
                        color: cell.color(),
                        size: cell_size,
                    })
                    .collect();
                let hud = Overlay::Hud {
                    turns_left: format!("Turns Left: {}", self.moves_remaining()),
                    elapsed: format!("Time elapsed: {}", format_elapsed(self.elapsed_secs())),
                    color: self.flood_color(),
                };
                (cells, hud)
            }
        };

        Scene {
            dimension,
            cells,
            overlay,
        }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        self.scene().render(renderer);
    }
}
