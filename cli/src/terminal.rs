use floodit_core::{CellSprite, Color, Overlay, Renderer};

const RESET: &str = "\x1b[0m";

fn background(color: Color) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

fn foreground(color: Color) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Draws frames as truecolor blocks, two columns per cell.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    cells: Vec<CellSprite>,
    overlay: Vec<String>,
    frame: String,
}

impl TerminalRenderer {
    /// The last finished frame.
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl Renderer for TerminalRenderer {
    fn begin(&mut self, _dimension: u32) {
        self.cells.clear();
        self.overlay.clear();
        self.frame.clear();
    }

    fn draw_cell(&mut self, sprite: &CellSprite) {
        self.cells.push(*sprite);
    }

    fn draw_overlay(&mut self, overlay: &Overlay) {
        match overlay {
            Overlay::Hud {
                turns_left,
                elapsed,
                color,
            } => {
                let fg = foreground(*color);
                self.overlay.push(format!("{fg}{turns_left}{RESET}"));
                self.overlay.push(format!("{fg}{elapsed}{RESET}"));
            }
            Overlay::Banner {
                text,
                text_color,
                background: fill,
            } => {
                self.overlay.push(format!(
                    "{}{} {text} {RESET}",
                    background(*fill),
                    foreground(*text_color)
                ));
            }
        }
    }

    fn finish(&mut self) {
        let side = self
            .cells
            .iter()
            .map(|sprite| usize::from(sprite.col.max(sprite.row)) + 1)
            .max()
            .unwrap_or(0);
        let mut rows = vec![vec![None; side]; side];
        for sprite in &self.cells {
            rows[usize::from(sprite.row)][usize::from(sprite.col)] = Some(sprite.color);
        }

        if side > 0 {
            self.frame.push_str("    ");
            for col in 0..side {
                self.frame.push_str(&format!("{:<2}", col % 100));
            }
            self.frame.push('\n');
        }
        for (index, row) in rows.iter().enumerate() {
            self.frame.push_str(&format!("{index:>3} "));
            for cell in row {
                match cell {
                    Some(color) => self.frame.push_str(&format!("{}  {RESET}", background(*color))),
                    None => self.frame.push_str("  "),
                }
            }
            self.frame.push('\n');
        }
        for line in &self.overlay {
            self.frame.push_str(line);
            self.frame.push('\n');
        }
    }
}
