use anyhow::Context;
use clap::Parser;
use command::{Command, HELP};
use floodit_core::{FloodGame, GameConfig, InputEvent, Point, RandomBoardGenerator, cell_center};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use terminal::TerminalRenderer;

mod command;
mod terminal;

#[derive(Parser, Debug)]
#[command(version, about = "Flood the board with a single color", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Cells per board side
    #[arg(long, default_value_t = GameConfig::default().size)]
    size: u8,

    /// Number of colors on the board
    #[arg(long, default_value_t = GameConfig::default().colors)]
    colors: u8,

    /// Ticks per second while a flood animates
    #[arg(long, default_value_t = GameConfig::default().fps)]
    fps: u16,

    /// Cell side used by point clicks
    #[arg(long, default_value_t = GameConfig::DEFAULT_CELL_SIZE)]
    cell_size: u16,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Paint floods without waiting between ticks
    #[arg(long)]
    instant: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

struct Session {
    game: FloodGame<RandomBoardGenerator>,
    renderer: TerminalRenderer,
    tick_delay: Option<Duration>,
    tick_length: Duration,
    /// Wall-clock instant up to which ticks have been delivered.
    synced: Instant,
}

impl Session {
    fn draw(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        self.game.render(&mut self.renderer);
        out.write_all(self.renderer.frame().as_bytes())
            .context("Could not write frame")?;
        out.flush().context("Could not flush output")
    }

    /// Ticks until the running flood has settled, redrawing on every change.
    fn animate(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        while self.game.state().is_animating() {
            if let Some(delay) = self.tick_delay {
                std::thread::sleep(delay);
            }
            if self.game.tick().has_update() {
                self.draw(out)?;
            }
        }
        self.synced = Instant::now();
        Ok(())
    }

    /// Delivers the ticks owed for the time spent waiting on input.
    fn catch_up(&mut self) -> bool {
        let now = Instant::now();
        let tick = self.tick_length.as_nanos().max(1);
        let waited = now.duration_since(self.synced).as_nanos();
        let owed = waited / tick;
        let carry = Duration::from_nanos(u64::try_from(waited % tick).unwrap_or_default());
        self.synced = now.checked_sub(carry).unwrap_or(now);

        let mut updated = false;
        for _ in 0..owed {
            if self.game.is_finished() {
                break;
            }
            updated |= self.game.tick().has_update();
        }
        log::trace!("Caught up {} ticks", owed);
        updated
    }

    fn click(&mut self, point: Point, out: &mut impl Write) -> anyhow::Result<()> {
        let outcome = self.game.handle(InputEvent::Click(point))?;
        if outcome.has_update() {
            self.draw(out)?;
            self.animate(out)?;
        } else {
            writeln!(out, "nothing to flood there")?;
        }
        Ok(())
    }

    /// Runs one command, `false` once the player quits.
    fn run(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<bool> {
        if self.catch_up() && !matches!(command, Command::Show | Command::Tick(_)) {
            self.draw(out)?;
        }
        match command {
            Command::Click(coords) => {
                let point = cell_center(coords, self.game.config().cell_size);
                self.click(point, out)?;
            }
            Command::Point(point) => self.click(point, out)?,
            Command::Tick(count) => {
                for _ in 0..count {
                    self.game.handle(InputEvent::Tick)?;
                }
                self.draw(out)?;
            }
            Command::Key(key) => {
                if self.game.handle(InputEvent::Key(&key))?.has_update() {
                    self.draw(out)?;
                } else {
                    writeln!(out, "nothing happens")?;
                }
            }
            Command::Show => self.draw(out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.game.snapshot())
                    .context("Could not serialize game state")?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let config = GameConfig::new(args.size, args.colors, args.fps)
        .and_then(|config| config.with_cell_size(args.cell_size))
        .context("Invalid game configuration")?;
    let tick_delay = (!args.instant).then(|| Duration::from_secs_f64(config.tick_seconds()));

    let mut session = Session {
        game: FloodGame::with_seed(config, seed)?,
        renderer: TerminalRenderer::default(),
        tick_delay,
        tick_length: Duration::from_secs_f64(config.tick_seconds()),
        synced: Instant::now(),
    };

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;
    session.draw(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !session.run(command, &mut out)? {
                    break;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    log::debug!("Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(config: GameConfig) -> Session {
        Session {
            game: FloodGame::with_seed(config, 42).unwrap(),
            renderer: TerminalRenderer::default(),
            tick_delay: None,
            tick_length: Duration::from_secs_f64(config.tick_seconds()),
            synced: Instant::now(),
        }
    }

    #[test]
    fn idle_time_is_delivered_as_ticks() {
        let mut session = session(GameConfig::default());
        let start = Instant::now();
        session.synced = start.checked_sub(Duration::from_secs(2)).unwrap();

        session.catch_up();

        assert!(session.game.elapsed_secs() >= 2.0);
        assert!(session.synced >= start.checked_sub(Duration::from_secs(1)).unwrap());
    }

    #[test]
    fn catching_up_finishes_uniform_boards() {
        let config = GameConfig::new(1, 2, 60).unwrap();
        let mut session = session(config);
        session.synced = Instant::now().checked_sub(Duration::from_millis(100)).unwrap();

        assert!(session.catch_up());
        assert!(session.game.is_finished());
    }

    #[test]
    fn commands_redraw_after_catching_up() {
        let config = GameConfig::new(1, 2, 60).unwrap();
        let mut session = session(config);
        session.synced = Instant::now().checked_sub(Duration::from_millis(100)).unwrap();
        let mut out = Vec::new();

        assert!(session.run(Command::Help, &mut out).unwrap());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(floodit_core::WIN_BANNER));
        assert!(text.contains(HELP));
    }
}
