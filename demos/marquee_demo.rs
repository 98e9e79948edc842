//! Marquee Demo: A ticker line scrolling across the terminal.
//!
//! Demonstrates:
//! - Deferred start after the first layout pass
//! - Frame pacing with `FrameClock`
//! - Restart on terminal resize
//!
//! Usage: `cargo run --example marquee_demo -- "Your text here · "`
//! Press ESC or `q` to exit.

use crossbeam_channel::select;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use marquee::{
    Buffer, FontDescriptor, FrameClock, MarqueeColors, MarqueeConfig, MarqueeWidget, Modifiers,
    Presenter, Rect, Rgb, StartTimer, TerminalHost, Widget,
};
use std::io::{self, Write};
use std::time::Duration;

fn main() -> io::Result<()> {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Flywheel marquee · seamless scrolling · ".to_string());

    let (width, height) = terminal::size()?;
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, text, width, height);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn marquee_bounds(width: u16, height: u16) -> Rect {
    Rect::new(0, height / 2, width, 1)
}

fn run<W: Write>(out: &mut W, text: String, width: u16, height: u16) -> io::Result<()> {
    let config = MarqueeConfig::new(text)
        .with_font(FontDescriptor::default().with_modifiers(Modifiers::BOLD))
        .with_colors(MarqueeColors {
            text: Rgb::new(255, 200, 60),
            text_background: Rgb::new(20, 20, 30),
            background: Rgb::new(20, 20, 30),
        })
        .with_duration(Duration::from_secs(30));

    let mut buffer = Buffer::new(width.max(1), height.max(1));
    let mut presenter = Presenter::new();
    let mut marquee = MarqueeWidget::new(TerminalHost::new(marquee_bounds(width, height)), config);

    let frames = FrameClock::from_fps(30);
    let start = StartTimer::after(marquee.config().defer_delay);

    loop {
        select! {
            recv(start.receiver()) -> _ => {
                marquee.start();
            }
            recv(frames.receiver()) -> now => {
                let Ok(now) = now else { return Ok(()) };

                while event::poll(Duration::ZERO)? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                                return Ok(());
                            }
                        }
                        Event::Resize(w, h) => {
                            buffer.resize(w.max(1), h.max(1));
                            marquee.set_bounds(marquee_bounds(w, h));
                        }
                        _ => {}
                    }
                }

                marquee.tick(now);
                if marquee.needs_redraw() {
                    marquee.render(&mut buffer);
                    presenter.present(&buffer, marquee.bounds(), out)?;
                    marquee.clear_redraw();
                }
            }
        }
    }
}
