mod app;

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use app::Workspace;
use clap::Parser;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use tabstrip::{Config, TabStrip, TabStripInput, Theme};
use tokio::sync::mpsc;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Demo editor showing a reorderable tab strip
#[derive(Debug, Parser)]
#[command(name = "tabstrip", version, about)]
struct Args {
    /// Files to show as tabs, in order
    files: Vec<String>,

    /// Mark a file as having unsaved changes (repeatable)
    #[arg(long, value_name = "PATH")]
    modified: Vec<String>,

    /// Initially active file (defaults to the first)
    #[arg(long, value_name = "PATH")]
    active: Option<String>,

    /// Config file (defaults to <config dir>/tabstrip/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    info!("Starting tabstrip");

    let config = Config::load(args.config.as_deref())?;
    let theme = config.theme.resolve()?;

    let mut workspace = Workspace::new();
    for path in &args.files {
        workspace.open(path, args.modified.contains(path));
    }
    if let Some(active) = &args.active {
        workspace.select(active);
    }

    let mut terminal = ratatui::try_init()?;
    let result = match execute!(stdout(), EnableMouseCapture, EnableFocusChange) {
        Ok(()) => run(&mut terminal, &mut workspace, &config, theme).await,
        Err(e) => Err(e.into()),
    };
    if let Err(e) = execute!(stdout(), DisableMouseCapture, DisableFocusChange) {
        warn!("Failed to restore terminal modes: {}", e);
    }
    ratatui::restore();

    info!("tabstrip shutting down");
    result
}

/// Log to a file so output never lands on the alternate screen
fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn run(
    terminal: &mut DefaultTerminal,
    workspace: &mut Workspace,
    config: &Config,
    theme: Theme,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = tokio::task::spawn_blocking(move || read_events(tx));

    let mut input = TabStripInput::new();
    let mut callbacks = Workspace::callbacks();

    loop {
        let mut strip_area = Rect::default();
        terminal.draw(|frame| strip_area = draw(frame, workspace, &input, config, theme))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if input.handle_key(key) {
                    continue;
                }
                if is_quit(key) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                let layout = TabStrip::new(workspace.files(), workspace.active_file())
                    .options(&config.strip)
                    .scroll(input.scroll())
                    .layout(strip_area);
                if let Some(event) = input.handle_mouse(mouse, workspace.files(), &layout) {
                    callbacks.dispatch(workspace, event);
                }
            }
            Event::FocusLost => input.reset(),
            other => debug!("Ignoring event {:?}", other),
        }
    }

    // Closing the channel stops the reader
    drop(rx);
    reader.await??;
    Ok(())
}

/// Forward terminal events until the receiver goes away
fn read_events(tx: mpsc::UnboundedSender<Event>) -> io::Result<()> {
    while !tx.is_closed() {
        if event::poll(POLL_INTERVAL)? && tx.send(event::read()?).is_err() {
            break;
        }
    }
    Ok(())
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Draw the strip, the editor pane and the status line. Returns the strip area.
fn draw(
    frame: &mut Frame,
    workspace: &Workspace,
    input: &TabStripInput,
    config: &Config,
    theme: Theme,
) -> Rect {
    let [strip_area, editor_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let strip = TabStrip::new(workspace.files(), workspace.active_file())
        .options(&config.strip)
        .theme(theme)
        .scroll(input.scroll())
        .hovered(input.hovered())
        .drag(input.drag_preview());
    frame.render_widget(strip, strip_area);

    let body = match workspace.active_file() {
        Some(path) => vec![Line::from(format!("Editing {}", path))],
        None if workspace.files().is_empty() => vec![Line::from("No open files")],
        None => vec![Line::from("No file selected")],
    };
    let editor = Paragraph::new(body).block(Block::default().borders(Borders::ALL));
    frame.render_widget(editor, editor_area);

    let status = Paragraph::new(Line::from(
        " click: select   ×: close   drag: reorder   esc: cancel drag   q: quit",
    ))
    .style(Style::default().fg(Color::Black).bg(Color::Gray));
    frame.render_widget(status, status_area);

    strip_area
}
