//! Interactive demo host for the stepline widget.
//!
//! Plays the parent-stepper role: owns the current step index, derives each
//! step's lifecycle state from it, and drives redraws on a tick so the
//! completed-icon transition animates.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use stepline::config::Config;
use stepline::logging::init_logging;
use stepline::terminal_guard::{install_panic_hook, TerminalGuard};
use stepline::{IconSet, Step, StepConfig, StepEvent, StepIcon, StepSize, StepState};

#[derive(Parser)]
#[command(name = "stepline-demo")]
#[command(about = "Interactive demo of the stepline step widget")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Size token for all steps (xs, sm, md, lg, xl)
    #[arg(long)]
    size: Option<StepSize>,

    /// Redraw interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
}

struct DemoApp {
    steps: Vec<Step>,
    /// Index of the step currently in progress; equal to `steps.len()` once
    /// every step is completed.
    current: usize,
    /// Step receiving key input.
    focus: usize,
}

impl DemoApp {
    fn new(config: &Config, size: StepSize) -> Result<Self> {
        let theme = config.theme.resolve()?;
        let specs: [(&str, &str, Option<&str>); 3] = [
            ("Account", "Create your credentials", Some("1")),
            ("Verify", "Confirm the email we sent", Some("2")),
            ("Finish", "You are all set", Some("3")),
        ];

        let mut steps = Vec::with_capacity(specs.len());
        for (index, (label, description, icon)) in specs.into_iter().enumerate() {
            let state = if index == 0 {
                StepState::InProgress
            } else {
                StepState::Inactive
            };
            steps.push(Step::new(StepConfig {
                state,
                icons: IconSet {
                    icon: icon.map(StepIcon::new),
                    progress_icon: Some(StepIcon::new("◐")),
                    completed_icon: None,
                },
                label: Some(label.to_string()),
                description: Some(description.to_string()),
                size: Some(size),
                theme: Some(theme),
                ..StepConfig::default()
            }));
        }

        Ok(Self {
            steps,
            current: 0,
            focus: 0,
        })
    }

    fn advance(&mut self, now: Instant) {
        if self.current < self.steps.len() {
            self.current += 1;
            self.assign_states(now);
        }
    }

    fn retreat(&mut self, now: Instant) {
        if self.current > 0 {
            self.current -= 1;
            self.assign_states(now);
        }
    }

    /// Derive each step's state from its position relative to the current
    /// index. This is the orchestration the widget itself stays out of.
    fn assign_states(&mut self, now: Instant) {
        for (index, step) in self.steps.iter_mut().enumerate() {
            let state = match index.cmp(&self.current) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal => StepState::InProgress,
                std::cmp::Ordering::Greater => StepState::Inactive,
            };
            if let Some(transition) = step.set_state(state, now) {
                tracing::debug!(step = index, ?transition, "completed-icon transition");
            }
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = (self.focus + 1) % self.steps.len();
    }

    /// Returns false when the app should quit.
    fn handle_key(&mut self, key: KeyCode, now: Instant) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Right | KeyCode::Char('n') => self.advance(now),
            KeyCode::Left | KeyCode::Char('p') => self.retreat(now),
            KeyCode::Tab => self.cycle_focus(),
            other => {
                if let Some(StepEvent::Activated) = self.steps[self.focus].handle_key(other) {
                    tracing::info!(step = self.focus, "step activated");
                }
            }
        }
        true
    }

    fn draw(&self, frame: &mut Frame, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        for (index, step) in self.steps.iter().enumerate() {
            let area = chunks[index];
            step.render_at(frame, area, now);
            if index == self.focus {
                self.mark_focus(frame, area);
            }
        }
        self.render_footer(frame, chunks[4]);
    }

    fn mark_focus(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let marker = Paragraph::new("▌").style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(marker, Rect::new(area.x, area.y, 1, 1));
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let shortcuts = vec![
            Span::styled("[→/n]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Next  "),
            Span::styled("[←/p]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Back  "),
            Span::styled("[Tab]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Focus  "),
            Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Activate  "),
            Span::styled("[q]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ];
        frame.render_widget(Paragraph::new(Line::from(shortcuts)), area);
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut DemoApp, tick: Duration) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|frame| app.draw(frame, now))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code, Instant::now()) {
                    return Ok(());
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let logging = init_logging(&config, true, cli.debug)?;
    if let Some(path) = &logging.log_file_path {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let size = cli.size.unwrap_or(config.ui.size);
    let tick = Duration::from_millis(cli.tick_ms.unwrap_or(config.ui.tick_ms));
    let mut app = DemoApp::new(&config, size)?;

    install_panic_hook();
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run(&mut terminal, &mut app, tick)
}
