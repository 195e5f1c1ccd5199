mod view;

use anyhow::{Result, bail};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use reportdown_config::{Config, ReportsSource};
use reportdown_engine::io;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use view::Theme;

const PAGE: u16 = 10;

struct App {
    root: PathBuf,
    files: Vec<PathBuf>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
    theme: Theme,
    scroll: u16,
}

impl App {
    fn new(root: PathBuf, files: Vec<PathBuf>, theme: Theme) -> Self {
        let mut app = Self {
            root,
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
            theme,
            scroll: 0,
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self, by: u16) {
        let last = u16::try_from(self.current_content.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(by).min(last);
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn selected_file(&self) -> Option<&Path> {
        self.file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
            .map(PathBuf::as_path)
    }

    fn label(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        self.current_content = match self.selected_file() {
            Some(path) => match io::load_report(path) {
                Ok(report) => view::report_lines(&report, &self.theme),
                Err(e) => vec![Line::from(format!("Error reading report: {e}"))],
            },
            None => Vec::new(),
        };
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [reports-folder-or-file] [--json]");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("reportdown-cli");
    let config_path = Config::config_path();

    let mut json = false;
    let mut positional = Vec::new();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                eprintln!("Error: unknown option {flag}");
                usage(program);
                process::exit(1);
            }
            _ => positional.push(arg),
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            usage(program);
            process::exit(1);
        }
    };
    let theme = config
        .as_ref()
        .map(|c| Theme::from_accent(&c.accent_color))
        .unwrap_or_default();

    if positional.len() > 1 {
        usage(program);
        process::exit(1);
    }
    let argument = positional.first().map(|p| Path::new(p.as_str()));

    let (reports_path, source) =
        match reportdown_config::resolve_reports_path(argument, config.as_ref(), &config_path) {
            Ok(resolved) => resolved,
            Err(e) => {
                eprintln!("Error: {e}");
                usage(program);
                process::exit(1);
            }
        };

    if reports_path.is_file() {
        if json {
            let report = io::load_report(&reports_path)?;
            println!("{}", serde_json::to_string_pretty(&report.sections)?);
            return Ok(());
        }
        let root = reports_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        return run_viewer(App::new(root, vec![reports_path], theme));
    }

    if json {
        bail!("--json needs a single report file, got {}", reports_path.display());
    }

    // Validate reports directory using engine
    if let Err(e) = io::validate_reports_dir(&reports_path) {
        let source = match &source {
            ReportsSource::ConfigFile(path) => format!(" from config file '{}'", path.display()),
            ReportsSource::Argument => String::new(),
        };
        eprintln!(
            "Error: Reports path '{}'{} is invalid: {e}",
            reports_path.display(),
            source
        );
        process::exit(1);
    }

    let files = io::scan_report_files(&reports_path)?;
    log::debug!("found {} report files", files.len());
    run_viewer(App::new(reports_path, files, theme))
}

fn run_viewer(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(PAGE),
                KeyCode::PageUp | KeyCode::Char('b') => app.scroll_up(PAGE),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(Line::from(app.label(path))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Reports"))
        .highlight_style(Style::default().bg(app.theme.accent).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let title = app
        .selected_file()
        .map(io::display_name)
        .unwrap_or_else(|| "Report".to_string());
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a report to view it")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]));
    f.render_widget(help, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn app_with(files: &[(&str, &str)]) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        let found = io::scan_report_files(dir.path()).unwrap();
        let app = App::new(dir.path().to_path_buf(), found, Theme::default());
        (dir, app)
    }

    fn first_line(app: &App) -> String {
        app.current_content[0]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn first_report_is_shown() {
        let (_dir, app) = app_with(&[("a.md", "# A"), ("b.md", "# B")]);
        assert_eq!(app.file_list_state.selected(), Some(0));
        assert_eq!(first_line(&app), "a");
    }

    #[test]
    fn navigation_wraps() {
        let (_dir, mut app) = app_with(&[("a.md", "# A"), ("b.md", "# B")]);
        app.previous_file();
        assert_eq!(app.file_list_state.selected(), Some(1));
        app.next_file();
        assert_eq!(app.file_list_state.selected(), Some(0));
    }

    #[test]
    fn scroll_is_clamped_and_reset() {
        let (_dir, mut app) = app_with(&[("a.md", "one\ntwo"), ("b.md", "x")]);
        app.scroll_down(PAGE);
        assert_eq!(
            usize::from(app.scroll),
            app.current_content.len() - 1
        );
        app.scroll_up(PAGE * 2);
        assert_eq!(app.scroll, 0);
        app.scroll_down(1);
        app.next_file();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn empty_directory_has_no_selection() {
        let (_dir, mut app) = app_with(&[]);
        app.next_file();
        app.previous_file();
        assert_eq!(app.file_list_state.selected(), None);
        assert!(app.current_content.is_empty());
    }

    #[test]
    fn unreadable_report_shows_error() {
        let (_dir, app) = app_with(&[("bad.json", "{nope")]);
        assert!(first_line(&app).starts_with("Error reading report:"));
    }

    #[test]
    fn labels_are_relative_to_root() {
        let (dir, app) = app_with(&[("a.md", "x")]);
        assert_eq!(app.label(&dir.path().join("a.md")), "a.md");
    }
}
