//! DDD Audit CLI - Command-line interface for design-token migration audits
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates user commands to library operations
//! - Handles external concerns like process exit codes, terminal output and file watching
//! - Exit codes: 0 when nothing needs changing, 1 when findings exist, 2 on fatal errors

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ddd_audit::config::DEFAULT_CONFIG_FILES;
use ddd_audit::{
    run_audit, AuditConfig, AuditError, AuditOptions, AuditResult, Auditor, IgnoreRules,
    OutputFormat, PropertyFamily, ReportOptions,
};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Exit code for a fatal error
const EXIT_FATAL: i32 = 2;

/// Default watch patterns
const WATCH_PATTERNS: &[&str] = &["**/*.css", "**/*.js", "**/*.ts", "**/*.html", "**/*.scss"];

const LONG_ABOUT: &str = "DDD Audit walks a project, reads every file that is not excluded \
by .dddignore rules, and reports CSS declarations whose literal values could be replaced \
by DDD design tokens.";

/// DDD Audit - find CSS values that should be design tokens
#[derive(Parser)]
#[command(name = "ddd-audit")]
#[command(version)]
#[command(about = "Audit CSS declarations and suggest DDD design-token replacements")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a directory tree
    Audit {
        /// Root directory (defaults to current directory)
        path: Option<PathBuf>,

        /// Print the resolved ignore rules before auditing
        #[arg(long)]
        debug: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Suggest a token for a single declaration
    Suggest {
        /// CSS property name
        property: String,

        /// CSS value
        value: String,
    },

    /// Show the ignore rules that apply below a directory
    Rules {
        /// Root directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// List audited CSS properties and their token families
    Properties,

    /// Watch for file changes and re-run the audit automatically
    Watch {
        /// Path to watch (defaults to current directory)
        path: Option<PathBuf>,

        /// File patterns to watch (glob patterns)
        #[arg(short, long, action = clap::ArgAction::Append)]
        pattern: Vec<String>,

        /// Debounce delay in milliseconds
        #[arg(long, default_value = "500")]
        delay: u64,
    },

    /// Validate configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_FATAL);
        }
    }
}

fn run_command(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Audit {
            path,
            debug,
            format,
            no_color,
        } => {
            let root = resolve_root(path)?;
            run_audit_command(cli.config.as_deref(), &root, debug, format, !no_color)
        }
        Commands::Suggest { property, value } => Ok(run_suggest(&property, &value)),
        Commands::Rules { path } => {
            let root = resolve_root(path)?;
            run_list_rules(cli.config.as_deref(), &root)
        }
        Commands::Properties => Ok(run_properties()),
        Commands::Watch {
            path,
            pattern,
            delay,
        } => {
            let root = resolve_root(path)?;
            run_watch(cli.config, &root, pattern, delay)
        }
        Commands::ValidateConfig { config_file } => {
            Ok(run_validate_config(config_file.or(cli.config)))
        }
    }
}

/// Explicit path, or the current working directory
fn resolve_root(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn load_config(config_path: Option<&Path>) -> AuditResult<AuditConfig> {
    let cwd = std::env::current_dir()?;
    AuditConfig::discover(config_path, &cwd)
}

fn run_audit_command(
    config_path: Option<&Path>,
    root: &Path,
    debug: bool,
    format: OutputFormatArg,
    use_colors: bool,
) -> anyhow::Result<i32> {
    let config = load_config(config_path)?;
    let use_colors = use_colors && io::stdout().is_terminal();

    if !use_colors {
        disable_colors();
    }

    let options = AuditOptions {
        debug,
        output_format: format.into(),
        report_options: ReportOptions {
            use_colors,
            ..Default::default()
        },
    };

    let stdout = io::stdout();
    let report = run_audit(root, &config, &options, stdout.lock())
        .with_context(|| format!("Audit of {} failed", root.display()))?;

    Ok(if report.has_findings() { 1 } else { 0 })
}

fn run_suggest(property: &str, value: &str) -> i32 {
    let property = property.trim().to_lowercase();
    let Some(family) = PropertyFamily::for_property(&property) else {
        eprintln!("'{property}' is not an audited property");
        eprintln!("Run `ddd-audit properties` to list audited properties");
        return 1;
    };

    match ddd_audit::suggest(&property, value.trim()) {
        Some(token) => println!("{property}: {} -> {token}", value.trim()),
        None => println!(
            "{property}: {} already uses DDD tokens ({family})",
            value.trim()
        ),
    }
    0
}

fn run_list_rules(config_path: Option<&Path>, root: &Path) -> anyhow::Result<i32> {
    let config = load_config(config_path)?;
    let root = root
        .canonicalize()
        .map_err(|e| AuditError::walk(root, format!("cannot resolve audit root: {e}")))?;

    let rules = Auditor::new(config).build_rules(&root)?;
    print!("{}", rules.format_table());
    Ok(0)
}

fn run_properties() -> i32 {
    println!("Audited CSS properties\n");
    for family in PropertyFamily::ALL {
        println!("{family}:");
        for property in family.properties() {
            println!("  {property}");
        }
        println!();
    }
    0
}

fn run_validate_config(config_path: Option<PathBuf>) -> i32 {
    let config_path = config_path
        .or_else(|| {
            let cwd = std::env::current_dir().ok()?;
            AuditConfig::find_default_file(&cwd)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILES[0]));

    println!("Validating configuration: {}", config_path.display());

    match AuditConfig::load_from_file(&config_path) {
        Ok(config) => {
            println!("Configuration is valid");
            println!("  Ignore file: {}", config.ignore_file);
            if config.extra_skip_dirs.is_empty() {
                println!("  Extra skipped directories: none");
            } else {
                let dirs = config.extra_skip_dirs.join(", ");
                println!("  Extra skipped directories: {dirs}");
            }
            println!("  Documentation: {}", config.docs_url);
            0
        }
        Err(e) => {
            eprintln!("Configuration validation failed: {e}");
            1
        }
    }
}

fn run_watch(
    config_path: Option<PathBuf>,
    root: &Path,
    patterns: Vec<String>,
    delay_ms: u64,
) -> anyhow::Result<i32> {
    use notify::{Event, RecursiveMode, Result as NotifyResult, Watcher};
    use std::sync::mpsc;

    let root = root
        .canonicalize()
        .map_err(|e| AuditError::walk(root, format!("cannot resolve audit root: {e}")))?;

    let watch_patterns: Vec<glob::Pattern> = if patterns.is_empty() {
        WATCH_PATTERNS
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<_, _>>()?
    } else {
        patterns
            .iter()
            .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid pattern '{p}'")))
            .collect::<anyhow::Result<_>>()?
    };

    println!("Starting DDD Audit watch mode...");
    println!("Watching: {}", root.display());
    println!(
        "Patterns: {}",
        watch_patterns
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Debounce delay: {delay_ms}ms");
    println!("Press Ctrl+C to stop watching\n");

    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| match res {
        Ok(event) => {
            if let Err(e) = tx.send(event) {
                tracing::warn!("Error sending event: {e}");
            }
        }
        Err(e) => tracing::warn!("Watch error: {e}"),
    })
    .map_err(|e| AuditError::watch(format!("Failed to create file watcher: {e}")))?;

    watcher.watch(&root, RecursiveMode::Recursive).map_err(|e| {
        AuditError::watch(format!("Failed to watch path '{}': {}", root.display(), e))
    })?;

    let mut config = watch_config(config_path.as_deref());
    let mut rules = watch_rules(&root, &config);
    let mut debouncer = Debouncer::new(Duration::from_millis(delay_ms));

    run_watch_audit(&root, &config);

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => {
                let filter = ChangeFilter {
                    root: &root,
                    config: &config,
                    rules: &rules,
                    patterns: &watch_patterns,
                };
                if let Some(trigger) = filter.classify(&event) {
                    debouncer.record(trigger, Instant::now());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                eprintln!("File watcher disconnected");
                break;
            }
        }

        let Some(trigger) = debouncer.due(Instant::now()) else {
            continue;
        };

        clear_screen();
        match trigger {
            WatchTrigger::Config => {
                println!("Configuration changed, reloading...");
                config = watch_config(config_path.as_deref());
                rules = watch_rules(&root, &config);
            }
            WatchTrigger::IgnoreFile => {
                println!("Ignore rules changed, rebuilding...");
                rules = watch_rules(&root, &config);
            }
            WatchTrigger::Source => println!("File changes detected, re-running audit..."),
        }

        run_watch_audit(&root, &config);
    }

    Ok(0)
}

/// What kind of change woke the watcher, ordered by how much has to be reloaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum WatchTrigger {
    Source,
    IgnoreFile,
    Config,
}

/// Trailing-edge debounce. Every recorded change pushes the deadline back,
/// so a burst of changes produces one run after the burst has settled.
#[derive(Debug)]
struct Debouncer {
    delay: Duration,
    pending: Option<(WatchTrigger, Instant)>,
}

impl Debouncer {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Re-arm the deadline, keeping the strongest trigger seen so far
    fn record(&mut self, trigger: WatchTrigger, now: Instant) {
        let trigger = match self.pending {
            Some((pending, _)) => pending.max(trigger),
            None => trigger,
        };
        self.pending = Some((trigger, now + self.delay));
    }

    /// Take the pending trigger once its deadline has passed
    fn due(&mut self, now: Instant) -> Option<WatchTrigger> {
        match self.pending {
            Some((trigger, deadline)) if now >= deadline => {
                self.pending = None;
                Some(trigger)
            }
            _ => None,
        }
    }
}

/// Decides which watch events warrant a new audit
struct ChangeFilter<'a> {
    root: &'a Path,
    config: &'a AuditConfig,
    rules: &'a IgnoreRules,
    patterns: &'a [glob::Pattern],
}

impl ChangeFilter<'_> {
    /// Config changes win over ignore-file changes, which win over source changes.
    /// Paths the audit would never visit are dropped.
    fn classify(&self, event: &notify::Event) -> Option<WatchTrigger> {
        if !is_relevant_event(event) {
            return None;
        }

        let mut trigger = None;

        for path in &event.paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if DEFAULT_CONFIG_FILES.contains(&name) {
                return Some(WatchTrigger::Config);
            }
            if self.rules.excludes_path(self.root, path) {
                tracing::trace!("Ignoring change to {}", path.display());
                continue;
            }

            let found = if name == self.config.ignore_file {
                Some(WatchTrigger::IgnoreFile)
            } else if matches_watch_pattern(path, self.root, self.patterns) {
                Some(WatchTrigger::Source)
            } else {
                None
            };
            trigger = trigger.max(found);
        }

        trigger
    }
}

fn is_relevant_event(event: &notify::Event) -> bool {
    use notify::EventKind;
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

fn matches_watch_pattern(path: &Path, root: &Path, patterns: &[glob::Pattern]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let name = path.file_name().map(Path::new);

    patterns.iter().any(|pattern| {
        pattern.matches_path(relative)
            || pattern
                .as_str()
                .strip_prefix("**/")
                .and_then(|tail| glob::Pattern::new(tail).ok())
                .zip(name)
                .is_some_and(|(tail, name)| tail.matches_path(name))
    })
}

/// Config for watch mode; a broken file falls back to defaults instead of stopping the watcher
fn watch_config(config_path: Option<&Path>) -> AuditConfig {
    match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            eprintln!("Using default configuration instead...");
            AuditConfig::default()
        }
    }
}

/// Rules used to drop events from skipped paths; unreadable ignore files leave only the skip set
fn watch_rules(root: &Path, config: &AuditConfig) -> IgnoreRules {
    match Auditor::new(config.clone()).build_rules(root) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Failed to build ignore rules: {e}");
            IgnoreRules::default()
                .with_extra_skip(config.extra_skip_dirs.clone())
        }
    }
}

fn run_watch_audit(root: &Path, config: &AuditConfig) {
    let options = AuditOptions {
        report_options: ReportOptions {
            use_colors: io::stdout().is_terminal(),
            ..Default::default()
        },
        ..Default::default()
    };

    let stdout = io::stdout();
    if let Err(e) = run_audit(root, config, &options, stdout.lock()) {
        eprintln!("Audit failed: {e}");
    }
    println!("Watching for changes... (Press Ctrl+C to stop)\n");
}

#[cfg(feature = "cli")]
fn clear_screen() {
    use crossterm::{
        cursor::MoveTo,
        execute,
        terminal::{Clear, ClearType},
    };
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
        tracing::debug!("Failed to clear terminal: {e}");
    }
}

#[cfg(not(feature = "cli"))]
fn clear_screen() {
    use std::io::Write;
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1B[2J\x1B[H");
    let _ = stdout.flush();
}

#[cfg(feature = "colors")]
fn disable_colors() {
    colored::control::set_override(false);
}

#[cfg(not(feature = "colors"))]
fn disable_colors() {}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, EventKind, ModifyKind, RemoveKind};
    use std::fs;
    use tempfile::TempDir;

    const MODIFY: EventKind = EventKind::Modify(ModifyKind::Any);

    fn event(kind: EventKind, path: PathBuf) -> notify::Event {
        notify::Event::new(kind).add_path(path)
    }

    fn default_patterns() -> Vec<glob::Pattern> {
        WATCH_PATTERNS
            .iter()
            .map(|p| glob::Pattern::new(p).unwrap())
            .collect()
    }

    fn config_file(dir: &Path) -> PathBuf {
        let path = dir.join("ddd_audit.yaml");
        fs::write(&path, "version: \"1.0\"\n").unwrap();
        path
    }

    #[test]
    fn test_audit_command_exit_codes() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_file(temp_dir.path());
        let root = temp_dir.path();

        let audit = || run_audit_command(Some(&config), root, false, OutputFormatArg::Json, false);

        fs::write(root.join("clean.css"), "  color: var(--ddd-primary-1);\n")
            .unwrap();
        assert_eq!(audit().unwrap(), 0);

        fs::write(root.join("dirty.css"), "  color: red;\n")
            .unwrap();
        assert_eq!(audit().unwrap(), 1);
    }

    #[test]
    fn test_audit_command_missing_root_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_file(temp_dir.path());

        let missing = temp_dir.path().join("missing");
        let result = run_audit_command(
            Some(&config),
            &missing,
            false,
            OutputFormatArg::Human,
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_suggest() {
        assert_eq!(run_suggest("Margin", "4px"), 0);
        assert_eq!(run_suggest("color", "var(--ddd-theme-default-white)"), 0);
        assert_eq!(run_suggest("display", "flex"), 1);
    }

    #[test]
    fn test_properties() {
        assert_eq!(run_properties(), 0);
    }

    #[test]
    fn test_validate_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("test_config.yaml");

        let yaml = AuditConfig::default().to_yaml().unwrap();
        fs::write(&config_file, yaml).unwrap();
        assert_eq!(run_validate_config(Some(config_file.clone())), 0);

        fs::write(&config_file, "version: \"9.9\"\n").unwrap();
        assert_eq!(run_validate_config(Some(config_file)), 1);
    }

    #[test]
    fn test_list_rules() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_file(temp_dir.path());
        fs::write(temp_dir.path().join(".dddignore"), "/build\n")
            .unwrap();

        assert_eq!(run_list_rules(Some(&config), temp_dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_classify_change() {
        let root = Path::new("/project");
        let config = AuditConfig::default();
        let rules = IgnoreRules::default();
        let patterns = default_patterns();
        let filter = ChangeFilter {
            root,
            config: &config,
            rules: &rules,
            patterns: &patterns,
        };
        let classify = |kind, relative: &str| filter.classify(&event(kind, root.join(relative)));

        assert_eq!(classify(MODIFY, "src/card.css"), Some(WatchTrigger::Source));
        assert_eq!(classify(MODIFY, "index.html"), Some(WatchTrigger::Source));
        assert_eq!(
            classify(EventKind::Create(CreateKind::File), "src/.dddignore"),
            Some(WatchTrigger::IgnoreFile)
        );
        assert_eq!(
            classify(MODIFY, "ddd_audit.yaml"),
            Some(WatchTrigger::Config)
        );
        assert_eq!(classify(MODIFY, "README.md"), None);
        assert_eq!(classify(EventKind::Access(AccessKind::Any), "a.css"), None);
    }

    #[test]
    fn test_classify_keeps_strongest_trigger() {
        let root = Path::new("/project");
        let config = AuditConfig::default();
        let rules = IgnoreRules::default();
        let patterns = default_patterns();
        let filter = ChangeFilter {
            root,
            config: &config,
            rules: &rules,
            patterns: &patterns,
        };

        let burst = notify::Event::new(MODIFY)
            .add_path(root.join("a.css"))
            .add_path(root.join(".dddignore"))
            .add_path(root.join("b.css"));
        assert_eq!(filter.classify(&burst), Some(WatchTrigger::IgnoreFile));
    }

    #[test]
    fn test_classify_drops_skipped_paths() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(".dddignore"), "/build\n*.min.css\n")
            .unwrap();

        let config = AuditConfig::default();
        let rules = watch_rules(root, &config);
        let patterns = default_patterns();
        let filter = ChangeFilter {
            root,
            config: &config,
            rules: &rules,
            patterns: &patterns,
        };
        let classify = |relative: &str| filter.classify(&event(MODIFY, root.join(relative)));

        assert_eq!(classify("node_modules/lib/index.js"), None);
        assert_eq!(classify("src/node_modules/a.css"), None);
        assert_eq!(classify(".git/index"), None);
        assert_eq!(classify("node_modules/pkg/.dddignore"), None);
        assert_eq!(classify("build/app.css"), None);
        assert_eq!(classify("theme.min.css"), None);
        assert_eq!(classify("src/build.css"), Some(WatchTrigger::Source));
        assert_eq!(classify("theme.css"), Some(WatchTrigger::Source));
    }

    #[test]
    fn test_remove_events_are_relevant() {
        let kind = EventKind::Remove(RemoveKind::File);
        let removed = event(kind, PathBuf::from("/p/a.css"));
        assert!(is_relevant_event(&removed));
    }

    #[test]
    fn test_debounce_waits_for_quiet_period() {
        let delay = Duration::from_millis(500);
        let start = Instant::now();
        let mut debouncer = Debouncer::new(delay);

        assert_eq!(debouncer.due(start), None);

        debouncer.record(WatchTrigger::Source, start);
        debouncer.record(WatchTrigger::Source, start + Duration::from_millis(400));

        // The second change re-armed the deadline
        assert_eq!(debouncer.due(start + delay), None);
        assert_eq!(
            debouncer.due(start + Duration::from_millis(900)),
            Some(WatchTrigger::Source)
        );
        assert_eq!(debouncer.due(start + Duration::from_secs(2)), None);
    }

    #[test]
    fn test_debounce_keeps_strongest_trigger() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        debouncer.record(WatchTrigger::Config, start);
        debouncer.record(WatchTrigger::Source, start);
        debouncer.record(WatchTrigger::IgnoreFile, start);

        let later = start + Duration::from_millis(100);
        assert_eq!(debouncer.due(later), Some(WatchTrigger::Config));
    }
}
