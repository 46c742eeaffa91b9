use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use career_compass::config::Config;
use career_compass::history::{self, HistoryState};
use career_compass::quiz::{self, Confirm, FixedConfirm, GateError, PromptConfirm, QuizError, QuizOutcome};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NEEDS_ANSWERS: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the career assessment (default if no subcommand)
    Quiz {
        /// Selection per question: 0 or - to skip, 1=Mathematics, 2=Biology, 3=Technology.
        /// Accepts space or comma separated values. Read from stdin when omitted.
        selections: Vec<String>,

        /// Continue without asking when few questions are answered
        #[arg(short, long)]
        yes: bool,

        /// Open the recommended career page in the browser
        #[arg(long)]
        open: bool,
    },
    /// Show recent quiz results
    History {
        /// Number of results to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// List internship opportunities
    Internships,
    /// Open an internship link by its key (e.g. cuny, microsoft)
    Intern {
        key: String,
    },
    /// Show internship click and recommendation statistics
    Stats,
}

#[derive(Parser, Debug)]
#[command(name = "career-compass")]
#[command(about = "Career assessment quiz and internship finder", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file (defaults to ~/.config/career-compass/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory containing the career pages (defaults to the current directory)
    #[arg(long, global = true)]
    site_root: Option<PathBuf>,

    /// Do not record quiz results or internship clicks
    #[arg(long, global = true)]
    no_history: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Quiz {
        selections: Vec::new(),
        yes: false,
        open: false,
    });

    let config = match career_compass::config::load_config(cli.config.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = quiz::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let site_root = cli
        .site_root
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let use_colors = career_compass::output::should_use_colors();
    let record = !cli.no_history;

    let code = match command {
        Commands::Quiz {
            selections,
            yes,
            open,
        } => run_quiz(&config, &selections, yes, open, &site_root, record, use_colors),
        Commands::History { limit } => {
            let state = load_history_or_empty();
            let recent: Vec<_> = state.recent_quizzes(limit).collect();
            println!("{}", career_compass::output::format_history(&recent, use_colors));
            EXIT_SUCCESS
        }
        Commands::Internships => {
            println!(
                "{}",
                career_compass::output::format_internships(
                    &career_compass::internships::INTERNSHIPS,
                    use_colors
                )
            );
            EXIT_SUCCESS
        }
        Commands::Intern { key } => run_intern(&config, &key, &site_root, record),
        Commands::Stats => {
            let state = load_history_or_empty();
            let stats = history::internship_stats(&state.internship_clicks);
            let recommendations = history::recommendation_counts(&state.quiz_results);
            println!(
                "{}",
                career_compass::output::format_stats(&stats, &recommendations)
            );
            EXIT_SUCCESS
        }
    };

    std::process::exit(code);
}

fn run_quiz(
    config: &Config,
    selections: &[String],
    yes: bool,
    open: bool,
    site_root: &Path,
    record: bool,
    use_colors: bool,
) -> i32 {
    let interactive = std::io::stdin().is_terminal();

    // Without selections, answers are read line by line from stdin (typed or piped)
    let answers = if selections.is_empty() {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        match quiz::prompt_answers(&mut input, &mut output) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Failed to read answers: {:#}", e);
                return EXIT_IO;
            }
        }
    } else {
        let parsed = match quiz::parse_selections(selections) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{:#}", e);
                return EXIT_CONFIG;
            }
        };
        match quiz::AnswerSet::from_selections(&parsed) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("{}", e);
                return EXIT_CONFIG;
            }
        }
    };

    let mut confirm: Box<dyn Confirm> = if yes {
        Box::new(FixedConfirm(true))
    } else if interactive {
        Box::new(PromptConfirm)
    } else {
        // Nobody to ask; treat as declined
        Box::new(FixedConfirm(false))
    };

    let outcome = match quiz::evaluate(&answers, config.quiz_threshold(), confirm.as_mut()) {
        Ok(o) => o,
        Err(GateError::Quiz(e @ QuizError::NoAnswers)) => {
            eprintln!("{}", e);
            eprintln!("{}", career_compass::output::format_unanswered(&answers.unanswered_questions()));
            return EXIT_NEEDS_ANSWERS;
        }
        Err(e) => {
            eprintln!("{:#}", e);
            return EXIT_IO;
        }
    };

    let result = match outcome {
        QuizOutcome::Recommended(result) => result,
        QuizOutcome::NeedsMoreAnswers {
            percent,
            unanswered,
        } => {
            eprintln!("Answer more questions for a recommendation ({}% done).", percent);
            if !yes && !interactive {
                eprintln!("Pass --yes to get a result anyway.");
            }
            eprintln!("{}", career_compass::output::format_unanswered(&unanswered));
            return EXIT_NEEDS_ANSWERS;
        }
    };

    let destination = result.category.destination(config.base_url());
    println!(
        "{}",
        career_compass::output::format_result(&result, &destination, use_colors)
    );

    if record {
        let (quiz_limit, _) = config.history_limits();
        update_history(|state| state.record_quiz(result.clone(), quiz_limit));
    }

    if open {
        if let Err(e) = career_compass::browser::open_target(&destination, site_root) {
            eprintln!("Failed to open career page: {:#}", e);
            return EXIT_IO;
        }
    }

    EXIT_SUCCESS
}

fn run_intern(config: &Config, key: &str, site_root: &Path, record: bool) -> i32 {
    let internship = match career_compass::internships::find_internship(key) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_CONFIG;
        }
    };

    if record {
        let (_, click_limit) = config.history_limits();
        update_history(|state| state.record_click(internship.key, internship.title, click_limit));
    }

    if let Err(e) = career_compass::browser::open_target(internship.url, site_root) {
        eprintln!("Failed to open browser: {:#}", e);
        eprintln!("Link: {}", internship.url);
        return EXIT_IO;
    }

    println!("Opening {} ({}): {}", internship.title, internship.organization, internship.url);
    EXIT_SUCCESS
}

/// History is best-effort: read failures fall back to empty
fn load_history_or_empty() -> HistoryState {
    let loaded = history::get_history_path().and_then(|path| history::load_history(&path));
    match loaded {
        Ok(state) => state,
        Err(e) => {
            warn!("Could not read history: {:#}", e);
            HistoryState::new()
        }
    }
}

/// Apply `change` to the stored history. Failures are logged, never fatal.
fn update_history<F: FnOnce(&mut HistoryState)>(change: F) {
    let result = history::get_history_path().and_then(|path| {
        let mut state = history::load_history(&path)?;
        change(&mut state);
        history::save_history(&path, &state)?;
        debug!("History saved to {}", path.display());
        Ok(())
    });

    if let Err(e) = result {
        warn!("Could not update history: {:#}", e);
    }
}
