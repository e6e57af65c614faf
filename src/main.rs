//! stem-guess CLI: play 20 questions against the engine in a terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;

use stem_guess::catalog::{Catalog, CharacterId};
use stem_guess::core::{EngineConfig, DEFAULT_MAX_QUESTIONS};
use stem_guess::engine::{GuessingEngine, Phase};
use stem_guess::play::{evaluate_all, evaluate_random, EvaluationConfig, EvaluationStats};
use stem_guess::telemetry;

#[derive(Parser)]
#[command(name = "stem-guess", version, about = "Guess the STEM figure you're thinking of")]
struct Cli {
    /// Catalog file (.toml or .json). Defaults to the built-in catalog.
    #[arg(long, global = true, env = "STEM_GUESS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Questions asked before a forced guess.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_QUESTIONS)]
    max_questions: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default).
    Play,

    /// Play simulated games and report accuracy.
    Simulate {
        /// Number of random-secret games. Without it, plays each character once.
        #[arg(long)]
        games: Option<usize>,

        /// Seed for random secrets and answer noise.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Probability of a wrong answer per question.
        #[arg(long, default_value = "0.0")]
        noise: f64,
    },

    /// List the characters in the catalog.
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    let default_log = match command {
        Commands::Simulate { .. } => "info",
        _ => "warn",
    };
    telemetry::init_tracing(default_log);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path).inspect_err(|e| {
            error!(path = %path.display(), error = %e, "failed to load catalog");
        })?,
        None => Catalog::builtin()?,
    };
    let catalog = Arc::new(catalog);
    let config = EngineConfig::new().with_max_questions(cli.max_questions);

    match command {
        Commands::Play => play(catalog, config)?,
        Commands::Simulate { games, seed, noise } => {
            let stats = match games {
                Some(games) => {
                    let evaluation = EvaluationConfig::new()
                        .with_games(games)
                        .with_seed(seed)
                        .with_noise(noise);
                    evaluate_random(&catalog, &config, &evaluation)
                }
                None => evaluate_all(&catalog, &config),
            };
            print_stats(&stats);
        }
        Commands::List => {
            for c in catalog.all_characters() {
                println!(
                    "{:<28} {:<24} {:<12} {}",
                    c.id.as_str(),
                    c.name,
                    c.field.as_str(),
                    c.description
                );
            }
        }
    }

    Ok(())
}

fn print_stats(stats: &EvaluationStats) {
    println!("games:          {}", stats.games);
    println!("wins:           {}", stats.wins);
    println!("losses:         {}", stats.losses);
    println!("exhausted:      {}", stats.exhausted);
    println!("win rate:       {:.1}%", stats.win_rate() * 100.0);
    println!("mean questions: {:.2}", stats.mean_questions());
    println!("max questions:  {}", stats.max_questions);
    if !stats.missed.is_empty() {
        let missed: Vec<&str> = stats.missed.iter().map(CharacterId::as_str).collect();
        println!("missed:         {}", missed.join(", "));
    }
}

/// Read one trimmed line. `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until the user answers yes or no. `None` on end of input.
fn ask_yes_no(
    prompt: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<bool>> {
    loop {
        write!(out, "{prompt} [y/n] ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => writeln!(out, "Please answer y or n.")?,
        }
    }
}

fn play(catalog: Arc<Catalog>, config: EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let mut engine = GuessingEngine::with_config(Arc::clone(&catalog), config);

    writeln!(out, "Think of one of these {} figures:", catalog.len())?;
    for c in engine.all_characters() {
        writeln!(out, "  {} ({})", c.name, c.field)?;
    }

    loop {
        engine.start_game();

        while engine.phase() == Phase::Playing {
            let text = match engine.current_question() {
                Some(question) => question.text.clone(),
                None => {
                    engine.force_guess();
                    break;
                }
            };
            writeln!(
                out,
                "\nQuestion {} ({} candidates left)",
                engine.question_index(),
                engine.remaining_count()
            )?;
            let Some(answer) = ask_yes_no(&text, &mut input, &mut out)? else {
                return Ok(());
            };
            engine.answer_question(answer);
        }

        if let Some(guess) = engine.guessed_character() {
            writeln!(out, "\nI think your character is... {}!", guess.name)?;
            if !guess.description.is_empty() {
                writeln!(out, "  {} ({})", guess.description, guess.field)?;
            }
        }

        if engine.phase() == Phase::Guessing {
            let Some(correct) = ask_yes_no("Did I guess right?", &mut input, &mut out)? else {
                return Ok(());
            };
            let actual = if correct {
                None
            } else {
                write!(out, "Who was it? (id from `stem-guess list`, blank to skip) ")?;
                out.flush()?;
                read_line(&mut input)?
                    .filter(|line| !line.is_empty())
                    .map(CharacterId::new)
            };
            engine.confirm_guess(correct, actual);
        }

        let asked = engine.state().questions_asked();
        match (engine.phase(), engine.guessed_character(), engine.correct_character()) {
            (Phase::Won, _, _) => {
                writeln!(out, "\nGot it in {asked} questions!")?;
            }
            (_, None, _) => {
                writeln!(
                    out,
                    "\nSorry, nobody in my catalog matches those answers."
                )?;
            }
            (_, Some(_), Some(actual)) => {
                writeln!(out, "\nYou were thinking of {}. I'll do better next time.", actual.name)?;
            }
            (_, Some(_), None) => {
                writeln!(out, "\nYou beat me after {asked} questions.")?;
            }
        }

        match ask_yes_no("\nPlay again?", &mut input, &mut out)? {
            Some(true) => engine.reset_game(),
            _ => break,
        }
    }

    Ok(())
}
