//! Picks CLI - betting calculators from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use picks::calculators::{
    ArbitrageForm, CalculatorDesk, CalculatorKind, ConverterForm, ExpectedValueForm,
    ImpliedProbabilityForm, KellyForm, ParlayForm, SpreadForm,
};
use picks::translations::{unknown_usages, verify_dir, Translations, UsageScanner};
use picks::{
    ArbitrageResult, ExpectedValue, KellyResult, OddsConversion, ParlayResult, SpreadOutcome,
    SpreadResult,
};

#[cfg(feature = "generate")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "generate")]
use picks::generate::{GenerationClient, GenerationConfig};

/// Default locale directory (relative to project root)
const DEFAULT_LOCALES_DIR: &str = "locales";
const DEFAULT_REFERENCE_LOCALE: &str = "en";

#[derive(Parser)]
#[command(name = "picks")]
#[command(author, version, about = "Sports betting odds calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an American quote in every odds format
    Convert {
        /// American odds (e.g. +150, -110)
        #[arg(allow_negative_numbers = true)]
        odds: String,
    },

    /// Break-even win probability of a quote
    Implied {
        /// American odds
        #[arg(allow_negative_numbers = true)]
        odds: String,
    },

    /// Price a parlay
    Parlay {
        /// Leg odds in American format (at least two)
        #[arg(allow_negative_numbers = true, num_args = 1..)]
        legs: Vec<String>,

        /// Stake amount
        #[arg(short, long, default_value = "100")]
        stake: String,
    },

    /// Split a stake across two opposing outcomes
    Arb {
        /// Odds of the first outcome
        #[arg(allow_negative_numbers = true)]
        odds1: String,

        /// Odds of the second outcome
        #[arg(allow_negative_numbers = true)]
        odds2: String,

        /// Total stake
        #[arg(short, long, default_value = "1000")]
        stake: String,
    },

    /// Expected value of a wager
    Ev {
        /// American odds
        #[arg(allow_negative_numbers = true)]
        odds: String,

        /// Estimated win probability in percent
        #[arg(short, long)]
        probability: String,

        /// Stake amount
        #[arg(short, long, default_value = "100")]
        stake: String,
    },

    /// Kelly criterion stake
    Kelly {
        /// American odds
        #[arg(allow_negative_numbers = true)]
        odds: String,

        /// Estimated win probability in percent
        #[arg(short, long)]
        probability: String,

        /// Bankroll amount
        #[arg(short, long, default_value = "10000")]
        bankroll: String,

        /// Kelly multiplier (1.0 = full, 0.5 = half, 0.25 = quarter)
        #[arg(short, long, default_value = "1.0")]
        multiplier: f64,
    },

    /// Settle a point spread bet
    Spread {
        /// Spread line of the backed team (e.g. -3.5)
        #[arg(short, long, allow_negative_numbers = true)]
        line: String,

        /// Final score of the backed team
        #[arg(short, long)]
        team: String,

        /// Final score of the opponent
        #[arg(short = 'p', long)]
        opponent: String,

        /// American odds of the spread bet
        #[arg(long, default_value = "-110", allow_negative_numbers = true)]
        odds: String,

        /// Stake amount
        #[arg(short, long, default_value = "110")]
        stake: String,
    },

    /// Verify every locale file has all reference keys
    Translations {
        /// Directory of <locale>.json files
        #[arg(short, long, default_value = DEFAULT_LOCALES_DIR)]
        dir: PathBuf,

        /// Reference locale
        #[arg(short, long, default_value = DEFAULT_REFERENCE_LOCALE)]
        reference: String,

        /// Source directory to scan for key usages
        #[arg(long)]
        src: Option<PathBuf>,

        /// File extensions to scan
        #[arg(long, value_delimiter = ',', default_value = "js,jsx,ts,tsx")]
        ext: Vec<String>,
    },

    /// Generate text with the generative-language API (requires generate feature)
    #[cfg(feature = "generate")]
    Generate {
        /// Prompt text
        prompt: String,

        /// Model name
        #[arg(long, default_value = "gemini-pro")]
        model: String,

        /// API key (defaults to GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays parseable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if cli.interactive {
        return run_interactive();
    }

    let Some(command) = cli.command else {
        println!("Use --help for usage information or --interactive for interactive mode.");
        return Ok(());
    };

    let json = cli.json;
    match command {
        Commands::Convert { odds } => {
            let conversion = ConverterForm { odds }.evaluate();
            emit(json, &conversion, || print_conversion(conversion.as_ref()))?;
        }
        Commands::Implied { odds } => {
            let probability = ImpliedProbabilityForm { odds }.compute();
            emit(json, &probability, || print_implied(probability))?;
        }
        Commands::Parlay { legs, stake } => {
            let result = ParlayForm { legs, stake }.compute();
            emit(json, &result, || print_parlay(&result))?;
        }
        Commands::Arb {
            odds1,
            odds2,
            stake,
        } => {
            let result = ArbitrageForm {
                bet1_odds: odds1,
                bet2_odds: odds2,
                stake,
            }
            .compute();
            emit(json, &result, || print_arbitrage(&result))?;
        }
        Commands::Ev {
            odds,
            probability,
            stake,
        } => {
            let result = ExpectedValueForm {
                odds,
                probability,
                stake,
            }
            .compute();
            emit(json, &result, || print_expected_value(&result))?;
        }
        Commands::Kelly {
            odds,
            probability,
            bankroll,
            multiplier,
        } => {
            let result = KellyForm {
                odds,
                probability,
                bankroll,
                multiplier,
            }
            .compute();
            emit(json, &result, || print_kelly(&result, multiplier))?;
        }
        Commands::Spread {
            line,
            team,
            opponent,
            odds,
            stake,
        } => {
            let result = SpreadForm {
                spread: line,
                team_score: team,
                opponent_score: opponent,
                odds,
                stake,
            }
            .evaluate();
            emit(json, &result, || print_spread(result.as_ref()))?;
        }
        Commands::Translations {
            dir,
            reference,
            src,
            ext,
        } => {
            run_translations(&dir, &reference, src.as_deref(), &ext, json)?;
        }
        #[cfg(feature = "generate")]
        Commands::Generate {
            prompt,
            model,
            api_key,
        } => {
            run_generate(&prompt, model, api_key, json)?;
        }
    }

    Ok(())
}

/// Print `value` as JSON, or run the human-readable printer
fn emit<T: Serialize>(json: bool, value: &T, print: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print();
    }
    Ok(())
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn signed_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

fn print_conversion(conversion: Option<&OddsConversion>) {
    println!("{}", CalculatorKind::Converter.title().yellow().bold());
    let Some(c) = conversion else {
        println!("{}", "Enter nonzero American odds (e.g. +150, -110).".dimmed());
        return;
    };
    println!("{:<20} {}", "American:", c.american);
    println!("{:<20} {:.3}", "Decimal:", c.decimal);
    println!("{:<20} {}", "Fractional:", c.fractional);
    println!("{:<20} {:.2}%", "Implied probability:", c.implied_probability);
}

fn print_implied(probability: f64) {
    println!("{}", CalculatorKind::ImpliedProbability.title().yellow().bold());
    println!("{:<20} {:.2}%", "Break-even rate:", probability);
}

fn print_parlay(result: &ParlayResult) {
    println!("{}", CalculatorKind::Parlay.title().yellow().bold());
    if result.legs == 0 {
        println!("{}", "Need at least two valid legs and a stake.".dimmed());
    }
    let american = result
        .combined_american
        .map(|o| o.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("{:<20} {}", "Legs:", result.legs);
    println!("{:<20} {:.4} ({})", "Combined odds:", result.combined_decimal, american);
    println!("{:<20} {}", "Payout:", money(result.payout));
    println!("{:<20} {}", "Profit:", money(result.profit).green());
}

fn print_arbitrage(result: &ArbitrageResult) {
    println!("{}", CalculatorKind::Arbitrage.title().yellow().bold());
    println!("{:<20} {}", "Bet 1:", money(result.bet1));
    println!("{:<20} {}", "Bet 2:", money(result.bet2));
    println!(
        "{:<20} {} / {}",
        "Payouts:",
        money(result.payout1),
        money(result.payout2)
    );
    println!("{:<20} {:.2}%", "Total implied:", result.total_implied);
    println!(
        "{:<20} {} ({:.2}%)",
        "Guaranteed profit:",
        signed_money(result.profit),
        result.profit_pct
    );
    if result.is_arb {
        println!("{}", "→ Arbitrage opportunity".green().bold());
    } else {
        println!("{}", "No arbitrage".red());
    }
}

fn print_expected_value(result: &ExpectedValue) {
    println!("{}", CalculatorKind::ExpectedValue.title().yellow().bold());
    let ev = signed_money(result.ev);
    let ev = if result.is_positive() { ev.green() } else { ev.red() };
    println!("{:<20} {}", "Win amount:", money(result.win_amount));
    println!("{:<20} {}", "Expected value:", ev);
    println!("{:<20} {:.2}%", "ROI:", result.roi);
    println!("{:<20} {:.2}%", "Implied probability:", result.implied_probability);
    println!("{:<20} {:+.2} pts", "Edge:", result.edge);
}

fn print_kelly(result: &KellyResult, multiplier: f64) {
    println!("{}", CalculatorKind::Kelly.title().yellow().bold());
    if (multiplier - 1.0).abs() > f64::EPSILON {
        println!("{:<20} {:.2}x", "Kelly multiplier:", multiplier);
    }
    println!("{:<20} {:.2}%", "Bankroll fraction:", result.percent);
    println!("{:<20} {}", "Recommended stake:", money(result.stake).green());
    if !result.has_edge() {
        println!("{}", "No edge at this price - do not bet.".dimmed());
    }
}

fn print_spread(result: Option<&SpreadResult>) {
    println!("{}", CalculatorKind::Spread.title().yellow().bold());
    let Some(r) = result else {
        println!("{}", "Enter the line and both final scores.".dimmed());
        return;
    };
    let outcome = match r.outcome {
        SpreadOutcome::Cover => "Cover".green(),
        SpreadOutcome::Push => "Push".yellow(),
        SpreadOutcome::Loss => "Loss".red(),
    };
    println!("{:<20} {:+.1}", "Adjusted margin:", r.adjusted_margin);
    println!("{:<20} {}", "Result:", outcome);
    println!("{:<20} {}", "Payout:", money(r.payout));
    println!("{:<20} {}", "Profit:", signed_money(r.profit));
    println!("{:<20} {:.2}%", "Break-even rate:", r.break_even_rate);
}

fn run_translations(
    dir: &Path,
    reference: &str,
    src: Option<&Path>,
    extensions: &[String],
    json: bool,
) -> Result<()> {
    let mut report = verify_dir(dir, reference)
        .with_context(|| format!("Failed to verify locales in {:?}", dir))?;

    if let Some(src_dir) = src {
        let exts: Vec<&str> = extensions.iter().map(String::as_str).collect();
        let used = UsageScanner::new()
            .scan_dir(src_dir, &exts)
            .with_context(|| format!("Failed to scan sources in {:?}", src_dir))?;
        let reference_path = dir.join(format!("{}.json", reference));
        let reference_locale = Translations::load(&reference_path)?;
        report.unknown_usages = unknown_usages(&reference_locale, &used);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} ({} keys)",
            "Reference locale".yellow().bold(),
            report.reference,
            report.reference_keys
        );
        println!("{}", "-".repeat(40));
        for locale in &report.locales {
            let status = if locale.is_complete() {
                "complete".green()
            } else {
                "incomplete".red()
            };
            println!("{:<8} {}", locale.locale, status);
            for key in &locale.missing {
                println!("    {} {}", "missing".red(), key);
            }
            for key in &locale.empty {
                println!("    {} {}", "empty".yellow(), key);
            }
            for key in &locale.extra {
                println!("    {} {}", "extra".dimmed(), key);
            }
        }
        for key in &report.unknown_usages {
            println!("{} {}", "undefined key used in source:".red(), key);
        }
    }

    if !report.is_complete() {
        anyhow::bail!("Translations are incomplete");
    }
    Ok(())
}

#[cfg(feature = "generate")]
fn run_generate(prompt: &str, model: String, api_key: Option<String>, json: bool) -> Result<()> {
    let api_key = api_key
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .context("No API key: pass --api-key or set GEMINI_API_KEY")?;

    let config = GenerationConfig {
        model,
        ..GenerationConfig::new(api_key)
    };
    let client = GenerationClient::new(config);

    // Create runtime for async operations
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.set_message("Generating...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = rt.block_on(client.generate(prompt));
    pb.finish_and_clear();

    let generation = result.context("Generation failed")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&generation)?);
    } else {
        println!("{}", generation.text);
    }
    Ok(())
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn run_interactive() -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!("Leave a field blank to clear it.\n");

    let theme = ColorfulTheme::default();
    let mut desk = CalculatorDesk::new();

    let mut options: Vec<&str> = CalculatorKind::ALL.iter().map(|k| k.title()).collect();
    options.push("Quit");

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Which calculator?")
            .items(&options)
            .default(0)
            .interact()?;

        let Some(&kind) = CalculatorKind::ALL.get(selection) else {
            println!("Goodbye!");
            break;
        };

        match kind {
            CalculatorKind::Converter => {
                desk.converter.odds = prompt_text(&theme, "American odds", &desk.converter.odds)?;
                println!();
                print_conversion(desk.converter.evaluate().as_ref());
            }
            CalculatorKind::Parlay => {
                let form = &mut desk.parlay;
                for (i, leg) in form.legs.iter_mut().enumerate() {
                    let label = format!("Leg {} odds", i + 1);
                    *leg = prompt_text(&theme, &label, leg)?;
                }
                loop {
                    let label = format!("Leg {} odds (blank to finish)", form.legs.len() + 1);
                    let leg = prompt_text(&theme, &label, "")?;
                    if leg.trim().is_empty() {
                        break;
                    }
                    form.add_leg();
                    if let Some(last) = form.legs.last_mut() {
                        *last = leg;
                    }
                }
                form.stake = prompt_text(&theme, "Stake", &form.stake)?;
                println!();
                print_parlay(&form.compute());
            }
            CalculatorKind::Arbitrage => {
                let form = &mut desk.arbitrage;
                form.bet1_odds = prompt_text(&theme, "Outcome 1 odds", &form.bet1_odds)?;
                form.bet2_odds = prompt_text(&theme, "Outcome 2 odds", &form.bet2_odds)?;
                form.stake = prompt_text(&theme, "Total stake", &form.stake)?;
                println!();
                print_arbitrage(&form.compute());
            }
            CalculatorKind::ExpectedValue => {
                let form = &mut desk.expected_value;
                form.odds = prompt_text(&theme, "American odds", &form.odds)?;
                form.probability = prompt_text(&theme, "Win probability (%)", &form.probability)?;
                form.stake = prompt_text(&theme, "Stake", &form.stake)?;
                println!();
                print_expected_value(&form.compute());
            }
            CalculatorKind::ImpliedProbability => {
                desk.implied.odds = prompt_text(&theme, "American odds", &desk.implied.odds)?;
                println!();
                print_implied(desk.implied.compute());
            }
            CalculatorKind::Kelly => {
                let form = &mut desk.kelly;
                form.odds = prompt_text(&theme, "American odds", &form.odds)?;
                form.probability = prompt_text(&theme, "Win probability (%)", &form.probability)?;
                form.bankroll = prompt_text(&theme, "Bankroll", &form.bankroll)?;
                let fractions = ["Full Kelly", "Half Kelly", "Quarter Kelly"];
                let choice = Select::with_theme(&theme)
                    .with_prompt("Kelly fraction")
                    .items(&fractions)
                    .default(0)
                    .interact()?;
                form.multiplier = [1.0, 0.5, 0.25][choice];
                println!();
                print_kelly(&form.compute(), form.multiplier);
            }
            CalculatorKind::Spread => {
                let form = &mut desk.spread;
                form.spread = prompt_text(&theme, "Spread line (e.g. -3.5)", &form.spread)?;
                form.team_score = prompt_text(&theme, "Team score", &form.team_score)?;
                form.opponent_score =
                    prompt_text(&theme, "Opponent score", &form.opponent_score)?;
                form.odds = prompt_text(&theme, "American odds", &form.odds)?;
                form.stake = prompt_text(&theme, "Stake", &form.stake)?;
                println!();
                print_spread(form.evaluate().as_ref());
            }
        }
        println!();
    }

    Ok(())
}
