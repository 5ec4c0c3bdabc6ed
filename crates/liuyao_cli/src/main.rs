use clap::{Parser, Subcommand};
use liuyao_base::{
    CoinConvention, CoinOutcome, DayPillar, EarthlyBranch, Hexagram, Line, LiuyaoError, Palace,
    Reading, ReadingConfig, Trigram, auxiliary_stars, cast_reading, coins_from_counts,
    palace_family, resolve_palace,
};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "liuyao", about = "Liuyao six-line divination CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a reading
    Cast {
        /// Day pillar, e.g. 甲子 or jia-zi
        #[arg(long)]
        day: String,
        /// Six coin counts (0-3), bottom line first, e.g. 1,1,1,2,2,2.
        /// Tossed at random when omitted.
        #[arg(long)]
        coins: Option<String>,
        /// Coin convention: old-yang-at-zero (default) or old-yin-at-zero
        #[arg(long, default_value = "old-yang-at-zero")]
        convention: String,
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
    /// Name, King Wen number and palace of a hexagram
    Hexagram {
        /// Lower (inner) trigram: 乾, qian, heaven or ☰
        #[arg(long)]
        lower: String,
        /// Upper (outer) trigram
        #[arg(long)]
        upper: String,
    },
    /// List the eight hexagrams of a palace
    Palace {
        /// Palace trigram
        trigram: String,
    },
    /// Void (kongwang) branches of a day
    Void {
        /// Day pillar
        #[arg(long)]
        day: String,
    },
    /// Auxiliary stars of a day
    Stars {
        /// Day pillar
        #[arg(long)]
        day: String,
    },
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Cast {
            day,
            coins,
            convention,
            json,
        } => {
            let day = require_day(&day);
            let coins = match coins {
                Some(s) => require(parse_coins(&s), "Invalid coins"),
                None => {
                    let tossed = toss_coins();
                    debug!(coins = ?tossed.map(|c| c.count()), "coins tossed");
                    tossed
                }
            };
            let config =
                ReadingConfig::default().with_coin_convention(parse_convention(&convention));
            debug!(day = %day, ?config, "casting");

            let reading = cast_reading(coins, day, &config);
            if json {
                match serde_json::to_string_pretty(&reading) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        warn!(error = %e, "reading serialization failed");
                        eprintln!("Failed to serialize reading: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_reading(&reading);
            }
        }

        Commands::Hexagram { lower, upper } => {
            let h = Hexagram::new(require_trigram(&lower), require_trigram(&upper));
            let p = resolve_palace(h);
            println!("{} ({}) - King Wen {}", h.name(), h.english_name(), h.king_wen());
            println!("Palace: {} ({}), {}", p.palace.name(), p.palace.element(), p.palace_type);
            println!("World: line {}  Response: line {}", p.world_line, p.response_line);
        }

        Commands::Palace { trigram } => {
            let palace = Palace::from_trigram(require_trigram(&trigram));
            println!("{} ({}, {})", palace.name(), palace.english_name(), palace.element());
            for (h, ty) in palace_family(palace) {
                println!(
                    "  {:<8} {:<6} world {}  #{:>2} {}",
                    ty.name(),
                    h.name(),
                    ty.world_line(),
                    h.king_wen(),
                    h.english_name()
                );
            }
        }

        Commands::Void { day } => {
            let day = require_day(&day);
            let [a, b] = day.void_branches();
            println!("{day}: void {a}{b}");
        }

        Commands::Stars { day } => {
            let day = require_day(&day);
            for star in auxiliary_stars(&day) {
                println!(
                    "{} ({}): {}",
                    star.kind.name(),
                    star.kind.english_name(),
                    branch_list(&star.branches)
                );
            }
        }
    }
}

fn print_reading(r: &Reading) {
    println!("Day: {}  Void: {}", r.day, branch_list(&r.void_branches));
    println!(
        "{} ({}) - {} {}",
        r.hexagram.name(),
        r.hexagram.english_name(),
        r.palace.name(),
        r.palace_type
    );
    if let Some(t) = &r.transformed {
        println!(
            "Changes to: {} ({}) - {}",
            t.hexagram.name(),
            t.hexagram.english_name(),
            t.palace.name()
        );
    }
    println!();
    for line in r.lines.iter().rev() {
        println!("{}", format_line(line));
    }
    if !r.stars.is_empty() {
        println!();
        for star in &r.stars {
            println!("{}: {}", star.kind.name(), branch_list(&star.branches));
        }
    }
}

fn format_line(line: &Line) -> String {
    let bar = if line.is_yang { "━━━━━━" } else { "━━  ━━" };
    let mark = line.kind.moving_mark().unwrap_or(' ');
    let role = if line.is_world {
        "世"
    } else if line.is_response {
        "應"
    } else {
        "  "
    };
    let void = if line.is_void { "空" } else { "  " };
    let mut out = format!(
        "{} {} {} {}{}{} {} {}",
        line.spirit,
        bar,
        mark,
        line.relative,
        line.branch,
        line.element,
        role,
        void
    );
    if let Some(v) = &line.variant {
        out.push_str(&format!(" → {}{}{}", v.relative, v.branch, v.element));
    }
    if let Some(h) = &line.hidden_spirit {
        out.push_str(&format!("  伏 {}{}{}", h.relative, h.branch, h.element));
    }
    out.trim_end().to_string()
}

fn branch_list(branches: &[EarthlyBranch]) -> String {
    branches.iter().map(|b| b.name()).collect::<Vec<_>>().join("")
}

/// Toss three virtual coins per line.
fn toss_coins() -> [CoinOutcome; 6] {
    std::array::from_fn(|_| {
        CoinOutcome::from_faces([rand::random(), rand::random(), rand::random()])
    })
}

fn parse_coins(s: &str) -> Result<[CoinOutcome; 6], String> {
    let counts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u8>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<u8>, String>>()?;
    coins_from_counts(&counts).map_err(|e| e.to_string())
}

fn parse_convention(s: &str) -> CoinConvention {
    match s.to_lowercase().as_str() {
        "old-yang-at-zero" | "yang" => CoinConvention::OldYangAtZero,
        "old-yin-at-zero" | "yin" => CoinConvention::OldYinAtZero,
        _ => {
            eprintln!("Invalid coin convention: {s}");
            eprintln!("Valid: old-yang-at-zero (default), old-yin-at-zero");
            std::process::exit(1);
        }
    }
}

fn require<T>(result: Result<T, String>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

fn require_day(s: &str) -> DayPillar {
    s.parse().unwrap_or_else(|e: LiuyaoError| {
        eprintln!("Invalid day pillar: {e}");
        std::process::exit(1);
    })
}

fn require_trigram(s: &str) -> Trigram {
    s.parse().unwrap_or_else(|e: LiuyaoError| {
        eprintln!("Invalid trigram: {e}");
        eprintln!("Valid: 乾 兌 離 震 巽 坎 艮 坤, their pinyin, English image or symbol");
        std::process::exit(1);
    })
}
