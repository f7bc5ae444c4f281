use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

use huebox_engine::{DEFAULT_SEED_COUNT, PaletteSession, harmonious_color, random_palette, select_scheme};
use huebox_types::{ColorScheme, HexColor, Palette};
use huebox_util::{entry_line, info_lines};

#[derive(Parser)]
#[command(name = "huebox", version, about = "Color palette generator with locks, harmonization and undo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a palette and print it
    Generate {
        /// Number of colors (2-8)
        #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Harmonize the palette around this base color
        #[arg(long)]
        base: Option<HexColor>,
        /// Scheme to harmonize with (defaults to a weighted random pick per color)
        #[arg(long, requires = "base")]
        scheme: Option<ColorScheme>,
        /// Print the palette as a JSON hex list
        #[arg(long)]
        json: bool,
    },
    /// Show name, RGB, HSL and lightness for one color
    Info {
        /// Color to inspect, e.g. '#1E90FF'
        color: HexColor,
    },
    /// Interactive editing session with locks and undo/redo
    Session {
        /// Number of colors to start with (2-8)
        #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
        count: usize,
        /// Seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            count,
            seed,
            base,
            scheme,
            json,
        } => run_generate(count, seed, base, scheme, json),
        Command::Info { color } => {
            for line in info_lines(color) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Session { count, seed } => run_session(count, seed),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .try_init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn run_generate(
    count: usize,
    seed: Option<u64>,
    base: Option<HexColor>,
    scheme: Option<ColorScheme>,
    json: bool,
) -> Result<()> {
    let mut rng = make_rng(seed);

    let palette = match base {
        Some(base) => {
            let mut values = vec![base];
            for _ in 1..count {
                let scheme = scheme.unwrap_or_else(|| select_scheme(&mut rng));
                values.push(harmonious_color(&mut rng, base, scheme));
            }
            Palette::from_values(values).context("building harmonized palette")?
        }
        None => random_palette(&mut rng, count).context("seeding random palette")?,
    };

    print_palette(&palette, json)
}

fn print_palette(palette: &Palette, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&palette.to_hex_list())?);
        return Ok(());
    }
    for (index, entry) in palette.entries().iter().enumerate() {
        println!("{}", entry_line(index, entry));
    }
    Ok(())
}

fn run_session(count: usize, seed: Option<u64>) -> Result<()> {
    let mut session =
        PaletteSession::with_rng(count, make_rng(seed)).context("starting palette session")?;

    println!("huebox session — enter '?' for commands, 'q' to quit");
    print_session(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .context("reading session command")?;
        if bytes_read == 0 {
            break; // EOF
        }

        match apply_command(&mut session, line.trim()) {
            Outcome::Quit => break,
            Outcome::Help => print_help(),
            Outcome::Applied(notice) => {
                if let Some(notice) = notice {
                    println!("{notice}");
                }
                print_session(&session);
            }
            Outcome::Rejected(notice) => println!("{notice}"),
        }
    }
    Ok(())
}

enum Outcome {
    Quit,
    Help,
    /// The palette (or cursor) changed; redraw.
    Applied(Option<String>),
    /// Boundary condition or bad input; state untouched.
    Rejected(String),
}

fn apply_command(session: &mut PaletteSession, input: &str) -> Outcome {
    let mut parts = input.split_whitespace();
    let verb = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    match verb {
        "" | "g" => {
            session.generate();
            Outcome::Applied(None)
        }
        "a" => match session.add_color() {
            Ok(()) => Outcome::Applied(Some("New color added!".into())),
            Err(error) => Outcome::Rejected(error.to_string()),
        },
        "d" => match session.remove_color(None) {
            Ok(()) => Outcome::Applied(Some("Color removed!".into())),
            Err(error) => Outcome::Rejected(error.to_string()),
        },
        "l" | "u" => {
            let locked = verb == "l";
            match parse_index(args.first()) {
                Ok(index) => match session.set_lock(index, locked) {
                    Ok(()) => Outcome::Applied(Some(
                        if locked { "Color locked!" } else { "Color unlocked!" }.into(),
                    )),
                    Err(error) => Outcome::Rejected(error.to_string()),
                },
                Err(notice) => Outcome::Rejected(notice),
            }
        }
        "s" => {
            let index = match parse_index(args.first()) {
                Ok(index) => index,
                Err(notice) => return Outcome::Rejected(notice),
            };
            let value = match args.get(1).map(|raw| raw.parse::<HexColor>()) {
                Some(Ok(value)) => value,
                Some(Err(error)) => return Outcome::Rejected(error.to_string()),
                None => return Outcome::Rejected("usage: s <index> <hex>".into()),
            };
            match session.set_color(index, value) {
                Ok(()) => Outcome::Applied(None),
                Err(error) => Outcome::Rejected(error.to_string()),
            }
        }
        "m" => {
            let (source, destination) =
                match (parse_index(args.first()), parse_index(args.get(1))) {
                    (Ok(source), Ok(destination)) => (source, destination),
                    _ => return Outcome::Rejected("usage: m <from> <to>".into()),
                };
            match session.reorder(source, destination) {
                Ok(()) => Outcome::Applied(None),
                Err(error) => Outcome::Rejected(error.to_string()),
            }
        }
        "p" => {
            let parsed: Result<Vec<HexColor>, _> =
                args.iter().map(|raw| raw.parse::<HexColor>()).collect();
            match parsed {
                Ok(values) => match session.replace_all(values) {
                    Ok(()) => Outcome::Applied(Some("Palette loaded!".into())),
                    Err(error) => Outcome::Rejected(error.to_string()),
                },
                Err(error) => Outcome::Rejected(error.to_string()),
            }
        }
        "z" => {
            if session.undo() {
                Outcome::Applied(Some("Changes reverted!".into()))
            } else {
                Outcome::Rejected("Nothing to undo".into())
            }
        }
        "y" => {
            if session.redo() {
                Outcome::Applied(Some("Changes reapplied!".into()))
            } else {
                Outcome::Rejected("Nothing to redo".into())
            }
        }
        "?" | "h" => Outcome::Help,
        "q" => Outcome::Quit,
        other => Outcome::Rejected(format!("unknown command {other:?}, '?' for help")),
    }
}

fn parse_index(raw: Option<&&str>) -> std::result::Result<usize, String> {
    raw.ok_or_else(|| "missing color index".to_string())?
        .parse::<usize>()
        .map_err(|_| "color index must be a number".to_string())
}

fn print_session(session: &PaletteSession) {
    for (index, entry) in session.current().entries().iter().enumerate() {
        println!("{}", entry_line(index, entry));
    }
    let mut hints = Vec::new();
    if session.can_undo() {
        hints.push("z = undo");
    }
    if session.can_redo() {
        hints.push("y = redo");
    }
    if !hints.is_empty() {
        println!("({})", hints.join(", "));
    }
}

fn print_help() {
    println!(
        "commands:\n  \
         g (or empty)     regenerate unlocked colors\n  \
         a                add a random color\n  \
         d                remove the last color\n  \
         l <i> / u <i>    lock / unlock the color at index i\n  \
         s <i> <hex>      set the color at index i\n  \
         m <from> <to>    move a color\n  \
         p <hex> ...      replace the whole palette\n  \
         z / y            undo / redo\n  \
         q                quit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> PaletteSession {
        PaletteSession::with_rng(5, StdRng::seed_from_u64(seed)).expect("valid session")
    }

    #[test]
    fn generate_command_records_history() {
        let mut session = session(1);
        assert!(matches!(
            apply_command(&mut session, "g"),
            Outcome::Applied(None)
        ));
        assert!(session.can_undo());
    }

    #[test]
    fn lock_then_unlock_round_trips() {
        let mut session = session(2);
        assert!(matches!(
            apply_command(&mut session, "l 0"),
            Outcome::Applied(Some(_))
        ));
        assert!(session.current().get(0).unwrap().locked);

        assert!(matches!(
            apply_command(&mut session, "u 0"),
            Outcome::Applied(Some(_))
        ));
        assert!(!session.current().get(0).unwrap().locked);
    }

    #[test]
    fn bad_input_is_rejected_without_state_change() {
        let mut session = session(3);
        let before = session.current().clone();

        for input in ["l", "l x", "s 0", "s 0 zzz", "m 1", "nope"] {
            assert!(matches!(
                apply_command(&mut session, input),
                Outcome::Rejected(_)
            ));
        }
        assert_eq!(session.current(), &before);
        assert!(!session.can_undo());
    }

    #[test]
    fn undo_at_start_is_a_boundary_notice() {
        let mut session = session(4);
        assert!(matches!(
            apply_command(&mut session, "z"),
            Outcome::Rejected(_)
        ));
    }

    #[test]
    fn replace_command_loads_a_hex_list() {
        let mut session = session(5);
        assert!(matches!(
            apply_command(&mut session, "p #FF0000 #00FF00 #0000FF"),
            Outcome::Applied(Some(_))
        ));
        assert_eq!(
            session.current().to_hex_list(),
            vec!["#FF0000", "#00FF00", "#0000FF"]
        );
    }
}
