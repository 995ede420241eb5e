use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use connect_four::{
    board::{Board, Cell},
    prompt::{ask_name, ask_new_player, ask_play_again},
    render,
    source::{BotMoveSource, HumanMoveSource},
    stats::{StatsError, StatsFile},
    turn::{GameResult, TurnController, TurnState},
};

/// Play Connect 4 against the computer
#[derive(Parser, Debug)]
#[command(name = "connect_four", version)]
struct Cli {
    /// Directory holding the `<name>.txt` player stats files
    #[arg(long, default_value = ".")]
    stats_dir: PathBuf,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 1000)]
    bot_delay_ms: u64,

    /// Seed for the computer's moves, for repeatable games
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the board and log lines without colours
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stay quiet during play unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let stdin = stdin();
    let mut input = stdin.lock();
    let mut output = stdout();

    println!("Welcome to Connect 4\n");

    let profile = open_profile(&mut input, &mut output, &cli.stats_dir)?;
    println!("{}", profile.load()?);

    println!("Your chip is: {}.", render::chip_char(Cell::PlayerA));
    println!("The computer's chip is: {}.", render::chip_char(Cell::PlayerB));
    println!();

    let bot = match cli.seed {
        Some(seed) => BotMoveSource::seeded(seed),
        None => BotMoveSource::new(),
    };
    let mut bot = bot.with_delay(Duration::from_millis(cli.bot_delay_ms));

    loop {
        // every game gets a fresh board
        let mut controller = TurnController::new();
        draw(controller.board(), cli.no_color)?;

        let result = {
            let mut human = HumanMoveSource::new(profile.name(), &mut input, stdout());
            loop {
                if controller.state() == TurnState::AwaitingPlayerB {
                    println!("\n\nNow it's the computer's turn!");
                }
                let state = controller.step(&mut human, &mut bot)?;
                draw(controller.board(), cli.no_color)?;

                if let Some(result) = state.result() {
                    break result;
                }
            }
        };

        println!();
        match result {
            GameResult::PlayerAWin => println!("Yay, you won! GG."),
            GameResult::PlayerBWin => println!("Aww. The bot won! Better luck next time!"),
            GameResult::Tie => println!("Woah, a tie happened!"),
        }

        match profile.record(result) {
            Ok(stats) => println!("{}", stats),
            Err(err) => {
                warn!(error = %err, "failed to record game result");
                println!("Uh oh! {}", err);
            }
        }

        println!("Do you want to play again?");
        let again = ask_play_again(&mut input, &mut output)?;
        if again {
            println!("Okay! A new game will start right now.");
        } else {
            println!("Aww, well have a good day!");
        }
        println!();
        println!("------------------------------------------");

        if !again {
            break;
        }
    }
    Ok(())
}

fn draw(board: &Board, no_color: bool) -> Result<()> {
    if no_color {
        print!("{}", render::ascii(board));
        stdout().flush()?;
        Ok(())
    } else {
        render::display(board, &mut stdout())
    }
}

// keep asking until a new profile is created or a returning one is found
fn open_profile<R: BufRead, W: Write>(input: &mut R, output: &mut W, dir: &Path) -> Result<StatsFile> {
    loop {
        writeln!(output, "Are you a new or returning player?")?;
        let new_player = ask_new_player(input, output)?;
        if new_player {
            writeln!(output, "Okay! A new file will be opened for you.")?;
        }

        let name = ask_name(input, output)?;
        let opened = if new_player {
            StatsFile::create(dir, &name)
        } else {
            StatsFile::open(dir, &name)
        };

        match opened {
            Ok(profile) => {
                info!(name = %name, new_player, "profile opened");
                writeln!(output, "Okay, your file has been opened!\n")?;
                return Ok(profile);
            }
            Err(err @ StatsError::NotFound { .. }) | Err(err @ StatsError::Io { .. }) => {
                warn!(error = %err, "could not open profile");
                writeln!(output, "Uh oh! Your file can't be found!")?;
                writeln!(output, "Let's try again, shall we?\n")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
