// Plays a blink pattern on the keyboard LEDs until Ctrl-C is pressed, then puts the LEDs
// back the way they were.
//
// Opening a console generally requires root:
//
//     sudo cargo run --example blink -- --device /dev/tty8 converge --step 0.2

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use blinkenlights::{parse_delay, BlinkenLights, Config, LedBackend};
use clap::{Parser, ValueEnum};

static RUNNING: AtomicBool = AtomicBool::new(true);

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Pattern {
    Circle,
    ReverseCircle,
    LeftToRight,
    RightToLeft,
    Converge,
    Diverge,
    Flash,
    Random,
}

#[derive(Parser)]
#[command(name = "blink", about = "Blink the keyboard LEDs")]
struct Args {
    /// Pattern to play
    #[arg(value_enum, default_value_t = Pattern::Circle)]
    pattern: Pattern,

    /// Console device (defaults to $BLINKENLIGHTS_TTY, then /dev/tty7)
    #[arg(long)]
    device: Option<PathBuf>,

    /// Seconds slept after every LED change
    #[arg(long, value_parser = parse_delay)]
    delay: Option<Duration>,

    /// Seconds slept between the steps of a pattern
    #[arg(long, value_parser = parse_delay, default_value = "0.1")]
    step: Duration,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u32>,
}

fn play<B: LedBackend>(
    lights: &mut BlinkenLights<B>,
    pattern: Pattern,
    step: Duration,
) -> blinkenlights::Result<()> {
    match pattern {
        Pattern::Circle => lights.circle(step),
        Pattern::ReverseCircle => lights.reverse_circle(step),
        Pattern::LeftToRight => lights.left_to_right(step),
        Pattern::RightToLeft => lights.right_to_left(step),
        Pattern::Converge => lights.converge(step),
        Pattern::Diverge => lights.diverge(step),
        Pattern::Flash => {
            lights.flash(step)?;
            std::thread::sleep(step);
            Ok(())
        }
        Pattern::Random => lights.random(step).map(|_| ()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(device) = args.device {
        config.device = device;
    }
    if let Some(delay) = args.delay {
        config.delay = delay;
    }

    ctrlc::set_handler(|| RUNNING.store(false, Ordering::SeqCst))?;

    BlinkenLights::scoped(&config, |lights| {
        println!("{}", lights);
        let mut round = 0;
        while RUNNING.load(Ordering::SeqCst) && args.rounds.map_or(true, |max| round < max) {
            play(lights, args.pattern, args.step)?;
            round += 1;
        }
        Ok(())
    })?;

    Ok(())
}
