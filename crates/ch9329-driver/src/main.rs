//! `ch9329` – send keyboard, mouse, and media-key input through a CH9329.
//!
//! # Usage
//!
//! ```text
//! ch9329 [OPTIONS] <COMMAND>
//!
//! Commands:
//!   key      Press keys (and modifiers), hold, release
//!   mouse    Send one relative mouse report, hold, release
//!   media    Press media keys, hold, release
//!   release  Send the released state for keyboard, mouse and media keys
//!   keys     List every supported identifier name
//!
//! Options:
//!   --port <PATH>        Serial device [env: CH9329_PORT]
//!   --baud <RATE>        Baud rate stored on the chip [env: CH9329_BAUD]
//!   --config <FILE>      Config file instead of the platform default
//!   --log-level <LEVEL>  Default log level when RUST_LOG is unset
//!   --dry-run            Print frames as hex instead of opening the port
//! ```
//!
//! Identifiers are evdev names such as `KEY_A`, `KEY_LEFTCTRL`, `BTN_LEFT`
//! or `KEY_MUTE`. The prefix may be omitted (`a`, `leftctrl`, `left`,
//! `mute`), and a raw evdev code (`30`) is accepted when it is not also a
//! key name.
//!
//! # Precedence
//!
//! CLI flag > environment variable > config file > built-in default.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use ch9329_core::{
    hex_string, EvdevIdentifier, KeyCode, KeyboardInput, MediaKey, MediaKeyInput, ModifierKey,
    MouseButton, MouseInput,
};
use ch9329_driver::infrastructure::storage::config::{self, ConfigError, DriverConfig};
use ch9329_driver::{ByteTransport, Ch9329Driver, MockTransport, SerialTransport};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Drive a CH9329 serial-to-USB-HID bridge.
#[derive(Debug, Parser)]
#[command(name = "ch9329", version, about)]
struct Cli {
    /// Serial device the chip is attached to.
    #[arg(long, env = "CH9329_PORT", global = true)]
    port: Option<String>,

    /// Baud rate configured on the chip (factory default 9600).
    #[arg(long, env = "CH9329_BAUD", global = true)]
    baud: Option<u32>,

    /// Config file to read instead of the platform default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is unset.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print every frame as hex instead of writing it to the serial port.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Press keys and modifiers, hold, then release everything.
    Key {
        /// Keys to press (at most six), e.g. `KEY_A` or `a`.
        names: Vec<String>,

        /// Modifiers to hold, e.g. `KEY_LEFTSHIFT` or `leftshift`.
        #[arg(long = "modifier", short = 'm')]
        modifiers: Vec<String>,

        /// Milliseconds between press and release.
        #[arg(long, default_value_t = 50)]
        hold_ms: u64,
    },

    /// Send one relative mouse report, hold, then release.
    Mouse {
        /// Buttons to hold, e.g. `BTN_LEFT` or `left`.
        #[arg(long = "button", short = 'b')]
        buttons: Vec<String>,

        /// Horizontal movement, -128..=127 (positive is right).
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        x: i32,

        /// Vertical movement, -128..=127 (positive is down).
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        y: i32,

        /// Wheel movement, -128..=127 (positive is up).
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        scroll: i32,

        #[arg(long, default_value_t = 50)]
        hold_ms: u64,
    },

    /// Press media keys, hold, then send the explicit release.
    Media {
        /// Media keys, e.g. `KEY_MUTE` or `volumeup`.
        #[arg(required = true)]
        names: Vec<String>,

        #[arg(long, default_value_t = 50)]
        hold_ms: u64,
    },

    /// Send the released state for keyboard, mouse, and media keys.
    Release,

    /// List every supported identifier with its evdev code.
    Keys,
}

/// What the CLI resolved to send, already validated.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Keyboard(KeyboardInput, Duration),
    Mouse(MouseInput, Duration),
    Media(MediaKeyInput, Duration),
    Release,
}

impl Cli {
    /// Merges CLI overrides into the file config.
    fn apply_overrides(&self, mut config: DriverConfig) -> DriverConfig {
        if let Some(port) = &self.port {
            config.serial.port = port.clone();
        }
        if let Some(baud) = self.baud {
            config.serial.baud_rate = baud;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config
    }

    /// Reads the config file named by `--config`, or the platform default.
    ///
    /// Only the platform default may be absent.
    fn load_config(&self) -> anyhow::Result<DriverConfig> {
        let loaded = match &self.config {
            Some(path) => config::load_required(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => match config::load_config() {
                Err(ConfigError::NoPlatformConfigDir) => Ok(DriverConfig::default()),
                other => other.context("failed to load config"),
            },
        }?;
        Ok(self.apply_overrides(loaded))
    }
}

impl Command {
    /// Parses names into models; `None` for commands that send nothing.
    fn to_action(&self) -> anyhow::Result<Option<Action>> {
        let action = match self {
            Command::Key {
                names,
                modifiers,
                hold_ms,
            } => {
                if names.is_empty() && modifiers.is_empty() {
                    bail!("nothing to press: give at least one key or --modifier");
                }
                let keys = parse_all::<KeyCode>(names, "KEY_")?;
                let modifiers = parse_all::<ModifierKey>(modifiers, "KEY_")?;
                let input = KeyboardInput::new(keys, modifiers)?;
                Action::Keyboard(input, Duration::from_millis(*hold_ms))
            }
            Command::Mouse {
                buttons,
                x,
                y,
                scroll,
                hold_ms,
            } => {
                let buttons = parse_all::<MouseButton>(buttons, "BTN_")?;
                let input = MouseInput::new(buttons, *x, *y, *scroll)?;
                Action::Mouse(input, Duration::from_millis(*hold_ms))
            }
            Command::Media { names, hold_ms } => {
                let keys = parse_all::<MediaKey>(names, "KEY_")?;
                Action::Media(MediaKeyInput::new(keys), Duration::from_millis(*hold_ms))
            }
            Command::Release => Action::Release,
            Command::Keys => return Ok(None),
        };
        Ok(Some(action))
    }
}

// ── Identifier parsing ────────────────────────────────────────────────────────

/// Resolves an evdev name (with or without `prefix`) or a raw evdev code.
///
/// Names win over codes, so `1` is `KEY_1` rather than evdev code 1.
fn parse_identifier<T: EvdevIdentifier>(text: &str, prefix: &str) -> anyhow::Result<T> {
    if let Some(id) = T::from_name(text).or_else(|| T::from_name(&format!("{prefix}{text}"))) {
        return Ok(id);
    }
    match text.parse::<u16>() {
        Ok(code) => Ok(T::from_evdev(code)?),
        Err(_) => bail!("unknown identifier '{text}' (run `ch9329 keys` for the list)"),
    }
}

fn parse_all<T: EvdevIdentifier>(names: &[String], prefix: &str) -> anyhow::Result<Vec<T>> {
    names.iter().map(|n| parse_identifier(n, prefix)).collect()
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn print_table<T: EvdevIdentifier>(title: &str) {
    println!("{title}:");
    for id in T::ALL {
        println!("  {:<20} {}", id.name(), id.evdev_code());
    }
}

fn list_identifiers() {
    print_table::<KeyCode>("Keys");
    print_table::<ModifierKey>("Modifiers");
    print_table::<MouseButton>("Mouse buttons");
    print_table::<MediaKey>("Media keys");
}

/// Sends `action`. Every press is followed by its release, even when the
/// press itself failed.
fn perform<T: ByteTransport>(
    driver: &mut Ch9329Driver<T>,
    action: &Action,
    hold_scale: u32,
) -> anyhow::Result<()> {
    let (pressed, released) = match action {
        Action::Keyboard(input, hold) => {
            let pressed = driver.send_keyboard_input(input);
            thread::sleep(*hold * hold_scale);
            (pressed, driver.send_keyboard_input(&KeyboardInput::default()))
        }
        Action::Mouse(input, hold) => {
            let pressed = driver.send_mouse_input(input);
            thread::sleep(*hold * hold_scale);
            (pressed, driver.send_mouse_input(&MouseInput::default()))
        }
        Action::Media(input, hold) => {
            let pressed = driver.send_media_key_input(input);
            thread::sleep(*hold * hold_scale);
            (pressed, driver.send_media_key_input(&MediaKeyInput::default()))
        }
        Action::Release => (driver.release_all(), Ok(())),
    };
    pressed.context("failed to send input")?;
    released.context("failed to send release")?;
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Logs go to stderr so `--dry-run` output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(action) = cli.command.to_action()? else {
        list_identifiers();
        return Ok(());
    };

    let recorder = cli.dry_run.then(MockTransport::new);
    let transport: Box<dyn ByteTransport> = match &recorder {
        Some(mock) => Box::new(mock.clone()),
        None => Box::new(SerialTransport::new(config.serial.clone())),
    };
    info!(
        port = %config.serial.port,
        baud = config.serial.baud_rate,
        dry_run = cli.dry_run,
        "starting"
    );

    let mut driver = Ch9329Driver::new(transport)
        .with_context(|| format!("failed to open {}", config.serial.port))?;
    // No point holding a key on a recorder.
    let hold_scale = u32::from(recorder.is_none());
    perform(&mut driver, &action, hold_scale)?;
    driver.close().context("failed to close transport")?;

    if let Some(mock) = recorder {
        for frame in mock.frames() {
            println!("{}", hex_string(&frame));
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
