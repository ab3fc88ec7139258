//! REPL Module
//!
//! Line-oriented command loop: read a line, tokenize it, dispatch to a
//! handler. Handlers talk to the network only through [`PokeApiClient`].

pub mod commands;

use std::io::Write;
use std::ops::ControlFlow;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::CommandError;
use crate::models::Pokemon;
use crate::pokeapi::{Fetch, HttpFetcher, PokeApiClient};
use crate::session::Session;

pub use commands::{clean_input, find_command, Command, CommandKind, COMMANDS};

/// Prompt printed before every line of input.
pub const PROMPT: &str = "pokedex > ";

/// Base experience at which a catch succeeds half the time.
pub const CATCH_THRESHOLD: f64 = 50.0;

/// Probability in `[0, 1]` of catching `pokemon`.
///
/// Stronger Pokemon (higher base experience) are harder to catch.
pub fn catch_chance(pokemon: &Pokemon) -> f64 {
    let experience = f64::from(pokemon.base_experience.unwrap_or(0));
    CATCH_THRESHOLD / (experience + CATCH_THRESHOLD)
}

type Roll = Box<dyn FnMut() -> f64 + Send>;

/// The interactive command loop and its session.
pub struct Repl<F = HttpFetcher> {
    client: PokeApiClient<F>,
    session: Session,
    /// Uniform sample in `[0, 1)` used for catch attempts
    roll: Roll,
}

impl<F: Fetch> Repl<F> {
    /// Creates a REPL that rolls catches with the thread-local RNG.
    pub fn new(client: PokeApiClient<F>) -> Self {
        Self::with_roll(client, || rand::thread_rng().gen::<f64>())
    }

    /// Creates a REPL with a custom catch roll.
    pub fn with_roll(
        client: PokeApiClient<F>,
        roll: impl FnMut() -> f64 + Send + 'static,
    ) -> Self {
        Self {
            client,
            session: Session::new(),
            roll: Box::new(roll),
        }
    }

    /// Returns the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Run ==
    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Command failures are printed and the loop continues; only I/O errors
    /// on `input` or `out` end it early. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut line = Vec::new();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line).await? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            let words = clean_input(&String::from_utf8_lossy(&line));
            let Some((name, args)) = words.split_first() else {
                continue;
            };

            let Some(command) = find_command(name) else {
                writeln!(out, "Unknown command '{}'", name)?;
                continue;
            };

            debug!(command = command.name, ?args, "dispatch");
            match self.execute(command.kind, args, out).await {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => return Ok(()),
                Err(CommandError::Io(err)) => return Err(err),
                Err(err) => {
                    warn!(command = command.name, error = %err, "command failed");
                    writeln!(out, "Error: {}", err)?;
                }
            }
        }
    }

    // == Execute ==
    /// Runs a single command.
    pub async fn execute<W: Write>(
        &mut self,
        kind: CommandKind,
        args: &[String],
        out: &mut W,
    ) -> Result<ControlFlow<()>, CommandError> {
        match kind {
            CommandKind::Help => self.help(out)?,
            CommandKind::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(ControlFlow::Break(()));
            }
            CommandKind::Map => self.map(out).await?,
            CommandKind::MapBack => self.map_back(out).await?,
            CommandKind::Explore => {
                let area = first_arg(args, "explore", "explore canalave-city-area")?;
                self.explore(area, out).await?;
            }
            CommandKind::Catch => {
                let name = first_arg(args, "catch", "catch pikachu")?;
                self.catch(name, out).await?;
            }
            CommandKind::Inspect => {
                let name = first_arg(args, "inspect", "inspect pikachu")?;
                self.inspect(name, out)?;
            }
            CommandKind::Pokedex => self.pokedex(out)?,
            CommandKind::CacheInfo => self.cache_info(out).await?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in COMMANDS {
            writeln!(out, "{}: {}", command.name, command.description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        let url = self
            .session
            .next_page_url(|| self.client.first_location_page_url())?;
        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        let url = self.session.previous_page_url()?;
        self.show_page(&url, out).await
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<(), CommandError> {
        let page = self.client.location_page(url).await?;
        self.session.apply_page(&page);
        for area in self.session.areas() {
            writeln!(out, "{}", area)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<(), CommandError> {
        let names = self.client.explore_area(area).await?;
        writeln!(out, "Exploring {}...", area)?;
        if names.is_empty() {
            writeln!(out, "No Pokemon found!")?;
            return Ok(());
        }
        writeln!(out, "Found Pokemon:")?;
        for name in names {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<(), CommandError> {
        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        if (self.roll)() < catch_chance(&pokemon) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.session.catch(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<(), CommandError> {
        let pokemon = self
            .session
            .caught(name)
            .ok_or_else(|| CommandError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn pokedex<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        writeln!(out, "Your Pokedex:")?;
        let names = self.session.caught_names();
        if names.is_empty() {
            writeln!(out, " Nothing yet!")?;
        }
        for name in names {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn cache_info<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let cache = self.client.cache();
        writeln!(
            out,
            "{} cached responses, ttl {}s",
            cache.len().await,
            cache.ttl().as_secs()
        )?;
        Ok(())
    }
}

fn first_arg<'a>(
    args: &'a [String],
    command: &'static str,
    usage: &'static str,
) -> Result<&'a str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument { command, usage })
}
