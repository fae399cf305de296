use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{debug, error};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::{Captures, Regex};

use battleships::{
    board::PlaceError,
    game::{DEFAULT_MAXIMUM, DEFAULT_SHIPS_PER_PERSON, DEFAULT_SHIP_LENGTH},
    Coordinate, Game, GameConfig, Orientation, Registry, RegistryError,
};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let default_maximum = DEFAULT_MAXIMUM.to_string();
    let default_ships = DEFAULT_SHIPS_PER_PERSON.to_string();
    let matches = App::new("Battleships")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Turn-based multiplayer battleships on a shared grid.")
        .arg(
            Arg::with_name("width")
                .short("x")
                .long("width")
                .value_name("WIDTH")
                .help("largest x coordinate of new games")
                .takes_value(true)
                .default_value(&default_maximum),
        )
        .arg(
            Arg::with_name("height")
                .short("y")
                .long("height")
                .value_name("HEIGHT")
                .help("largest y coordinate of new games")
                .takes_value(true)
                .default_value(&default_maximum),
        )
        .arg(
            Arg::with_name("ships")
                .short("s")
                .long("ships")
                .value_name("SHIPS")
                .help("ships generated for each player when a game starts")
                .takes_value(true)
                .default_value(&default_ships),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed every new game from this value, for reproducible sessions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print game history as JSON"),
        )
        .get_matches();

    let mut settings = Settings::from_matches(&matches);
    let registry = Registry::new();

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());

    println!("Battleships. Type help or ? for commands.");
    while let Some(cmd) = input.read_input("> ", parse_command)? {
        if let Command::Quit = cmd {
            break;
        }
        debug!("running {:?}", cmd);
        if let Err(err) = run_command(&registry, &mut settings, cmd) {
            println!("error: {}", err);
        }
    }
    Ok(())
}

/// Defaults applied to games created from the command line.
struct Settings {
    maximum_x: usize,
    maximum_y: usize,
    ships_per_person: usize,
    /// Source of per-game seeds when the session was started with `--seed`.
    seeds: Option<StdRng>,
    json: bool,
}

impl Settings {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            maximum_x: value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit()),
            maximum_y: value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit()),
            ships_per_person: value_t!(matches, "ships", usize).unwrap_or_else(|e| e.exit()),
            seeds: if matches.is_present("seed") {
                let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
                Some(StdRng::seed_from_u64(seed))
            } else {
                None
            },
            json: matches.is_present("json"),
        }
    }

    /// Build the configuration of a new game, filling in anything not given.
    fn game_config(
        &mut self,
        name: String,
        bounds: Option<(usize, usize)>,
        ships: Option<usize>,
    ) -> GameConfig {
        let (maximum_x, maximum_y) = bounds.unwrap_or((self.maximum_x, self.maximum_y));
        let config = GameConfig::new(name)
            .with_bounds(maximum_x, maximum_y)
            .with_ships_per_person(ships.unwrap_or(self.ships_per_person));
        match self.seeds.as_mut() {
            Some(seeds) => config.with_seed(seeds.gen()),
            None => config,
        }
    }
}

#[derive(Debug)]
enum Command {
    NewPlayer(String),
    Players,
    NewGame {
        name: String,
        bounds: Option<(usize, usize)>,
        ships: Option<usize>,
    },
    Games,
    Join {
        game: String,
        player: String,
    },
    Start(String),
    Place {
        game: String,
        player: String,
        start: Coordinate,
        orientation: String,
        length: usize,
    },
    Strike {
        game: String,
        player: String,
        target: Coordinate,
    },
    Ships {
        game: String,
        player: Option<String>,
    },
    History(String),
    Winner(String),
    DropPlayer(String),
    DropGame(String),
    Help,
    Quit,
}

/// Matchers for commands with args.
static PLAYER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^player\s+(?P<name>\S+)$").unwrap());
static GAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)game\s+
        (?P<name>\S+)
        (?:\s+(?P<w>[0-9]+)\s*x\s*(?P<h>[0-9]+))?
        (?:\s+ships\s+(?P<ships>[0-9]+))?$",
    )
    .unwrap()
});
static JOIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^join\s+(?P<game>\S+)\s+(?P<player>\S+)$").unwrap());
static ON_GAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<cmd>start|history|winner)\s+(?P<game>\S+)$").unwrap()
});
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)place\s+
        (?P<game>\S+)\s+
        (?P<player>\S+)\s+
        (?:(?:at|on)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)\s+
        (?P<dir>[[:alpha:]]+)
        (?:\s+(?P<len>[1-9][0-9]*))?$",
    )
    .unwrap()
});
static STRIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:strike|fire|shoot)\s+
        (?P<game>\S+)\s+
        (?P<player>\S+)\s+
        (?:(?:at|on)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$",
    )
    .unwrap()
});
static SHIPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ships\s+(?P<game>\S+)(?:\s+(?P<player>\S+))?$").unwrap());
static DROP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:drop|delete)\s+(?P<kind>player|game)\s+(?P<name>\S+)$").unwrap()
});

/// Parse one line of input. Prints a message and returns `None` if the line is not a
/// valid command.
fn parse_command(input: &str) -> Option<Command> {
    Some(match input {
        "" => return None,
        "?" | "help" | "h" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "players" => Command::Players,
        "games" => Command::Games,
        other => {
            if let Some(caps) = PLAYER.captures(other) {
                Command::NewPlayer(owned(&caps, "name")?)
            } else if let Some(caps) = GAME.captures(other) {
                let bounds = match (caps.name("w"), caps.name("h")) {
                    (Some(_), Some(_)) => Some((number(&caps, "w")?, number(&caps, "h")?)),
                    _ => None,
                };
                let ships = match caps.name("ships") {
                    Some(_) => Some(number(&caps, "ships")?),
                    None => None,
                };
                Command::NewGame {
                    name: owned(&caps, "name")?,
                    bounds,
                    ships,
                }
            } else if let Some(caps) = JOIN.captures(other) {
                Command::Join {
                    game: owned(&caps, "game")?,
                    player: owned(&caps, "player")?,
                }
            } else if let Some(caps) = ON_GAME.captures(other) {
                let game = owned(&caps, "game")?;
                match caps.name("cmd")?.as_str() {
                    "start" => Command::Start(game),
                    "history" => Command::History(game),
                    _ => Command::Winner(game),
                }
            } else if let Some(caps) = PLACE.captures(other) {
                let length = match caps.name("len") {
                    Some(_) => number(&caps, "len")?,
                    None => DEFAULT_SHIP_LENGTH,
                };
                Command::Place {
                    game: owned(&caps, "game")?,
                    player: owned(&caps, "player")?,
                    start: Coordinate::new(number(&caps, "x")?, number(&caps, "y")?),
                    orientation: owned(&caps, "dir")?,
                    length,
                }
            } else if let Some(caps) = STRIKE.captures(other) {
                Command::Strike {
                    game: owned(&caps, "game")?,
                    player: owned(&caps, "player")?,
                    target: Coordinate::new(number(&caps, "x")?, number(&caps, "y")?),
                }
            } else if let Some(caps) = SHIPS.captures(other) {
                Command::Ships {
                    game: owned(&caps, "game")?,
                    player: owned(&caps, "player"),
                }
            } else if let Some(caps) = DROP.captures(other) {
                let name = owned(&caps, "name")?;
                match caps.name("kind")?.as_str() {
                    "player" => Command::DropPlayer(name),
                    _ => Command::DropGame(name),
                }
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                return None;
            }
        }
    })
}

fn owned(caps: &Captures, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_owned())
}

/// Parse a numeric capture, printing a message if it does not fit.
fn number(caps: &Captures, name: &str) -> Option<usize> {
    let text = caps.name(name)?.as_str();
    match text.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            println!("invalid {}: {} is too large", name, text);
            None
        }
    }
}

fn run_command(
    registry: &Registry,
    settings: &mut Settings,
    cmd: Command,
) -> Result<(), RegistryError> {
    match cmd {
        Command::NewPlayer(name) => {
            registry.register_player(&name)?;
            println!("Welcome, {}.", name);
        }
        Command::Players => print_names("players", &registry.players()?),
        Command::NewGame {
            name,
            bounds,
            ships,
        } => {
            println!("{}", create_game(registry, settings, name, bounds, ships)?);
        }
        Command::Games => print_names("games", &registry.games()?),
        Command::Join { game, player } => {
            registry.add_player_to_game(&game, &player)?;
            println!("{} joined {}.", player, game);
        }
        Command::Start(game) => {
            let created = registry.start_game(&game)?;
            println!("{} started with {} ships.", game, created);
            registry.with_game(&game, show_fleet_board)?;
        }
        Command::Place {
            game,
            player,
            start,
            orientation,
            length,
        } => {
            let orientation = orientation
                .parse::<Orientation>()
                .map_err(PlaceError::from)?;
            let ship = registry.place_ship(&game, &player, orientation, start, length, None)?;
            print!("Placed {} for {} at", ship.name, player);
            for cell in &ship.locations {
                print!(" {}", cell);
            }
            println!();
        }
        Command::Strike {
            game,
            player,
            target,
        } => {
            let action = registry.strike(&game, &player, target)?;
            println!("{}", action);
            if let Some(winner) = registry.winner(&game)? {
                println!("{} has the last ships afloat and wins {}!", winner, game);
            }
        }
        Command::Ships {
            game,
            player: Some(player),
        } => {
            let ships = registry.ships_of(&game, &player)?;
            if ships.is_empty() {
                println!("{} has no ships afloat in {}.", player, game);
            }
            for ship in ships {
                print!("{}:", ship.name);
                for cell in &ship.locations {
                    print!(" {}", cell);
                }
                println!();
            }
        }
        Command::Ships { game, player: None } => {
            registry.with_game(&game, show_fleet_board)?;
        }
        Command::History(game) => {
            let history = registry.history(&game)?;
            if settings.json {
                match serde_json::to_string_pretty(&history) {
                    Ok(json) => println!("{}", json),
                    Err(err) => error!("could not encode history of {}: {}", game, err),
                }
            } else if history.is_empty() {
                println!("Nobody has fired yet.");
            } else {
                for action in history {
                    println!(
                        "{} {} struck {}: {}",
                        action.created.format("%Y-%m-%d %H:%M:%S"),
                        action.player,
                        action.location,
                        action.result
                    );
                }
            }
        }
        Command::Winner(game) => match registry.winner(&game)? {
            Some(winner) => println!("{} has won {}.", winner, game),
            None => println!("{} has no winner yet.", game),
        },
        Command::DropPlayer(name) => {
            registry.delete_player(&name)?;
            println!("Deleted player {}.", name);
        }
        Command::DropGame(name) => {
            registry.delete_game(&name)?;
            println!("Deleted game {}.", name);
        }
        Command::Help => print_help(),
        Command::Quit => {}
    }
    Ok(())
}

/// Register a new game, returning the line announcing it.
fn create_game(
    registry: &Registry,
    settings: &mut Settings,
    name: String,
    bounds: Option<(usize, usize)>,
    ships: Option<usize>,
) -> Result<String, RegistryError> {
    let config = settings.game_config(name, bounds, ships);
    let summary = format!(
        "Created game {} on a {}x{} grid with {} ships per player.",
        config.name, config.maximum_x, config.maximum_y, config.ships_per_person
    );
    registry.register_game(config)?;
    Ok(summary)
}

fn print_names(what: &str, names: &[String]) {
    if names.is_empty() {
        println!("No {} yet.", what);
    } else {
        println!("{}", names.join(", "));
    }
}

fn print_help() {
    println!(
        "Available Commands:
    player <name>                               register a player.
    players                                     list registered players.
    game <name> [<w>x<h>] [ships <n>]           create a game, optionally with its own grid
        size and number of ships per player.
    games                                       list games.
    join <game> <player>                        add a player to a game that has not started.
    start <game>                                generate ships for every player in the game.
    place <game> <player> <x>,<y> <dir> [<len>] place a ship by hand. Possible directions are
        \"horizontal\", \"vertical\" and \"diagonal\" (or \"h\", \"v\", \"d\").
    strike <game> <player> <x>,<y>              fire at a cell; any ship there is sunk.
    ships <game> [<player>]                     show the fleet board, or one player's ships.
    history <game>                              list every strike in order.
    winner <game>                               show the winner, if there is one.
    drop player|game <name>                     delete a player or a game.
    quit                                        leave."
    );
}

/// Print the board of a game, marking each live ship cell with its owner's position on
/// the roster.
fn show_fleet_board(game: &mut Game) {
    enum FleetCell {
        Empty,
        Owner(usize),
        Outsider,
    }
    impl fmt::Display for FleetCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                FleetCell::Empty => f.pad("~~"),
                FleetCell::Owner(idx) => f.pad(&(idx + 1).to_string()),
                FleetCell::Outsider => f.pad("??"),
            }
        }
    }

    let game = &*game;
    let bounds = game.bounds();
    show_board(
        bounds.maximum_x(),
        bounds.iter_coordinates().map(move |row| {
            row.map(move |coord| match game.check_for_hit(&coord) {
                None => FleetCell::Empty,
                Some(ship) => match game.players().iter().position(|p| p == ship.owner()) {
                    Some(idx) => FleetCell::Owner(idx),
                    None => FleetCell::Outsider,
                },
            })
        }),
    );
    for (idx, (player, ships)) in game.ships_by_player().into_iter().enumerate() {
        println!("{:>3} = {} ({} ships)", idx + 1, player, ships.len());
    }
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items. Coordinates start from 1.
fn show_board(
    maximum_x: usize,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
) {
    print!("   ");
    for i in 1..=maximum_x {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i + 1);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `None` once the input is exhausted.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns false
    /// at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}
