//! Names given to ships placed without an explicit name.
//!
//! Names are drawn from a list of Culture ship names, with thanks to Iain M. Banks.
use rand::{seq::SliceRandom, Rng};

/// Curated names, tried in a random order.
pub const SHIP_NAMES: &[&str] = &[
    "Bora Horza Gobuchul",
    "Determinist",
    "Eschatologist",
    "Irregular Apocalypse",
    "No More Mr Nice Guy",
    "Profit Margin",
    "Nervous Energy",
    "Prosthetic Conscience",
    "Revisionist",
    "Trade Surplus",
    "The Ends Of Invention",
    "Clear Air Turbulence",
    "Little Rascal",
    "So Much For Subtlety",
    "Unfortunate Conflict Of Evidence",
    "Youthful Indiscretion",
    "Flexible Demeanour",
    "Just Read The Instructions",
    "Of Course I Still Love You",
    "Zealot",
    "Limiting Factor",
    "Gunboat Diplomat",
    "Kiss My Ass",
    "Prime Mover",
    "Screw Loose",
    "Bad for Business",
    "Ablation",
    "Arrested Development",
    "A Series Of Unlikely Explanations",
    "A Ship With A View",
    "Big Sexy Beast",
    "Boo!",
    "Cantankerous",
    "Credibility Problem",
    "Dramatic Exit",
    "Excuses and Accusations",
    "Death And Gravity",
    "Anticipation Of A New Lover's Arrival, The",
    "Ethics Gradient",
    "Honest Mistake",
    "Limivorous",
    "Uninvited Guest",
    "Use Psychology",
    "Yawning Angel",
    "Zero Gravitas",
    "Serious Callers Only",
    "Steely Glint",
    "Different Tan",
    "Problem Child",
    "Killing Time",
    "Quietly Confident",
    "Sleeper Service",
    "Mistake Not...",
];

/// Name used once every curated name is taken within a game.
pub const FALLBACK_SHIP_NAME: &str = "Unavailable due to previous customer selection";

/// Pick a random curated name for which `in_use` returns false, or the fallback name if
/// every curated name is in use.
pub fn pick_name<R, F>(rng: &mut R, mut in_use: F) -> &'static str
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> bool,
{
    let mut names = SHIP_NAMES.to_vec();
    names.shuffle(rng);
    names
        .into_iter()
        .find(|name| !in_use(name))
        .unwrap_or(FALLBACK_SHIP_NAME)
}
