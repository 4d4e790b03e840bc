use clap::Parser;
use memgrid_core::Difficulty;
use wasm_bindgen::prelude::*;

mod game;
mod settings;
mod sound;
mod theme;
mod toast;
mod utils;

/// Options read from the location hash, e.g. `#-vv&--seed=42&--difficulty=5`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start with this many tiles to remember instead of the saved setting
    #[arg(short, long)]
    difficulty: Option<u8>,
}

impl Args {
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn game_props(&self) -> game::GameProps {
        game::GameProps {
            seed: self.seed,
            difficulty: self.difficulty.map(Difficulty::new),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game_props()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_hash("").unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(args.game_props().difficulty, None);
    }

    #[test]
    fn hash_options_are_parsed() {
        let args = Args::from_hash("#-vv&--seed=42&--difficulty=30").unwrap();

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert_eq!(args.game_props().difficulty, Some(Difficulty::MAX));
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(Args::from_hash("#--nope").is_err());
    }
}
