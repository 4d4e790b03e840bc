use crate::utils::*;
use memgrid_core::{Difficulty, MAX_DIFFICULTY, MIN_DIFFICULTY};
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Player preferences kept between visits. Rounds themselves are never stored.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub difficulty: Difficulty,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::DEFAULT,
            sound: true,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "memgrid:settings";
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct DifficultyProps {
    pub difficulty: Difficulty,
    pub on_change: Callback<Difficulty>,
}

#[function_component(DifficultyView)]
pub(crate) fn difficulty_view(props: &DifficultyProps) -> Html {
    let DifficultyProps {
        difficulty,
        on_change,
    } = props.clone();

    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match input.value().parse::<u8>() {
            Ok(value) => on_change.emit(Difficulty::new(value)),
            Err(err) => log::warn!("bad slider value {:?}: {}", input.value(), err),
        }
    });

    html! {
        <div class="difficulty">
            <label for="difficulty">{"Difficulty:"}</label>
            <input
                type="range"
                id="difficulty"
                min={MIN_DIFFICULTY.to_string()}
                max={MAX_DIFFICULTY.to_string()}
                value={difficulty.to_string()}
                {oninput}
            />
            <span>{difficulty.get()}</span>
            <p>{difficulty.tier().label()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"difficulty":4}"#).unwrap();

        assert_eq!(settings.difficulty.get(), 4);
        assert!(settings.sound);
    }

    #[test]
    fn out_of_range_stored_difficulty_is_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"difficulty":99}"#).is_err());
    }

    #[test]
    fn storage_key_uses_app_namespace() {
        assert_eq!(<Settings as StorageKey>::KEY, "memgrid:settings");
    }
}
