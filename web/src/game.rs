use crate::settings::{DifficultyView, Settings};
use crate::sound::SoundBoard;
use crate::theme::Theme;
use crate::toast::{TOAST_DURATION_MS, ToastContainer, ToastQueue};
use crate::utils::*;
use gloo::timers::callback::Timeout;
use memgrid_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewTileState {
    Blank,
    Highlighted,
    Correct,
    Missed,
    Wrong,
}

fn tile_state_at(engine: &game::RoundEngine, cell: game::CellIndex) -> ViewTileState {
    use ViewTileState::*;

    if engine.is_revealed() && engine.is_target(cell) {
        return Highlighted;
    }
    if engine.is_clicked(cell) {
        return Correct;
    }

    match engine.state() {
        game::RoundState::Lost if engine.wrong_click() == Some(cell) => Wrong,
        game::RoundState::Lost if engine.is_target(cell) => Missed,
        _ => Blank,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartRound,
    ClickCell(game::CellIndex),
    HideReveal(game::RevealTicket),
    SetDifficulty(game::Difficulty),
    DismissToast(u32),
    ToggleSound,
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    cell: game::CellIndex,
    position: (game::CellCount, game::CellCount),
    tile_state: ViewTileState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    use ViewTileState::*;

    let TileProps {
        cell,
        position: (row, column),
        tile_state,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "tile",
        match tile_state {
            Blank => classes!(),
            Highlighted => classes!("highlight"),
            Correct => classes!("correct"),
            Missed => classes!("missed"),
            Wrong => classes!("wrong"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", cell);
        callback.emit(cell);
    });

    html! {
        <div {class} {onclick} aria-label={format!("row {}, column {}", row + 1, column + 1)}/>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Fixed seed, random when absent
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Overrides the stored difficulty for this visit
    #[prop_or_default]
    pub difficulty: Option<game::Difficulty>,
}

pub(crate) struct GameView {
    settings: Settings,
    theme: Theme,
    engine: game::RoundEngine,
    generator: game::RandomTargetGenerator,
    sounds: SoundBoard,
    toasts: ToastQueue,
    reveal_timeout: Option<Timeout>,
    toast_timeouts: Vec<(u32, Timeout)>,
}

impl GameView {
    fn start_round(&mut self, ctx: &Context<Self>) -> bool {
        if self.engine.state().is_playing() {
            return false;
        }

        let ticket = match self
            .engine
            .start_round(self.settings.difficulty, &mut self.generator)
        {
            Ok(ticket) => ticket,
            Err(err) => {
                log::error!("could not start round: {}", err);
                return false;
            }
        };

        // the previous timeout is cancelled on drop, a stale ticket would be ignored anyway
        let link = ctx.link().clone();
        self.reveal_timeout = Some(Timeout::new(game::RevealTicket::DELAY_MS, move || {
            link.send_message(Msg::HideReveal(ticket))
        }));
        true
    }

    fn click_cell(&mut self, ctx: &Context<Self>, cell: game::CellIndex) -> bool {
        let outcome = self.engine.click_cell(cell.into());
        outcome.notify(&mut (&mut self.sounds, &mut self.toasts));

        for effect in self.sounds.drain() {
            effect.play();
        }
        for id in self.toasts.take_unscheduled() {
            let link = ctx.link().clone();
            let timeout = Timeout::new(TOAST_DURATION_MS, move || {
                link.send_message(Msg::DismissToast(id))
            });
            self.toast_timeouts.push((id, timeout));
        }

        outcome.has_update()
    }

    fn dismiss_toast(&mut self, id: u32) -> bool {
        self.toast_timeouts.retain(|(toast_id, _)| *toast_id != id);
        self.toasts.dismiss(id)
    }

    fn get_state_class(&self) -> Classes {
        use game::RoundState::*;

        classes!(match self.engine.state() {
            Waiting => "waiting",
            Playing if self.engine.is_revealed() => "revealing",
            Playing => "playing",
            Won => "win",
            Lost => "lose",
        })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut settings = Settings::local_or_default();
        if let Some(difficulty) = props.difficulty {
            settings.difficulty = difficulty;
        }
        let generator =
            game::RandomTargetGenerator::new(props.seed.unwrap_or_else(js_random_seed));
        log::debug!("seed: {}", generator.seed());

        Self {
            settings,
            theme: Theme::init(),
            engine: game::RoundEngine::new(game::GridConfig::DEFAULT),
            generator,
            sounds: SoundBoard::new(settings.sound),
            toasts: ToastQueue::default(),
            reveal_timeout: None,
            toast_timeouts: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartRound => {
                log::debug!("start round");
                self.start_round(ctx)
            }
            ClickCell(cell) => self.click_cell(ctx, cell),
            HideReveal(ticket) => {
                let updated = self.engine.end_reveal(ticket);
                if updated {
                    self.reveal_timeout = None;
                }
                updated
            }
            SetDifficulty(difficulty) => {
                if self.settings.difficulty != difficulty {
                    self.settings.difficulty = difficulty;
                    self.settings.local_save();
                    true
                } else {
                    false
                }
            }
            DismissToast(id) => self.dismiss_toast(id),
            ToggleSound => {
                self.settings.sound = !self.settings.sound;
                self.sounds.set_enabled(self.settings.sound);
                self.settings.local_save();
                true
            }
            ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme.apply();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let grid = self.engine.grid();
        let playing = self.engine.state().is_playing();
        let finished = self.engine.state().is_finished();
        let grid_style = format!(
            "grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, 1fr)",
            grid.columns(),
            grid.rows()
        );

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            StartRound
        });
        let cb_difficulty = ctx.link().callback(SetDifficulty);
        let cb_dismiss = ctx.link().callback(DismissToast);
        let cb_sound = ctx.link().callback(|_: MouseEvent| ToggleSound);
        let cb_theme = ctx.link().callback(|_: MouseEvent| ToggleTheme);
        let sound_label = if self.settings.sound { "🔊" } else { "🔇" };
        let theme_label = match self.theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        };

        html! {
            <div class={classes!("memgrid", self.get_state_class())}>
                <nav>
                    <button class="sound" onclick={cb_sound}>{sound_label}</button>
                    <h1>{"Memory Game"}</h1>
                    <button class="theme" onclick={cb_theme}>{theme_label}</button>
                </nav>
                <div class={classes!("grid", playing.then_some("playable"), finished.then_some("finished"))} style={grid_style}>
                    {
                        for grid.cells().map(|cell| {
                            let tile_state = tile_state_at(&self.engine, cell);
                            let position = grid.position(cell);
                            let locked = !playing;
                            let callback = ctx.link().callback(ClickCell);
                            html! {
                                <TileView key={cell} {cell} {position} {tile_state} {locked} {callback}/>
                            }
                        })
                    }
                </div>
                if !playing {
                    <div class="controls">
                        <button class="start" onclick={cb_start}>{"Start New Game"}</button>
                        <DifficultyView difficulty={self.settings.difficulty} on_change={cb_difficulty}/>
                    </div>
                }
                <ToastContainer toasts={self.toasts.toasts().to_vec()} on_dismiss={cb_dismiss}/>
            </div>
        }
    }
}
