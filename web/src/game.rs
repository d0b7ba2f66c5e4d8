use crate::utils::*;
use clap::Args;
use tentou_core as game;
use yew::prelude::*;

impl StorageKey for game::Game {
    const KEY: &'static str = "tentou:game:v1";
}

/// Picks the saved session back up only when it matches the configured board
/// size, otherwise starts a freshly scrambled game.
fn restore_or_generate(
    saved: Option<game::Game>,
    config: game::GameConfig,
    seed: u64,
) -> game::Game {
    use game::BoardGenerator;

    match saved {
        Some(saved) if saved.size() == config.size => saved,
        _ => game::Game::new(game::RandomBoardGenerator::from_seed(seed).generate(config)),
    }
}

const fn state_class(state: game::GameState) -> &'static str {
    match state {
        game::GameState::Playing => "playing",
        game::GameState::Won => "win",
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(game::Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    lit: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        lit,
        callback,
    } = props.clone();

    let class = classes!("cell", lit.then_some("lit"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, col);
        callback.emit((row, col));
    });

    html! {
        <td><button {class} {onclick}/></td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Number of board rows
    #[arg(long, default_value_t = 5)]
    pub rows: game::Coord,

    /// Number of board columns
    #[arg(long, default_value_t = 5)]
    pub cols: game::Coord,

    /// Scramble moves to apply, -1 to choose randomly
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub target_moves: i32,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::Game,
    config: game::GameConfig,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = game::GameConfig::new((props.rows, props.cols), props.target_moves)
            .expect("invalid board configuration");
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("config: {:?}, seed: {}", config, seed);

        Self {
            game: restore_or_generate(game::Game::local_load(), config, seed),
            config,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let updated = match msg {
            Msg::CellClicked((row, col)) => {
                let outcome = self.game.toggle((i32::from(row), i32::from(col)));
                log::debug!("toggle ({}, {}): {:?}", row, col, outcome);
                if outcome == game::ToggleOutcome::Won {
                    gloo::dialogs::alert("You won!");
                }
                outcome.has_update()
            }
            Msg::NewGame => {
                let seed = js_random_seed();
                log::debug!("new game, seed: {}", seed);
                self.game = restore_or_generate(None, self.config, seed);
                true
            }
        };

        self.game.local_save();
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.game.size();
        let state_class = classes!(state_class(self.game.state()));

        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        html! {
            <div class="tentou">
                <nav>
                    <button class={state_class} onclick={cb_new_game}>{"new game"}</button>
                </nav>
                <table>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let lit = self.game.cell_at((row, col));
                                        let callback = ctx.link().callback(Msg::CellClicked);
                                        html! {
                                            <CellView {row} {col} {lit} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}
