#![cfg(target_arch = "wasm32")]

use memgrid_core::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn seeded_round_plays_to_a_win_on_wasm() {
    let mut engine = RoundEngine::default();
    let mut generator = RandomTargetGenerator::new(9);

    let ticket = engine
        .start_round(Difficulty::new(6), &mut generator)
        .unwrap();
    assert!(engine.end_reveal(ticket));

    let target: Vec<_> = engine.target().iter().collect();
    for cell in target {
        engine.click_cell(cell.into());
    }

    assert_eq!(engine.state(), RoundState::Won);
}
