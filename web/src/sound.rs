use memgrid_core::{CellIndex, RoundListener};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SoundEffect {
    Correct,
    Success,
    Fail,
}

impl SoundEffect {
    pub(crate) const fn src(self) -> &'static str {
        use SoundEffect::*;
        match self {
            Correct => "correct.wav",
            Success => "success.wav",
            Fail => "fail.wav",
        }
    }

    /// Fire and forget, playback problems are only logged.
    pub(crate) fn play(self) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = self.playback().await {
                log::warn!("could not play {}: {:?}", self.src(), err);
            }
        });
    }

    /// Resolves once playback started, autoplay blocks and missing files reject asynchronously.
    async fn playback(self) -> Result<(), JsValue> {
        let audio = HtmlAudioElement::new_with_src(self.src())?;
        JsFuture::from(audio.play()?).await?;
        Ok(())
    }
}

/// Collects the effects a click should make, played later by the view.
#[derive(Debug, Default)]
pub(crate) struct SoundBoard {
    muted: bool,
    queued: Vec<SoundEffect>,
}

impl SoundBoard {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            muted: !enabled,
            queued: Vec::new(),
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.muted = !enabled;
        if self.muted {
            self.queued.clear();
        }
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = SoundEffect> + '_ {
        self.queued.drain(..)
    }

    fn queue(&mut self, effect: SoundEffect) {
        if !self.muted {
            self.queued.push(effect);
        }
    }
}

impl RoundListener for SoundBoard {
    fn on_correct(&mut self, _cell: CellIndex) {
        self.queue(SoundEffect::Correct);
    }

    fn on_win(&mut self) {
        self.queue(SoundEffect::Success);
    }

    fn on_lose(&mut self) {
        self.queue(SoundEffect::Fail);
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn unavailable_sound_rejects_instead_of_throwing() {
        assert!(SoundEffect::Fail.playback().await.is_err());
    }
}
