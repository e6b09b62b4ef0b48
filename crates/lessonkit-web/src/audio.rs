//! Sound cues.

use lessonkit_core::{Environment, PageConfig};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use crate::markup::sounds;

/// A preloaded sound. Failing to load or play is never an error: the page
/// simply stays silent.
pub struct Sound {
    name: &'static str,
    element: Option<HtmlAudioElement>,
}

impl Sound {
    pub fn load(name: &'static str, src: &str) -> Self {
        let element = match HtmlAudioElement::new_with_src(src) {
            Ok(element) => Some(element),
            Err(e) => {
                log::warn!("Failed to load sound {}: {:?}", src, e);
                None
            }
        };
        Self { name, element }
    }

    /// Start playback. Rejections (e.g. autoplay policy) are logged and dropped.
    pub fn play(&self) {
        let Some(element) = &self.element else {
            return;
        };
        let name = self.name;
        match element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("Playback of {} rejected: {:?}", name, e);
                }
            }),
            Err(e) => log::debug!("Playback of {} failed: {:?}", name, e),
        }
    }
}

/// The page's shared sounds.
pub struct SoundBank {
    pub correct: Sound,
    pub action: Sound,
    pub incorrect: Sound,
}

impl SoundBank {
    pub fn load(config: &PageConfig, environment: Environment) -> Self {
        let path = |file| config.asset_path(environment, file, sounds::PREFIX);
        Self {
            correct: Sound::load("correct", &path(sounds::CORRECT)),
            action: Sound::load("action", &path(sounds::ACTION)),
            incorrect: Sound::load("incorrect", &path(sounds::INCORRECT)),
        }
    }
}
