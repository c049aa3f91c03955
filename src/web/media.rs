//! [`MediaHandle`] over a `<video>` element.

use snapsite_media::{MediaError, MediaHandle, PlayOutcome};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

const INLINE_ATTRIBUTES: [&str; 3] = ["muted", "playsinline", "webkit-playsinline"];

pub struct VideoHandle {
    label: String,
    video: HtmlVideoElement,
}

impl VideoHandle {
    pub fn new(label: impl Into<String>, video: HtmlVideoElement) -> Self {
        Self {
            label: label.into(),
            video,
        }
    }

    fn live(&self) -> Result<&HtmlVideoElement, MediaError> {
        if self.video.is_connected() {
            Ok(&self.video)
        } else {
            Err(MediaError::Detached)
        }
    }
}

fn platform(err: JsValue) -> MediaError {
    MediaError::Platform(format!("{err:?}"))
}

impl MediaHandle for VideoHandle {
    fn prepare_inline_autoplay(&mut self) -> Result<(), MediaError> {
        let video = self.live()?;
        video.set_muted(true);
        video.set_controls(false);
        for attr in INLINE_ATTRIBUTES {
            video.set_attribute(attr, "").map_err(platform)?;
        }
        js_sys::Reflect::set(video, &"playsInline".into(), &JsValue::TRUE).map_err(platform)?;
        Ok(())
    }

    fn seek(&mut self, position_secs: f64) -> Result<(), MediaError> {
        self.live()?.set_current_time(position_secs);
        Ok(())
    }

    fn play(&mut self) -> PlayOutcome {
        let video = match self.live() {
            Ok(video) => video,
            Err(err) => return PlayOutcome::Rejected(err.to_string()),
        };
        match video.play() {
            Ok(promise) => {
                let label = self.label.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        tracing::debug!(section = %label, error = ?err, "play promise rejected");
                    }
                });
                PlayOutcome::Deferred
            }
            Err(err) => PlayOutcome::Rejected(format!("{err:?}")),
        }
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.live()?.pause().map_err(platform)
    }
}
