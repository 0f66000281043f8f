use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Decoded RGBA8 image ready for texture upload
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Fire-and-forget background image load.
///
/// Decoding happens on a worker thread; the event loop polls once per
/// frame. A failed load logs a warning and the scene simply keeps its
/// black background.
pub struct BackgroundLoader {
    receiver: Receiver<Result<BackgroundImage>>,
}

impl BackgroundLoader {
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // The receiver may be gone if the app shut down mid-load
            let _ = sender.send(load_image(&path));
        });
        Self { receiver }
    }

    /// Non-blocking: returns the image once, None before it resolves
    /// or after a failure.
    pub fn poll(&mut self) -> Option<BackgroundImage> {
        match self.receiver.try_recv() {
            Ok(Ok(image)) => {
                log::info!("background texture loaded ({}x{})", image.width, image.height);
                Some(image)
            }
            Ok(Err(err)) => {
                log::warn!("background texture load failed: {err:#}");
                None
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

fn load_image(path: &std::path::Path) -> Result<BackgroundImage> {
    let image = image::open(path)
        .with_context(|| format!("opening background image {}", path.display()))?
        .to_rgba8();

    let (width, height) = image.dimensions();
    Ok(BackgroundImage {
        width,
        height,
        pixels: image.into_raw(),
    })
}
