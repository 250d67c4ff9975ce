//! Asynchronous page layout loading.
//!
//! Layout files are read and parsed on a background thread so the window keeps
//! repainting while the disk is slow.

use eframe::egui;
use ecosite::{generate_demo_layout, PageLayout};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use crate::io::load_layout;

/// Result of a completed layout loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        layout: PageLayout,
        /// Path of the file that was loaded (None for the demo page)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation finished this frame
    None,
}

/// Manages background loading of layout files.
pub struct AsyncLoader {
    /// Channel receiver for the pending load, if any
    loading_receiver: Option<Receiver<Result<PageLayout, String>>>,
    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// True while a file load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading_receiver.is_some()
    }

    /// Path of the file being loaded.
    pub fn pending_path(&self) -> Option<&PathBuf> {
        self.pending_load_path.as_ref()
    }

    /// Starts loading a layout file in the background.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.pending_load_path = Some(path.clone());

        log::info!("loading page layout {}", path.display());

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            // {:#} keeps the context chain on one line
            let result = load_layout(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
            ctx_handle.request_repaint();
        });
    }

    /// Generates the demo page synchronously.
    pub fn load_demo_page(&mut self, seed: u64) -> PageLayout {
        generate_demo_layout(seed)
    }

    /// Returns the result of the pending load once it is available.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return LoadResult::None,
            Err(TryRecvError::Disconnected) => {
                // the loader thread died without sending
                self.loading_receiver = None;
                let path = self.pending_load_path.take();
                log::warn!("layout loader for {:?} stopped without a result", path);
                return LoadResult::Error("layout loader stopped before finishing".to_string());
            }
        };

        self.loading_receiver = None;
        match result {
            Ok(layout) => LoadResult::Success {
                layout,
                path: self.pending_load_path.take(),
            },
            Err(error_msg) => {
                self.pending_load_path = None;
                LoadResult::Error(error_msg)
            }
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
