// SPDX-License-Identifier: MPL-2.0
//! Deferred image loading.
//!
//! Images carrying a deferred source start loading the first time they
//! come near the viewport. Failures are logged and the placeholder stays.

use crate::config::defaults::{LAZY_IMAGE_MARGIN_PX, LAZY_IMAGE_THRESHOLD};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::ui::intersection::{ObserverOptions, RootMargin, Span};
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum LoadState {
    /// Not requested yet.
    Pending,
    Loading,
    Loaded(Handle),
    Failed,
}

#[derive(Debug, Clone)]
pub struct LazyImage {
    /// Deferred source; images without one are never loaded.
    src: Option<String>,
    span: Span,
    state: LoadState,
}

impl LazyImage {
    #[must_use]
    pub fn new(src: Option<String>, span: Span) -> Self {
        Self {
            src,
            span,
            state: LoadState::Pending,
        }
    }

    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match &self.state {
            LoadState::Loaded(handle) => Some(handle),
            LoadState::Pending | LoadState::Loading | LoadState::Failed => None,
        }
    }
}

/// A load the host has to perform: image index and source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub index: usize,
    pub src: String,
}

#[derive(Debug, Clone)]
pub struct LazyImages {
    images: Vec<LazyImage>,
    observer: ObserverOptions,
}

impl LazyImages {
    #[must_use]
    pub fn new(images: Vec<LazyImage>) -> Self {
        Self {
            images,
            observer: ObserverOptions::new(
                LAZY_IMAGE_THRESHOLD,
                RootMargin::vertical(LAZY_IMAGE_MARGIN_PX),
            ),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LazyImage> {
        self.images.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Requests every pending image near the viewport. Each image is
    /// requested at most once.
    pub fn observe(&mut self, viewport: Span) -> Vec<LoadRequest> {
        let observer = self.observer;
        self.request_where(|image| observer.observes(image.span, viewport))
    }

    /// Fallback without viewport tracking: requests every image.
    pub fn load_all(&mut self) -> Vec<LoadRequest> {
        self.request_where(|_| true)
    }

    fn request_where(&mut self, mut wanted: impl FnMut(&LazyImage) -> bool) -> Vec<LoadRequest> {
        let mut requests = Vec::new();
        for (index, image) in self.images.iter_mut().enumerate() {
            if !matches!(image.state, LoadState::Pending) || !wanted(image) {
                continue;
            }
            let Some(src) = image.src.clone() else {
                continue;
            };
            image.state = LoadState::Loading;
            requests.push(LoadRequest { index, src });
        }
        requests
    }

    /// Records the outcome of a load. Failures are logged.
    pub fn finish(
        &mut self,
        index: usize,
        result: Result<Vec<u8>, String>,
        diagnostics: Option<&DiagnosticsHandle>,
    ) {
        let Some(image) = self.images.get_mut(index) else {
            return;
        };
        image.state = match result {
            Ok(bytes) => LoadState::Loaded(Handle::from_bytes(bytes)),
            Err(error) => {
                let src = image.src.as_deref().unwrap_or_default();
                eprintln!("Failed to load image: {src} ({error})");
                if let Some(handle) = diagnostics {
                    handle.log_warning(WarningEvent::new(
                        WarningType::ImageLoadFailed,
                        format!("{src}: {error}"),
                    ));
                }
                LoadState::Failed
            }
        };
    }
}

/// Reads an image source relative to `base_dir`.
///
/// # Errors
///
/// Returns the I/O error message when the file cannot be read.
pub async fn read_source(base_dir: Option<PathBuf>, src: String) -> Result<Vec<u8>, String> {
    let path = match base_dir {
        Some(dir) => dir.join(&src),
        None => Path::new(&src).to_path_buf(),
    };
    tokio::fs::read(&path).await.map_err(|err| err.to_string())
}
