// Per-consumer image load state.
// Each slot tracks the reference it last observed and accepts only the
// completion for the load it issued most recently.

use std::sync::Arc;

use crate::error::ImageLoadError;

use super::decode::DecodedImage;
use super::reference::{ImageRef, RequestOptions};

/// What a view should draw for an image.
#[derive(Debug, Clone, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded {
        image: Arc<DecodedImage>,
    },
    Error,
}

impl ImageLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageLoadState::Loading)
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageLoadState::Loaded { .. })
    }
}

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Issues tickets that are unique for the lifetime of the issuer.
#[derive(Debug, Default)]
pub struct Tickets {
    next: u64,
}

impl Tickets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

/// A load the slot wants performed.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub reference: ImageRef,
    pub options: RequestOptions,
}

/// The single result message of a load.
#[derive(Debug)]
pub struct LoadCompletion {
    pub ticket: Ticket,
    pub result: Result<Arc<DecodedImage>, ImageLoadError>,
}

/// Image state for one consumer.
#[derive(Debug, Default)]
pub struct ImageSlot {
    /// Reference seen by the last `observe`; None before the first call.
    observed: Option<Option<ImageRef>>,
    /// Load whose completion this slot still waits for.
    pending: Option<Ticket>,
    state: ImageLoadState,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ImageLoadState {
        &self.state
    }

    #[cfg(test)]
    pub fn reference(&self) -> Option<&ImageRef> {
        self.observed.as_ref().and_then(|r| r.as_ref())
    }

    /// Observe `reference`. Returns a request when a new load must start.
    ///
    /// Re-observing the same reference is a no-op. A different reference
    /// resets the state to `Loading` and orphans any load in flight; a
    /// missing reference goes straight to `Error`.
    pub fn observe(
        &mut self,
        reference: Option<&ImageRef>,
        options: RequestOptions,
        tickets: &mut Tickets,
    ) -> Option<LoadRequest> {
        if let Some(seen) = &self.observed {
            if seen.as_ref() == reference {
                return None;
            }
        }
        self.observed = Some(reference.cloned());

        match reference {
            None => {
                self.pending = None;
                self.state = ImageLoadState::Error;
                None
            }
            Some(reference) => {
                let ticket = tickets.issue();
                self.pending = Some(ticket);
                self.state = ImageLoadState::Loading;
                Some(LoadRequest {
                    ticket,
                    reference: reference.clone(),
                    options,
                })
            }
        }
    }

    /// Apply a completion if it belongs to this slot's pending load.
    /// Returns true when the state changed.
    pub fn resolve(&mut self, completion: &LoadCompletion) -> bool {
        if self.pending != Some(completion.ticket) {
            return false;
        }
        self.pending = None;
        self.state = match &completion.result {
            Ok(image) => ImageLoadState::Loaded {
                image: Arc::clone(image),
            },
            Err(_) => ImageLoadState::Error,
        };
        true
    }
}
