//! Application state — single-owner, main-thread only.

use std::sync::mpsc::{channel, Receiver, Sender};

use omniband_core::mapping::Bounds;
use omniband_core::{Slider, SliderInfo, Subscription};

use crate::view::TermView;

pub struct AppState {
    pub slider: Slider<TermView>,
    pub running: bool,
    pub is_date: bool,
    pub bounds: Bounds,
    pub status: Option<String>,
    /// Most recent lifecycle event and how many we have seen in total.
    pub last_event: Option<(String, SliderInfo)>,
    pub events_seen: usize,
    event_rx: Receiver<(String, SliderInfo)>,
    /// Token for the `moving` subscription; the `m` key removes it to
    /// demonstrate subscription capability tokens.
    moving_token: Option<Subscription>,
    // The start/stop tokens are never removed; keep them alive for clarity.
    _tokens: Vec<Subscription>,
}

impl AppState {
    pub fn new(mut slider: Slider<TermView>, is_date: bool, bounds: Bounds) -> Self {
        let (tx, rx) = channel();
        let mut tokens = Vec::new();
        let mut moving_token = None;
        for topic in ["start", "moving", "stop"] {
            let tx: Sender<(String, SliderInfo)> = tx.clone();
            let token = slider.subscribe(topic, move |info| {
                let _ = tx.send((topic.to_string(), info.clone()));
            });
            if topic == "moving" {
                moving_token = Some(token);
            } else {
                tokens.push(token);
            }
        }

        Self {
            slider,
            running: true,
            is_date,
            bounds,
            status: None,
            last_event: None,
            events_seen: 0,
            event_rx: rx,
            moving_token,
            _tokens: tokens,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Drain lifecycle events delivered since the last frame.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.events_seen += 1;
            self.last_event = Some(event);
        }
    }

    /// Remove the `moving` subscription (idempotent; the token stays valid).
    pub fn mute_moving(&mut self) {
        if let Some(token) = &self.moving_token {
            token.remove();
        }
    }

    pub fn moving_muted(&self) -> bool {
        self.moving_token
            .as_ref()
            .is_some_and(|token| !token.is_active())
    }

    /// Step size for keyboard nudges: 1/20 of the domain span.
    pub fn step(&self) -> f64 {
        self.bounds.span() / 20.0
    }
}
