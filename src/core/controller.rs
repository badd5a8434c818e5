//! Conversion controller: bootstraps the currency list, tracks the user's
//! base/target selection and keeps the displayed rate in sync with it.
//!
//! The controller is event-driven. Network fetches run on spawned tasks
//! whose only side effect is posting a completion event back onto the
//! controller's channel, so all state lives on one logical thread. Each
//! lookup carries a sequence number; completions that are no longer the
//! latest are discarded, which keeps the displayed rate matching the
//! current selection even when a selection change overtakes an in-flight
//! request.

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::core::parse;
use crate::core::presenter::Presenter;
use crate::core::rates::{FetchOutcome, RateClient, RateResult};
use crate::core::selection::SelectionState;

/// Everything that can happen to the running app. Selection and retry
/// events originate from user input; the `*Done` events are posted by the
/// controller's own fetch tasks. `Quit` is consumed by the event loop
/// before it reaches the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    BaseSelected(usize),
    TargetSelected(usize),
    BootstrapRetry,
    BootstrapDone(FetchOutcome),
    LookupDone { seq: u64, result: RateResult },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Bootstrapping,
    Ready,
}

pub struct ConversionController<P: Presenter> {
    client: Arc<dyn RateClient>,
    presenter: P,
    selection: SelectionState,
    events: UnboundedSender<AppEvent>,
    phase: Phase,
    default_base: String,
    lookup_seq: u64,
}

impl<P: Presenter> ConversionController<P> {
    pub fn new(
        client: Arc<dyn RateClient>,
        presenter: P,
        default_base: &str,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        ConversionController {
            client,
            presenter,
            selection: SelectionState::new(),
            events,
            phase: Phase::Bootstrapping,
            default_base: default_base.to_string(),
            lookup_seq: 0,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Kicks off the initial currency list bootstrap.
    pub fn start(&mut self) {
        self.begin_bootstrap();
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::BaseSelected(index) => self.on_base_selected(index),
            AppEvent::TargetSelected(index) => self.on_target_selected(index),
            AppEvent::BootstrapRetry => self.on_bootstrap_retry(),
            AppEvent::BootstrapDone(outcome) => self.on_bootstrap_done(outcome),
            AppEvent::LookupDone { seq, result } => self.on_lookup_done(seq, result),
            AppEvent::Quit => debug!("Quit is handled by the event loop"),
        }
    }

    fn begin_bootstrap(&mut self) {
        self.phase = Phase::Bootstrapping;
        self.presenter.show_bootstrap_loading();

        let client = Arc::clone(&self.client);
        let base = self.default_base.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = match client.fetch_rates(&base).await {
                Ok(raw) => parse::parse_currency_list(&raw),
                Err(e) => FetchOutcome::Failed(e.to_string()),
            };
            // Receiver may already be gone during shutdown
            let _ = events.send(AppEvent::BootstrapDone(outcome));
        });
    }

    fn on_bootstrap_done(&mut self, outcome: FetchOutcome) {
        if self.phase != Phase::Bootstrapping {
            warn!("Ignoring bootstrap completion outside bootstrap phase");
            return;
        }

        match outcome {
            FetchOutcome::Loaded(list) if list.is_empty() => {
                debug!("Bootstrap returned an empty currency list");
                self.presenter.show_bootstrap_error("currency list is empty");
            }
            FetchOutcome::Loaded(list) => {
                debug!("Bootstrap loaded {} currencies", list.len());
                self.selection.replace_currency_list(list);
                self.phase = Phase::Ready;
                self.presenter
                    .render_base_list(self.selection.currencies(), 0);
                self.presenter.render_target_list(&self.selection.target_list(), 0);
                self.begin_lookup();
            }
            FetchOutcome::Failed(detail) => {
                debug!("Bootstrap failed: {detail}");
                self.presenter.show_bootstrap_error(&detail);
            }
        }
    }

    fn on_bootstrap_retry(&mut self) {
        if self.phase != Phase::Bootstrapping {
            debug!("Ignoring bootstrap retry while ready");
            return;
        }
        self.begin_bootstrap();
    }

    fn begin_lookup(&mut self) {
        if self.phase != Phase::Ready || self.selection.is_empty() {
            return;
        }
        let (Some(base), Some(target)) = (
            self.selection.current_base(),
            self.selection.current_target(),
        ) else {
            return;
        };
        let base = base.to_string();

        self.lookup_seq += 1;
        let seq = self.lookup_seq;
        debug!("Starting lookup #{seq}: {base} -> {target}");
        self.presenter.show_lookup_loading();

        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = match client.fetch_rates(&base).await {
                Ok(raw) => parse::parse_rate(&raw, &target),
                Err(e) => RateResult::TransportError(e.to_string()),
            };
            let _ = events.send(AppEvent::LookupDone { seq, result });
        });
    }

    fn on_lookup_done(&mut self, seq: u64, result: RateResult) {
        if seq != self.lookup_seq {
            debug!("Discarding superseded lookup #{seq} (latest is #{})", self.lookup_seq);
            return;
        }
        debug!("Lookup #{seq} completed: {result:?}");
        self.presenter.render_result(&result_text(&result));
    }

    fn on_base_selected(&mut self, index: usize) {
        if self.phase != Phase::Ready {
            debug!("Ignoring base selection during bootstrap");
            return;
        }
        if !self.selection.set_base_index(index) {
            debug!("Ignoring out-of-range base index {index}");
            return;
        }
        self.presenter
            .render_base_list(self.selection.currencies(), index);
        self.presenter.render_target_list(&self.selection.target_list(), 0);
        self.begin_lookup();
    }

    fn on_target_selected(&mut self, index: usize) {
        if self.phase != Phase::Ready {
            debug!("Ignoring target selection during bootstrap");
            return;
        }
        if !self.selection.set_target_index(index) {
            debug!("Ignoring out-of-range target index {index}");
            return;
        }
        self.presenter
            .render_target_list(&self.selection.target_list(), index);
        self.begin_lookup();
    }
}

/// Fixed mapping from lookup outcomes to display text. Owned by the core so
/// every failure renders the same way regardless of the front-end.
pub fn result_text(result: &RateResult) -> String {
    match result {
        RateResult::Rate(value) => format!("{value}"),
        RateResult::NotFound(currency) => format!("no rate available for {currency}"),
        RateResult::MalformedResponse(detail) | RateResult::TransportError(detail) => {
            detail.clone()
        }
    }
}
