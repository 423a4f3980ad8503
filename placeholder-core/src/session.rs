use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::warn;

use crate::fetcher::Fetcher;
use crate::notify::{NotificationSink, Toasts};
use crate::render::{render, TableView};
use crate::state::{Action, Effect, ViewState};

type Wake = Arc<dyn Fn() + Send + Sync>;

/// Drives a [`ViewState`]: runs the reducer's effects and feeds fetch
/// outcomes back into it.
///
/// Fetches run on `runtime`; the owner calls [`Session::drain`] (or awaits
/// [`Session::next_outcome`]) to apply their results on its own thread.
pub struct Session<S = Toasts> {
    state: ViewState,
    fetcher: Fetcher,
    sink: S,
    runtime: Handle,
    outcome_tx: mpsc::UnboundedSender<Action>,
    outcome_rx: mpsc::UnboundedReceiver<Action>,
    wake: Option<Wake>,
}

impl<S: NotificationSink> Session<S> {
    pub fn new(state: ViewState, fetcher: Fetcher, sink: S, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            fetcher,
            sink,
            runtime,
            outcome_tx,
            outcome_rx,
            wake: None,
        }
    }

    /// Called from the fetch task after each outcome is queued.
    pub fn with_wake(mut self, wake: impl Fn() + Send + Sync + 'static) -> Self {
        self.wake = Some(Arc::new(wake));
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn table(&self) -> Option<TableView> {
        render(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) {
        let (next, effects) = std::mem::take(&mut self.state).reduce(action);
        self.state = next;
        for effect in effects {
            self.run(effect);
        }
    }

    /// Applies every outcome that has already arrived. Never blocks.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.outcome_rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Waits for the next fetch outcome and applies it.
    pub async fn next_outcome(&mut self) -> Option<Action> {
        let action = self.outcome_rx.recv().await?;
        self.dispatch(action.clone());
        Some(action)
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch { kind, token, limit } => {
                let fetcher = self.fetcher.clone();
                let outcome_tx = self.outcome_tx.clone();
                let wake = self.wake.clone();
                self.runtime.spawn(async move {
                    let action = match fetcher.fetch(kind, limit).await {
                        Ok(dataset) => Action::FetchSucceeded { token, dataset },
                        Err(err) => Action::FetchFailed {
                            kind,
                            token,
                            message: err.to_string(),
                        },
                    };
                    if outcome_tx.send(action).is_err() {
                        warn!(%kind, "session dropped before fetch completed");
                        return;
                    }
                    if let Some(wake) = wake {
                        wake();
                    }
                });
            }
            Effect::NotifyError(message) => self.sink.notify_error(&message),
        }
    }
}
