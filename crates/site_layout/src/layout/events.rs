//! Event types and sinks for observing layout runs.
//!
//! This module defines [`LayoutEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while executing a run via
//! [`crate::layout::runner::generate_with_events`] or
//! [`crate::layout::runner::LayoutRunner`]. Sinks only observe: the building
//! sequence stays owned by the run and is handed out once it is complete.
use crate::layout::runner::LayoutRun;
use crate::layout::validator::Rejection;
use crate::site::{FootprintId, PlacedBuilding};

/// Describes events emitted by a layout run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum LayoutEvent {
    /// Emitted when a run starts.
    RunStarted {
        /// Number of buildings requested.
        target_count: usize,
        /// Attempt budget of the run.
        max_attempts: usize,
        /// Footprint ids in selection order.
        footprints: Vec<FootprintId>,
    },

    /// Emitted when a candidate failed validation.
    CandidateRejected {
        /// 1-based attempt number.
        attempt: usize,
        /// Footprint drawn for this attempt.
        footprint: FootprintId,
        /// First constraint the candidate violated.
        reason: Rejection,
    },

    /// Emitted when a candidate was accepted.
    BuildingPlaced {
        /// 1-based attempt number.
        attempt: usize,
        /// Position of the building in the final sequence.
        index: usize,
        /// The accepted building.
        building: PlacedBuilding,
    },

    /// Emitted when the attempt budget ran out before the target count was reached.
    BudgetExhausted {
        /// Buildings placed when the budget ran out.
        placed: usize,
        /// Number of buildings requested.
        target_count: usize,
        /// Attempts consumed.
        attempts: usize,
    },

    /// Emitted when the run finishes.
    RunFinished {
        /// Complete result of the run.
        run: LayoutRun,
    },

    /// Non-fatal warning generated during a run.
    Warning {
        /// Context string (e.g. footprint id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`LayoutEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutEventKind {
    RunStarted,
    CandidateRejected,
    BuildingPlaced,
    BudgetExhausted,
    RunFinished,
    Warning,
}

impl LayoutEvent {
    pub fn kind(&self) -> LayoutEventKind {
        match self {
            LayoutEvent::RunStarted { .. } => LayoutEventKind::RunStarted,
            LayoutEvent::CandidateRejected { .. } => LayoutEventKind::CandidateRejected,
            LayoutEvent::BuildingPlaced { .. } => LayoutEventKind::BuildingPlaced,
            LayoutEvent::BudgetExhausted { .. } => LayoutEventKind::BudgetExhausted,
            LayoutEvent::RunFinished { .. } => LayoutEventKind::RunFinished,
            LayoutEvent::Warning { .. } => LayoutEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`LayoutEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: LayoutEvent);

    /// Whether the sink cares about events of `kind`. Lets the runner skip building them.
    #[inline]
    fn wants(&self, _kind: LayoutEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = LayoutEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: LayoutEvent) {}

    #[inline]
    fn wants(&self, _kind: LayoutEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    #[inline]
    fn send(&mut self, event: LayoutEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<LayoutEvent>,
    only: Option<Vec<LayoutEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            only: None,
        }
    }

    /// Collects only events of the listed kinds.
    pub fn only(kinds: &[LayoutEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<LayoutEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[LayoutEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: LayoutEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: LayoutEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: LayoutEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: LayoutEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
