use crate::gesture_constants::DEFAULT_COORDINATE;
use crate::host::SignalTarget;
use smallvec::SmallVec;

/// Horizontal coordinates of the contact points carried by a touch signal.
pub type TouchPoints = SmallVec<[f64; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFamily {
    Pointer,
    Touch,
}

/// Host input signals a swipe surface listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    PointerDown,
    PointerMove,
    PointerUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl Signal {
    pub const ALL: [Signal; 6] = [
        Signal::PointerDown,
        Signal::PointerMove,
        Signal::PointerUp,
        Signal::TouchStart,
        Signal::TouchMove,
        Signal::TouchEnd,
    ];

    /// DOM event type name.
    pub fn event_name(self) -> &'static str {
        match self {
            Signal::PointerDown => "pointerdown",
            Signal::PointerMove => "pointermove",
            Signal::PointerUp => "pointerup",
            Signal::TouchStart => "touchstart",
            Signal::TouchMove => "touchmove",
            Signal::TouchEnd => "touchend",
        }
    }

    pub fn phase(self) -> PointerPhase {
        match self {
            Signal::PointerDown | Signal::TouchStart => PointerPhase::Start,
            Signal::PointerMove | Signal::TouchMove => PointerPhase::Move,
            Signal::PointerUp | Signal::TouchEnd => PointerPhase::End,
        }
    }

    pub fn family(self) -> InputFamily {
        match self {
            Signal::PointerDown | Signal::PointerMove | Signal::PointerUp => InputFamily::Pointer,
            Signal::TouchStart | Signal::TouchMove | Signal::TouchEnd => InputFamily::Touch,
        }
    }

    /// Where the listener is registered.
    ///
    /// End signals are observed on the window so a contact released outside
    /// the surface still closes the session.
    pub fn target(self) -> SignalTarget {
        match self.phase() {
            PointerPhase::End => SignalTarget::Window,
            PointerPhase::Start | PointerPhase::Move => SignalTarget::Surface,
        }
    }
}

/// One host input signal, reduced to what swipe tracking reads.
#[derive(Clone, Debug, PartialEq)]
pub struct RawInput {
    pub signal: Signal,
    /// Unified pointer coordinate (`clientX`), when the signal has one.
    pub client_x: Option<f64>,
    pub pointer_id: Option<i32>,
    /// Contacts currently on the surface.
    pub touches: TouchPoints,
    /// Contacts that changed with this signal; the released ones on touch end.
    pub changed_touches: TouchPoints,
}

impl RawInput {
    pub fn new(signal: Signal) -> Self {
        Self {
            signal,
            client_x: None,
            pointer_id: None,
            touches: TouchPoints::new(),
            changed_touches: TouchPoints::new(),
        }
    }

    pub fn pointer(signal: Signal, client_x: f64, pointer_id: i32) -> Self {
        Self::new(signal)
            .with_client_x(client_x)
            .with_pointer_id(pointer_id)
    }

    pub fn touch(signal: Signal, touches: &[f64], changed_touches: &[f64]) -> Self {
        Self {
            touches: touches.iter().copied().collect(),
            changed_touches: changed_touches.iter().copied().collect(),
            ..Self::new(signal)
        }
    }

    pub fn with_client_x(mut self, client_x: f64) -> Self {
        self.client_x = Some(client_x);
        self
    }

    pub fn with_pointer_id(mut self, pointer_id: i32) -> Self {
        self.pointer_id = Some(pointer_id);
        self
    }

    pub fn phase(&self) -> PointerPhase {
        self.signal.phase()
    }

    /// Horizontal coordinate of this signal.
    ///
    /// Resolution order is shared by both input families: the unified pointer
    /// coordinate, then the first touch point (the first changed touch on
    /// end signals), then [`DEFAULT_COORDINATE`]. A unified coordinate of
    /// exactly zero (or NaN) counts as absent.
    pub fn resolve_x(&self) -> f64 {
        let fallback = match self.phase() {
            PointerPhase::End => self.changed_touches.first(),
            PointerPhase::Start | PointerPhase::Move => self.touches.first(),
        };
        self.client_x
            .filter(|x| is_set(*x))
            .or_else(|| fallback.copied().filter(|x| is_set(*x)))
            .unwrap_or(DEFAULT_COORDINATE)
    }
}

fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
