/// Visual phase of a rendered row.
///
/// `Entering -> Idle` and `Leaving -> Removed` are driven by timers; the
/// delete operation moves a row from `Entering` or `Idle` into `Leaving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Entering,
    Idle,
    Leaving,
    Removed,
}

impl Phase {
    pub fn settle(self) -> Option<Self> {
        match self {
            Phase::Entering => Some(Phase::Idle),
            _ => None,
        }
    }

    pub fn leave(self) -> Option<Self> {
        match self {
            Phase::Entering | Phase::Idle => Some(Phase::Leaving),
            _ => None,
        }
    }

    pub fn finish(self) -> Option<Self> {
        match self {
            Phase::Leaving => Some(Phase::Removed),
            _ => None,
        }
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, Phase::Removed)
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Phase::Entering => "entering",
            Phase::Idle => "idle",
            Phase::Leaving => "leaving",
            Phase::Removed => "removed",
        }
    }
}
