//! Ways a malicious node can distort the reports it makes.

use crate::trust::Report;

const BAD_MOUTH_NOTE: i32 = -1;
const GOOD_MOUTH_NOTE: i32 = 1;
const SET_CONTEXT_VALUE: i32 = 50;
const TIME_DECAY_OFFSET: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attack {
    /// Always reports a negative note.
    BadMouth,
    /// Always reports a positive note.
    GoodMouth,
    /// Alternates between bad and good mouthing, see [`Attack::toggle`].
    OnOff { bad_mouthing: bool },
    /// Pins the service context.
    ServiceSet,
    /// Pins the capability context.
    CapabilitySet,
    /// Claims the report is older than it is.
    TimeDecay,
}

impl Attack {
    pub fn apply(&self, report: Report) -> Report {
        match *self {
            Attack::BadMouth => Report { note: BAD_MOUTH_NOTE, ..report },
            Attack::GoodMouth => Report { note: GOOD_MOUTH_NOTE, ..report },
            Attack::OnOff { bad_mouthing } => Report {
                note: if bad_mouthing { BAD_MOUTH_NOTE } else { GOOD_MOUTH_NOTE },
                ..report
            },
            Attack::ServiceSet => Report { service: SET_CONTEXT_VALUE, ..report },
            Attack::CapabilitySet => Report { capability: SET_CONTEXT_VALUE, ..report },
            Attack::TimeDecay => Report {
                time: report.time.saturating_sub(TIME_DECAY_OFFSET),
                ..report
            },
        }
    }

    /// Flips an on-off attacker between its two modes; other attacks are unchanged.
    pub fn toggle(&mut self) {
        if let Attack::OnOff { bad_mouthing } = self {
            *bad_mouthing = !*bad_mouthing;
        }
    }
}
