//! Observability hook for the rules engine.
//!
//! A [`RulesObserver`] is handed to [`crate::RulesEngine::with_observer`] and
//! receives every [`RulesEvent`] the engine produces. Closures taking a
//! `&RulesEvent` are observers too. The default [`TracingObserver`] forwards
//! events to `tracing`.

use crate::types::{Color, Move, Piece};

/// Why a pseudo-legal move did not make it into the legal list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Destination holds a piece of the mover's color.
    FriendlyFire,
    /// The mover's king is attacked after the move.
    LeavesKingInCheck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulesEvent<'a> {
    Rejected {
        mv: &'a Move,
        color: Color,
        reason: RejectReason,
    },
    Executed {
        mv: &'a Move,
        color: Color,
        captured: Option<Piece>,
    },
    /// `execute_move` was called with an empty source square; nothing changed.
    MissingPiece { mv: &'a Move },
    /// The capture found on the live board differs from the one the move recorded.
    CaptureMismatch {
        mv: &'a Move,
        found: Option<Piece>,
    },
    /// A check query found no king; the color is treated as not in check.
    MissingKing { color: Color },
}

pub trait RulesObserver {
    fn on_event(&self, event: &RulesEvent<'_>);
}

impl<F> RulesObserver for F
where
    F: Fn(&RulesEvent<'_>),
{
    fn on_event(&self, event: &RulesEvent<'_>) {
        self(event)
    }
}

/// Emits each event as a structured `tracing` record.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RulesObserver for TracingObserver {
    fn on_event(&self, event: &RulesEvent<'_>) {
        match *event {
            RulesEvent::Rejected { mv, color, reason } => {
                tracing::trace!(%mv, %color, ?reason, "pseudo-legal move rejected");
            }
            RulesEvent::Executed {
                mv,
                color,
                captured,
            } => {
                tracing::debug!(
                    %mv,
                    %color,
                    captured = ?captured.map(|p| p.kind),
                    castle = mv.is_castle,
                    en_passant = mv.is_en_passant,
                    "move executed"
                );
            }
            RulesEvent::MissingPiece { mv } => {
                tracing::warn!(%mv, "execute_move called on an empty source square");
            }
            RulesEvent::CaptureMismatch { mv, found } => {
                tracing::warn!(
                    %mv,
                    recorded = ?mv.captured,
                    ?found,
                    "capture on the board differs from the move record"
                );
            }
            RulesEvent::MissingKing { color } => {
                tracing::debug!(%color, "no king on the board; treating as not in check");
            }
        }
    }
}

pub(crate) static TRACING_OBSERVER: TracingObserver = TracingObserver;
