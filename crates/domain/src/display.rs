// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation projection of selection statuses.
//!
//! This mapping is cosmetic only and must never be consulted to authorize
//! anything. Unlike the status registry, projection is total: unrecognized
//! values degrade to a generic label and a neutral tone, because display must
//! keep working even when logic has already flagged the record as corrupt.

use crate::status::{SelectionStatus, StatusStep};
use serde::Serialize;
use std::str::FromStr;

/// Semantic classification of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Unrecognized or informational.
    Neutral,
    /// Normal funnel progression.
    Active,
    /// Waiting on an approval or a replacement.
    Warning,
    /// Closed successfully.
    Success,
    /// Cancelled.
    Danger,
}

/// Badge content rendered next to the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepBadge {
    /// A step counter, e.g. "3 / 11".
    Step {
        /// The 1-based funnel position.
        ordinal: u8,
        /// The funnel length.
        total: u8,
    },
    /// A symbolic badge for statuses outside the funnel.
    Symbol {
        /// The raw status value.
        symbol: String,
    },
}

/// Display metadata for a selection status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayMeta {
    /// Human-readable label.
    pub label: String,
    /// Badge tone.
    pub tone: Tone,
    /// Step counter or symbol.
    pub badge: StepBadge,
}

/// Projects a raw status value into display metadata.
///
/// Deterministic and side-effect free. Never fails: unknown values get the
/// underscore-stripped raw value as label and a neutral tone.
#[must_use]
pub fn project_display(status: &str) -> DisplayMeta {
    SelectionStatus::from_str(status).map_or_else(
        |_| DisplayMeta {
            label: status.replace('_', " "),
            tone: Tone::Neutral,
            badge: StepBadge::Symbol {
                symbol: status.to_string(),
            },
        },
        project_known,
    )
}

/// Projects a registry status into display metadata.
#[must_use]
pub fn project_known(status: SelectionStatus) -> DisplayMeta {
    let badge = match status.step() {
        StatusStep::Linear { ordinal, total } => StepBadge::Step { ordinal, total },
        StatusStep::Special { symbol } => StepBadge::Symbol {
            symbol: symbol.to_string(),
        },
    };
    DisplayMeta {
        label: label_of(status).to_string(),
        tone: tone_of(status),
        badge,
    }
}

const fn label_of(status: SelectionStatus) -> &'static str {
    match status {
        SelectionStatus::FatturaAvSaldata => "Fattura AV saldata",
        SelectionStatus::HrAssegnata => "HR assegnata",
        SelectionStatus::PrimaCallCompletata => "Prima call completata",
        SelectionStatus::RaccoltaJobInApprovazioneCliente => {
            "Raccolta job in approvazione cliente"
        }
        SelectionStatus::RaccoltaJobApprovataCliente => "Raccolta job approvata cliente",
        SelectionStatus::BozzaAnnuncioInApprovazioneCeo => "Bozza annuncio in approvazione CEO",
        SelectionStatus::AnnuncioApprovato => "Annuncio approvato",
        SelectionStatus::AnnuncioPubblicato => "Annuncio pubblicato",
        SelectionStatus::CandidatureRicevute => "Candidature ricevute",
        SelectionStatus::ColloquiInCorso => "Colloqui in corso",
        SelectionStatus::PropostaCandidati => "Proposta candidati",
        SelectionStatus::SelezioniInSostituzione => "Selezioni in sostituzione",
        SelectionStatus::Chiusa => "Chiusa",
        SelectionStatus::Annullata => "Annullata",
    }
}

const fn tone_of(status: SelectionStatus) -> Tone {
    match status {
        SelectionStatus::RaccoltaJobInApprovazioneCliente
        | SelectionStatus::BozzaAnnuncioInApprovazioneCeo
        | SelectionStatus::SelezioniInSostituzione => Tone::Warning,
        SelectionStatus::Chiusa => Tone::Success,
        SelectionStatus::Annullata => Tone::Danger,
        _ => Tone::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_project_step_badges() {
        let meta = project_display("COLLOQUI_IN_CORSO");
        assert_eq!(meta.label, "Colloqui in corso");
        assert_eq!(meta.tone, Tone::Active);
        assert_eq!(
            meta.badge,
            StepBadge::Step {
                ordinal: 10,
                total: 11
            }
        );
    }

    #[test]
    fn test_terminal_tones() {
        assert_eq!(project_display("CHIUSA").tone, Tone::Success);
        assert_eq!(project_display("ANNULLATA").tone, Tone::Danger);
        assert_eq!(
            project_display("SELEZIONI_IN_SOSTITUZIONE").tone,
            Tone::Warning
        );
    }

    #[test]
    fn test_unknown_status_degrades_gracefully() {
        let meta = project_display("STATO_SCONOSCIUTO");
        assert_eq!(meta.label, "STATO SCONOSCIUTO");
        assert_eq!(meta.tone, Tone::Neutral);
        assert_eq!(
            meta.badge,
            StepBadge::Symbol {
                symbol: String::from("STATO_SCONOSCIUTO"),
            }
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        for status in SelectionStatus::ALL {
            let first = project_display(status.as_str());
            let second = project_display(status.as_str());
            assert_eq!(first, second);
        }
        assert_eq!(project_display("BOH"), project_display("BOH"));
    }
}
