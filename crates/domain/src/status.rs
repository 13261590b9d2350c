// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The selection status registry.
//!
//! This module is the single source of truth for valid selection statuses,
//! their funnel ordinal, and their classification. Eleven statuses form the
//! linear funnel a selection normally progresses through; three special
//! statuses sit outside the ordinal sequence.
//!
//! The registry is strict: unknown status values fail with
//! [`DomainError::UnknownStatus`] and are never substituted with a default.
//! Display-layer leniency lives in the presentation projector, not here.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of statuses in the linear funnel.
pub const LINEAR_STEP_TOTAL: u8 = 11;

/// Selection statuses tracking an engagement through the recruiting funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    /// Step 1: the advance invoice has been settled; the engagement is live.
    FatturaAvSaldata,
    /// Step 2: an HR user has been assigned to run the selection.
    HrAssegnata,
    /// Step 3: the kickoff call with the client is done.
    PrimaCallCompletata,
    /// Step 4: the job collection is awaiting client approval.
    RaccoltaJobInApprovazioneCliente,
    /// Step 5: the client approved the job collection.
    RaccoltaJobApprovataCliente,
    /// Step 6: the announcement draft is awaiting CEO approval.
    BozzaAnnuncioInApprovazioneCeo,
    /// Step 7: the announcement has been approved.
    AnnuncioApprovato,
    /// Step 8: the announcement is published.
    AnnuncioPubblicato,
    /// Step 9: applications have been received.
    CandidatureRicevute,
    /// Step 10: interviews are in progress.
    ColloquiInCorso,
    /// Step 11: candidates have been proposed to the client.
    PropostaCandidati,
    /// Special: a placement fell through and the selection re-opened.
    SelezioniInSostituzione,
    /// Terminal: closed successfully.
    Chiusa,
    /// Terminal: cancelled.
    Annullata,
}

/// Step information for a status, as returned by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusStep {
    /// A numbered step of the linear funnel.
    Linear {
        /// The 1-based position in the funnel.
        ordinal: u8,
        /// The funnel length (always [`LINEAR_STEP_TOTAL`]).
        total: u8,
    },
    /// A special status outside the ordinal sequence.
    Special {
        /// The wire identifier of the special status.
        symbol: &'static str,
    },
}

impl SelectionStatus {
    /// Every status in the registry, linear funnel first.
    pub const ALL: [Self; 14] = [
        Self::FatturaAvSaldata,
        Self::HrAssegnata,
        Self::PrimaCallCompletata,
        Self::RaccoltaJobInApprovazioneCliente,
        Self::RaccoltaJobApprovataCliente,
        Self::BozzaAnnuncioInApprovazioneCeo,
        Self::AnnuncioApprovato,
        Self::AnnuncioPubblicato,
        Self::CandidatureRicevute,
        Self::ColloquiInCorso,
        Self::PropostaCandidati,
        Self::SelezioniInSostituzione,
        Self::Chiusa,
        Self::Annullata,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FatturaAvSaldata => "FATTURA_AV_SALDATA",
            Self::HrAssegnata => "HR_ASSEGNATA",
            Self::PrimaCallCompletata => "PRIMA_CALL_COMPLETATA",
            Self::RaccoltaJobInApprovazioneCliente => "RACCOLTA_JOB_IN_APPROVAZIONE_CLIENTE",
            Self::RaccoltaJobApprovataCliente => "RACCOLTA_JOB_APPROVATA_CLIENTE",
            Self::BozzaAnnuncioInApprovazioneCeo => "BOZZA_ANNUNCIO_IN_APPROVAZIONE_CEO",
            Self::AnnuncioApprovato => "ANNUNCIO_APPROVATO",
            Self::AnnuncioPubblicato => "ANNUNCIO_PUBBLICATO",
            Self::CandidatureRicevute => "CANDIDATURE_RICEVUTE",
            Self::ColloquiInCorso => "COLLOQUI_IN_CORSO",
            Self::PropostaCandidati => "PROPOSTA_CANDIDATI",
            Self::SelezioniInSostituzione => "SELEZIONI_IN_SOSTITUZIONE",
            Self::Chiusa => "CHIUSA",
            Self::Annullata => "ANNULLATA",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "FATTURA_AV_SALDATA" => Ok(Self::FatturaAvSaldata),
            "HR_ASSEGNATA" => Ok(Self::HrAssegnata),
            "PRIMA_CALL_COMPLETATA" => Ok(Self::PrimaCallCompletata),
            "RACCOLTA_JOB_IN_APPROVAZIONE_CLIENTE" => Ok(Self::RaccoltaJobInApprovazioneCliente),
            "RACCOLTA_JOB_APPROVATA_CLIENTE" => Ok(Self::RaccoltaJobApprovataCliente),
            "BOZZA_ANNUNCIO_IN_APPROVAZIONE_CEO" => Ok(Self::BozzaAnnuncioInApprovazioneCeo),
            "ANNUNCIO_APPROVATO" => Ok(Self::AnnuncioApprovato),
            "ANNUNCIO_PUBBLICATO" => Ok(Self::AnnuncioPubblicato),
            "CANDIDATURE_RICEVUTE" => Ok(Self::CandidatureRicevute),
            "COLLOQUI_IN_CORSO" => Ok(Self::ColloquiInCorso),
            "PROPOSTA_CANDIDATI" => Ok(Self::PropostaCandidati),
            "SELEZIONI_IN_SOSTITUZIONE" => Ok(Self::SelezioniInSostituzione),
            "CHIUSA" => Ok(Self::Chiusa),
            "ANNULLATA" => Ok(Self::Annullata),
            _ => Err(DomainError::UnknownStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Chiusa | Self::Annullata)
    }

    /// Returns true if this status sits outside the linear funnel.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Self::SelezioniInSostituzione | Self::Chiusa | Self::Annullata
        )
    }

    /// Returns the 1-based funnel ordinal, or `None` for special statuses.
    #[must_use]
    pub const fn ordinal(&self) -> Option<u8> {
        match self {
            Self::FatturaAvSaldata => Some(1),
            Self::HrAssegnata => Some(2),
            Self::PrimaCallCompletata => Some(3),
            Self::RaccoltaJobInApprovazioneCliente => Some(4),
            Self::RaccoltaJobApprovataCliente => Some(5),
            Self::BozzaAnnuncioInApprovazioneCeo => Some(6),
            Self::AnnuncioApprovato => Some(7),
            Self::AnnuncioPubblicato => Some(8),
            Self::CandidatureRicevute => Some(9),
            Self::ColloquiInCorso => Some(10),
            Self::PropostaCandidati => Some(11),
            Self::SelezioniInSostituzione | Self::Chiusa | Self::Annullata => None,
        }
    }

    /// Returns the linear status at a given funnel ordinal.
    #[must_use]
    pub const fn at_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::FatturaAvSaldata),
            2 => Some(Self::HrAssegnata),
            3 => Some(Self::PrimaCallCompletata),
            4 => Some(Self::RaccoltaJobInApprovazioneCliente),
            5 => Some(Self::RaccoltaJobApprovataCliente),
            6 => Some(Self::BozzaAnnuncioInApprovazioneCeo),
            7 => Some(Self::AnnuncioApprovato),
            8 => Some(Self::AnnuncioPubblicato),
            9 => Some(Self::CandidatureRicevute),
            10 => Some(Self::ColloquiInCorso),
            11 => Some(Self::PropostaCandidati),
            _ => None,
        }
    }

    /// Returns the step classification of this status.
    #[must_use]
    pub const fn step(&self) -> StatusStep {
        match self.ordinal() {
            Some(ordinal) => StatusStep::Linear {
                ordinal,
                total: LINEAR_STEP_TOTAL,
            },
            None => StatusStep::Special {
                symbol: self.as_str(),
            },
        }
    }
}

/// Looks up the step information for a raw status value.
///
/// # Errors
///
/// Returns `DomainError::UnknownStatus` if the value is not in the registry.
/// Callers must treat this as a data-integrity fault, not a display fallback.
pub fn step_of(status: &str) -> Result<StatusStep, DomainError> {
    SelectionStatus::parse_str(status).map(|parsed| parsed.step())
}

impl FromStr for SelectionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in SelectionStatus::ALL {
            let s = status.as_str();
            match SelectionStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = SelectionStatus::parse_str("SELEZIONE_FANTASMA");
        assert_eq!(
            result,
            Err(DomainError::UnknownStatus {
                status: String::from("SELEZIONE_FANTASMA"),
            })
        );
    }

    #[test]
    fn test_step_of_rejects_unknown_values() {
        assert!(step_of("").is_err());
        assert!(step_of("fattura_av_saldata").is_err());
        assert!(step_of("CHIUSA ").is_err());
    }

    #[test]
    fn test_linear_ordinals_cover_one_through_eleven() {
        for status in SelectionStatus::ALL {
            match status.step() {
                StatusStep::Linear { ordinal, total } => {
                    assert!(ordinal >= 1, "{status} ordinal below 1");
                    assert!(ordinal <= LINEAR_STEP_TOTAL, "{status} ordinal above total");
                    assert_eq!(total, LINEAR_STEP_TOTAL);
                    assert_eq!(SelectionStatus::at_ordinal(ordinal), Some(status));
                }
                StatusStep::Special { symbol } => {
                    assert!(status.is_special());
                    assert_eq!(symbol, status.as_str());
                }
            }
        }
    }

    #[test]
    fn test_at_ordinal_out_of_range() {
        assert_eq!(SelectionStatus::at_ordinal(0), None);
        assert_eq!(SelectionStatus::at_ordinal(12), None);
    }

    #[test]
    fn test_terminal_classification() {
        assert!(SelectionStatus::Chiusa.is_terminal());
        assert!(SelectionStatus::Annullata.is_terminal());
        assert!(!SelectionStatus::SelezioniInSostituzione.is_terminal());
        for status in SelectionStatus::ALL {
            if status.ordinal().is_some() {
                assert!(!status.is_terminal(), "{status} must not be terminal");
            }
        }
    }

    #[test]
    fn test_serde_wire_names_match_registry() {
        for status in SelectionStatus::ALL {
            let json = serde_json::to_string(&status).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_serde_rejects_unknown_status() {
        let result: Result<SelectionStatus, _> = serde_json::from_str("\"IN_CORSO\"");
        assert!(result.is_err());
    }
}
