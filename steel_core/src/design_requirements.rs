//! # Design Requirements (AISC 360-22 Chapter B)
//!
//! Width-to-thickness limits and slenderness classification for plate
//! elements in axial compression, per Table B4.1a.
//!
//! This module is a leaf: the compression engine asks it whether elements
//! are slender, but it depends on nothing else.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::design_requirements::{TableCase, is_slender_for_compression};
//!
//! // Case 1: flanges of rolled I-shapes
//! let case = TableCase::from_number(1, None).unwrap();
//! let limit = case.limiting_ratio(29_000.0, 50.0);
//! assert!((limit - 13.49).abs() < 0.01);
//!
//! assert!(is_slender_for_compression(15.0, limit));
//! assert!(!is_slender_for_compression(10.0, limit));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Width-to-thickness table case per AISC 360-22 Table B4.1a.
///
/// A closed enumeration: construct with [`TableCase::from_number`] to get
/// the range and kc checks, after which [`TableCase::limiting_ratio`] cannot
/// fail. Case 2 (built-up flanges) carries its auxiliary coefficient kc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TableCase {
    /// Case 1: flanges of rolled I-shapes, plates projecting from rolled
    /// I-shapes, outstanding legs of pairs of angles connected continuously
    RolledFlanges,
    /// Case 2: flanges of built-up I-shapes; requires kc
    BuiltUpFlanges { kc: f64 },
    /// Case 3: legs of single angles
    AngleLegs,
    /// Case 4: stems of tees
    TeeStems,
    /// Case 5: webs of doubly symmetric rolled and built-up I-shapes and
    /// channels
    WebsOfIShapes,
    /// Case 6: walls of rectangular HSS
    RectangularHssWalls,
    /// Case 7: flange cover plates and diaphragm plates between lines of
    /// fasteners or welds
    CoverPlates,
    /// Case 8: all other stiffened elements
    OtherStiffenedElements,
    /// Case 9: round HSS
    RoundHss,
}

impl TableCase {
    /// Construct a table case from its row number in Table B4.1a (1-9).
    ///
    /// Case 2 requires the coefficient kc; every other case must omit it.
    /// Returns [`CalcError::InvalidTableCase`] for a selector outside 1-9 or
    /// a missing/non-positive kc.
    pub fn from_number(case: u8, kc: Option<f64>) -> CalcResult<Self> {
        if case == 2 {
            return match kc {
                Some(kc) if kc > 0.0 => Ok(TableCase::BuiltUpFlanges { kc }),
                Some(kc) => Err(CalcError::invalid_table_case(
                    case,
                    format!("kc must be positive, got {}", kc),
                )),
                None => Err(CalcError::invalid_table_case(
                    case,
                    "kc is required for case 2",
                )),
            };
        }
        let table_case = match case {
            1 => TableCase::RolledFlanges,
            3 => TableCase::AngleLegs,
            4 => TableCase::TeeStems,
            5 => TableCase::WebsOfIShapes,
            6 => TableCase::RectangularHssWalls,
            7 => TableCase::CoverPlates,
            8 => TableCase::OtherStiffenedElements,
            9 => TableCase::RoundHss,
            _ => {
                return Err(CalcError::invalid_table_case(
                    case,
                    "Table case must be an integer between 1 and 9",
                ))
            }
        };
        Ok(table_case)
    }

    /// Row number of this case in Table B4.1a
    pub fn case_number(&self) -> u8 {
        match self {
            TableCase::RolledFlanges => 1,
            TableCase::BuiltUpFlanges { .. } => 2,
            TableCase::AngleLegs => 3,
            TableCase::TeeStems => 4,
            TableCase::WebsOfIShapes => 5,
            TableCase::RectangularHssWalls => 6,
            TableCase::CoverPlates => 7,
            TableCase::OtherStiffenedElements => 8,
            TableCase::RoundHss => 9,
        }
    }

    /// Limiting width-to-thickness ratio λr for axial compression.
    ///
    /// `elastic_modulus` and `yield_stress` are in consistent stress units
    /// (ksi throughout this crate).
    pub fn limiting_ratio(&self, elastic_modulus: f64, yield_stress: f64) -> f64 {
        let ratio = elastic_modulus / yield_stress;
        match self {
            TableCase::RolledFlanges => 0.56 * ratio.sqrt(),
            TableCase::BuiltUpFlanges { kc } => 0.64 * (kc * ratio).sqrt(),
            TableCase::AngleLegs => 0.45 * ratio.sqrt(),
            TableCase::TeeStems => 0.75 * ratio.sqrt(),
            TableCase::WebsOfIShapes => 1.49 * ratio.sqrt(),
            TableCase::RectangularHssWalls => 1.40 * ratio.sqrt(),
            TableCase::CoverPlates => 0.40 * ratio.sqrt(),
            TableCase::OtherStiffenedElements => 1.49 * ratio.sqrt(),
            TableCase::RoundHss => 0.11 * ratio,
        }
    }
}

/// Determine if an element is slender for axial compression per Table B4.1a.
///
/// Strict inequality: a ratio exactly at the limit is not slender.
pub fn is_slender_for_compression(wt_ratio: f64, limiting_wt_ratio: f64) -> bool {
    wt_ratio > limiting_wt_ratio
}

/// Determine if a W-section is slender for axial compression.
///
/// Checks the flange (case 1) against bf/(2·tf) and the web (case 5)
/// against (d − kdes)/tw. The `d − kdes` web height here is intentional and
/// differs from the `d − 2·kdes` used by the effective-area calculation in
/// the compression engine.
pub fn w_section_is_slender(
    flange_width: f64,
    flange_thickness: f64,
    section_depth: f64,
    kdes: f64,
    web_thickness: f64,
    yield_stress: f64,
    elastic_modulus: f64,
) -> bool {
    let flange_wt_ratio = flange_width / (2.0 * flange_thickness);
    let web_height = section_depth - kdes;
    let web_wt_ratio = web_height / web_thickness;

    let flange_limit = TableCase::RolledFlanges.limiting_ratio(elastic_modulus, yield_stress);
    let web_limit = TableCase::WebsOfIShapes.limiting_ratio(elastic_modulus, yield_stress);

    is_slender_for_compression(flange_wt_ratio, flange_limit)
        || is_slender_for_compression(web_wt_ratio, web_limit)
}
