//! # W-Shape Database
//!
//! Section properties for wide-flange shapes per the AISC Shapes Database
//! v16.0, restricted to the fields the compression engine consumes. The
//! built-in table carries a handful of common column shapes so the engine
//! is usable without an external data file.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::sections::builtin_shapes;
//!
//! let db = builtin_shapes();
//! let shape = db.lookup("W14X90").unwrap();
//! assert_eq!(shape.area_in2, 26.5);
//!
//! // Lookup is case-insensitive
//! assert!(db.lookup("w14x90").is_ok());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::compression::{
    calculate, BracingConfiguration, ColumnInput, DesignMethod, SectionGeometry, SteelMaterial,
};
use crate::errors::{CalcError, CalcResult};

/// Properties of a wide-flange shape.
///
/// Field names follow the AISC Shapes Database columns (W, A, d, bf, tf,
/// tw, kdes, Ix, Iy, J, Cw), suffixed with their units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WShape {
    /// AISC label (e.g., "W14X90")
    pub label: String,
    /// Nominal weight (lb/ft)
    pub weight_plf: f64,
    /// Gross cross-sectional area (in²)
    pub area_in2: f64,
    /// Overall depth (in)
    pub depth_in: f64,
    /// Flange width (in)
    pub bf_in: f64,
    /// Flange thickness (in)
    pub tf_in: f64,
    /// Web thickness (in)
    pub tw_in: f64,
    /// Design distance from outer flange face to web toe of fillet (in)
    pub kdes_in: f64,
    /// Strong-axis moment of inertia (in⁴)
    pub ix_in4: f64,
    /// Weak-axis moment of inertia (in⁴)
    pub iy_in4: f64,
    /// Torsional constant (in⁴)
    pub j_in4: f64,
    /// Warping constant (in⁶)
    pub cw_in6: f64,
}

impl WShape {
    /// Section geometry for the compression engine
    pub fn geometry(&self) -> SectionGeometry {
        SectionGeometry {
            area_in2: self.area_in2,
            ix_in4: self.ix_in4,
            iy_in4: self.iy_in4,
            j_in4: self.j_in4,
            cw_in6: self.cw_in6,
            depth_in: self.depth_in,
            bf_in: self.bf_in,
            tf_in: self.tf_in,
            tw_in: self.tw_in,
            kdes_in: self.kdes_in,
        }
    }
}

/// Bounds for filtering the shape database.
///
/// All bounds are inclusive and optional; an empty filter matches every
/// shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionFilter {
    /// Minimum nominal weight (lb/ft)
    #[serde(default)]
    pub min_weight_plf: Option<f64>,
    /// Maximum nominal weight (lb/ft)
    #[serde(default)]
    pub max_weight_plf: Option<f64>,
    /// Minimum overall depth (in)
    #[serde(default)]
    pub min_depth_in: Option<f64>,
    /// Maximum overall depth (in)
    #[serde(default)]
    pub max_depth_in: Option<f64>,
    /// Minimum flange width (in)
    #[serde(default)]
    pub min_bf_in: Option<f64>,
    /// Maximum flange width (in)
    #[serde(default)]
    pub max_bf_in: Option<f64>,
}

impl SectionFilter {
    /// Check whether a shape satisfies every stated bound
    pub fn matches(&self, shape: &WShape) -> bool {
        let within = |value: f64, min: Option<f64>, max: Option<f64>| {
            min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
        };
        within(shape.weight_plf, self.min_weight_plf, self.max_weight_plf)
            && within(shape.depth_in, self.min_depth_in, self.max_depth_in)
            && within(shape.bf_in, self.min_bf_in, self.max_bf_in)
    }
}

/// An adequate-section search hit: a shape whose design strength meets the
/// demand, with the strength it was selected at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdequateSection {
    /// AISC label
    pub label: String,
    /// Nominal weight (lb/ft)
    pub weight_plf: f64,
    /// Design strength for the requested method (kips)
    pub design_strength_kips: f64,
}

/// In-memory W-shape database indexed by uppercase label.
#[derive(Debug, Clone, Default)]
pub struct WShapeDb {
    shapes: HashMap<String, WShape>,
}

impl WShapeDb {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a shape, replacing any existing entry with the same label
    pub fn insert(&mut self, shape: WShape) {
        self.shapes.insert(shape.label.to_uppercase(), shape);
    }

    /// Look up a shape by label.
    ///
    /// Label matching is case-insensitive.
    pub fn lookup(&self, label: &str) -> CalcResult<&WShape> {
        let key = label.to_uppercase();
        self.shapes
            .get(&key)
            .ok_or_else(|| CalcError::section_not_found(label))
    }

    /// Number of shapes in the database
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the database is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All shapes matching the filter, sorted by ascending weight.
    ///
    /// Weight ties break on label so the order is stable.
    pub fn filtered(&self, filter: &SectionFilter) -> Vec<&WShape> {
        let mut shapes: Vec<&WShape> = self
            .shapes
            .values()
            .filter(|shape| filter.matches(shape))
            .collect();
        shapes.sort_by(|a, b| {
            a.weight_plf
                .total_cmp(&b.weight_plf)
                .then_with(|| a.label.cmp(&b.label))
        });
        shapes
    }

    /// All shapes, sorted by ascending weight
    pub fn by_weight(&self) -> Vec<&WShape> {
        self.filtered(&SectionFilter::default())
    }

    /// Find every shape whose design strength meets the demand.
    ///
    /// Each matching shape is run through the compression engine with the
    /// given material, bracing, and method. Hits come back sorted by
    /// ascending weight, so the first entry is the lightest adequate
    /// section.
    pub fn adequate_sections(
        &self,
        demand_kips: f64,
        material: &SteelMaterial,
        bracing: &BracingConfiguration,
        method: DesignMethod,
        filter: &SectionFilter,
    ) -> CalcResult<Vec<AdequateSection>> {
        if demand_kips < 0.0 {
            return Err(CalcError::invalid_input(
                "demand_kips",
                demand_kips.to_string(),
                "Demand must be non-negative",
            ));
        }

        let mut hits = Vec::new();
        for shape in self.filtered(filter) {
            let input = ColumnInput {
                label: shape.label.clone(),
                section: shape.geometry(),
                material: *material,
                bracing: *bracing,
            };
            let result = calculate(&input, method)?;
            if result.design_strength_kips >= demand_kips {
                hits.push(AdequateSection {
                    label: shape.label.clone(),
                    weight_plf: shape.weight_plf,
                    design_strength_kips: result.design_strength_kips,
                });
            }
        }
        Ok(hits)
    }
}

static BUILTIN_SHAPES: Lazy<WShapeDb> = Lazy::new(|| {
    let mut db = WShapeDb::new();

    // (label, W, A, d, bf, tf, tw, kdes, Ix, Iy, J, Cw)
    // AISC Shapes Database v16.0
    let shapes = [
        ("W10X22", 22.0, 6.49, 10.2, 5.75, 0.360, 0.240, 0.660, 118.0, 11.4, 0.239, 275.0),
        ("W10X33", 33.0, 9.71, 9.73, 7.96, 0.435, 0.290, 0.935, 171.0, 36.6, 0.583, 791.0),
        ("W14X90", 90.0, 26.5, 14.0, 14.5, 0.710, 0.440, 1.31, 999.0, 362.0, 4.06, 16000.0),
        ("W14X145", 145.0, 42.7, 14.8, 15.5, 1.09, 0.680, 1.69, 1710.0, 677.0, 15.2, 31700.0),
    ];

    for (label, weight, area, d, bf, tf, tw, kdes, ix, iy, j, cw) in shapes {
        db.insert(WShape {
            label: label.to_string(),
            weight_plf: weight,
            area_in2: area,
            depth_in: d,
            bf_in: bf,
            tf_in: tf,
            tw_in: tw,
            kdes_in: kdes,
            ix_in4: ix,
            iy_in4: iy,
            j_in4: j,
            cw_in6: cw,
        });
    }

    db
});

/// Built-in W-shape database
pub fn builtin_shapes() -> &'static WShapeDb {
    &BUILTIN_SHAPES
}
