//! YAML case files.
//!
//! A [`Case`] is the key/value record an analysis starts from: boundary
//! temperatures, convective coefficients and areas, and the wall and
//! fin/tube geometry. Every key is optional when parsing; the accessors
//! report the first missing key they need. Values are read in SI base units
//! (kelvin, W/m²·K, m², m, W/m·K).
//!
//! Geometry keys take a scalar or a list of candidates:
//!
//! ```
//! use hx_rating::config::Case;
//!
//! let case = Case::from_yaml(
//!     "
//! case: example
//! arrangement: counter
//! hot_temp_in: 300
//! hot_temp_out: 250
//! cold_temp_in: 200
//! cold_temp_out: 220
//! h_hot: 150
//! area_hot: 2.75
//! h_cold: 10
//! area_cold: 0.001
//! wall_k: 200
//! wall_thickness: 0.002
//! num_fins: [10, 20]
//! fin_length: 0.02
//! fin_width: [0.03, 0.05]
//! fin_thickness: 0.001
//! ",
//! )
//! .unwrap();
//!
//! let results = case.sweep_fins().unwrap();
//! assert_eq!(results.len(), 4);
//! ```

mod field;

use std::io::Read;

use log::debug;
use serde::Deserialize;
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatTransfer, Length, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

pub use field::OneOrMany;

use crate::{
    InvalidInput,
    rating::log_mean_temp_diff,
    support::hx::{Arrangement, StreamTemperatures},
    surface::{ConvectiveSide, ConvectiveSides, FinArray, FinnedPlate, PlateWall, TubeBundle},
    sweep::{SweepAxes, SweepResults, sweep},
};

/// One analysis case as written in a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Case {
    pub case: Option<String>,
    pub arrangement: Option<String>,

    pub hot_temp_in: Option<f64>,
    pub hot_temp_out: Option<f64>,
    pub cold_temp_in: Option<f64>,
    pub cold_temp_out: Option<f64>,

    pub h_hot: Option<f64>,
    pub area_hot: Option<f64>,
    pub h_cold: Option<f64>,
    pub area_cold: Option<f64>,

    pub wall_k: Option<f64>,
    pub wall_thickness: Option<f64>,
    /// Defaults to `area_hot`.
    pub wall_area: Option<f64>,

    pub num_fins: Option<OneOrMany<u32>>,
    pub fin_length: Option<OneOrMany<f64>>,
    pub fin_width: Option<OneOrMany<f64>>,
    pub fin_thickness: Option<OneOrMany<f64>>,

    pub num_tubes: Option<OneOrMany<u32>>,
    pub tube_length: Option<OneOrMany<f64>>,
    pub tube_outer_diameter: Option<OneOrMany<f64>>,
    pub tube_thickness: Option<OneOrMany<f64>>,
}

impl Case {
    /// Parses a case from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Parse`] if the document is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, InvalidInput> {
        let case: Self = serde_yaml::from_str(yaml)?;
        case.log_loaded();
        Ok(case)
    }

    /// Parses a case from a YAML reader, such as an open file.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Parse`] if the document is malformed or
    /// unreadable.
    pub fn from_reader(reader: impl Read) -> Result<Self, InvalidInput> {
        let case: Self = serde_yaml::from_reader(reader)?;
        case.log_loaded();
        Ok(case)
    }

    fn log_loaded(&self) {
        debug!("loaded case `{}`", self.label().unwrap_or("<unnamed>"));
    }

    /// The `case` label, if present.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.case.as_deref()
    }

    /// The flow arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingKey`] or [`InvalidInput::UnknownArrangement`].
    pub fn arrangement(&self) -> Result<Arrangement, InvalidInput> {
        self.arrangement
            .as_deref()
            .ok_or(InvalidInput::MissingKey("arrangement"))?
            .parse()
    }

    /// The four boundary temperatures, in kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingKey`] for the first absent temperature.
    pub fn temperatures(&self) -> Result<StreamTemperatures, InvalidInput> {
        Ok(StreamTemperatures::new(
            temperature(self.hot_temp_in, "hot_temp_in")?,
            temperature(self.hot_temp_out, "hot_temp_out")?,
            temperature(self.cold_temp_in, "cold_temp_in")?,
            temperature(self.cold_temp_out, "cold_temp_out")?,
        ))
    }

    /// Convective coefficients and base areas of both sides.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingKey`] for the first absent value.
    pub fn sides(&self) -> Result<ConvectiveSides, InvalidInput> {
        Ok(ConvectiveSides {
            hot: side((self.h_hot, "h_hot"), (self.area_hot, "area_hot"))?,
            cold: side((self.h_cold, "h_cold"), (self.area_cold, "area_cold"))?,
        })
    }

    /// The plate wall separating the streams.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingKey`] for the first absent value.
    pub fn wall(&self) -> Result<PlateWall, InvalidInput> {
        let area = match self.wall_area {
            Some(area) => area,
            None => require(self.area_hot, "area_hot")?,
        };
        Ok(PlateWall::new(
            Length::new::<meter>(require(self.wall_thickness, "wall_thickness")?),
            self.wall_conductivity()?,
            Area::new::<square_meter>(area),
        ))
    }

    fn wall_conductivity(&self) -> Result<ThermalConductivity, InvalidInput> {
        require(self.wall_k, "wall_k").map(ThermalConductivity::new::<watt_per_meter_kelvin>)
    }

    /// Candidate fin geometries.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingKey`] or [`InvalidInput::EmptyCandidates`].
    pub fn fin_axes(&self) -> Result<SweepAxes, InvalidInput> {
        axes(
            self.num_fins.as_ref(),
            [
                (&self.fin_length, "fin_length"),
                (&self.fin_width, "fin_width"),
                (&self.fin_thickness, "fin_thickness"),
            ],
            "num_fins",
        )
    }

    /// Candidate tube geometries; the sweep width axis is the outer diameter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingKey`] or [`InvalidInput::EmptyCandidates`].
    pub fn tube_axes(&self) -> Result<SweepAxes, InvalidInput> {
        axes(
            self.num_tubes.as_ref(),
            [
                (&self.tube_length, "tube_length"),
                (&self.tube_outer_diameter, "tube_outer_diameter"),
                (&self.tube_thickness, "tube_thickness"),
            ],
            "num_tubes",
        )
    }

    /// LMTD of the case temperatures under its arrangement.
    ///
    /// # Errors
    ///
    /// Any missing key, or any error from [`log_mean_temp_diff`].
    pub fn lmtd(&self) -> Result<TemperatureInterval, InvalidInput> {
        log_mean_temp_diff(self.arrangement()?, &self.temperatures()?)
    }

    /// Heat rate of every fin geometry, with fins of the wall material on
    /// both sides of the plate.
    ///
    /// # Errors
    ///
    /// Any missing key, or any error raised while rating a geometry.
    pub fn sweep_fins(&self) -> Result<SweepResults, InvalidInput> {
        let lmtd = self.lmtd()?;
        let wall = self.wall()?;
        let conductivity = self.wall_conductivity()?;

        sweep(&self.fin_axes()?, &self.sides()?, lmtd, |c| FinnedPlate {
            fins: FinArray {
                count: c.count,
                length: c.length,
                width: c.width,
                thickness: c.thickness,
                conductivity,
            },
            wall,
        })
    }

    /// Heat rate of every tube geometry, with tubes of the wall material.
    ///
    /// # Errors
    ///
    /// Any missing key, or any error raised while rating a geometry.
    pub fn sweep_tubes(&self) -> Result<SweepResults, InvalidInput> {
        let lmtd = self.lmtd()?;
        let conductivity = self.wall_conductivity()?;

        sweep(&self.tube_axes()?, &self.sides()?, lmtd, |c| TubeBundle {
            count: c.count,
            length: c.length,
            outer_diameter: c.width,
            thickness: c.thickness,
            conductivity,
        })
    }
}

fn require<T: Copy>(value: Option<T>, key: &'static str) -> Result<T, InvalidInput> {
    value.ok_or(InvalidInput::MissingKey(key))
}

fn temperature(
    value: Option<f64>,
    key: &'static str,
) -> Result<ThermodynamicTemperature, InvalidInput> {
    require(value, key).map(ThermodynamicTemperature::new::<kelvin>)
}

fn side(
    (h, h_key): (Option<f64>, &'static str),
    (area, area_key): (Option<f64>, &'static str),
) -> Result<ConvectiveSide, InvalidInput> {
    Ok(ConvectiveSide::new(
        HeatTransfer::new::<watt_per_square_meter_kelvin>(require(h, h_key)?),
        Area::new::<square_meter>(require(area, area_key)?),
    ))
}

/// Builds sweep axes from a count field and three length fields.
fn axes(
    counts: Option<&OneOrMany<u32>>,
    lengths: [(&Option<OneOrMany<f64>>, &'static str); 3],
    count_key: &'static str,
) -> Result<SweepAxes, InvalidInput> {
    let [length, width, thickness] = lengths.map(|(field, key)| {
        field
            .clone()
            .ok_or(InvalidInput::MissingKey(key))?
            .into_candidates(key, Length::new::<meter>)
    });

    Ok(SweepAxes {
        counts: counts
            .cloned()
            .ok_or(InvalidInput::MissingKey(count_key))?
            .into_candidates(count_key, |n| n)?,
        lengths: length?,
        widths: width?,
        thicknesses: thickness?,
    })
}
