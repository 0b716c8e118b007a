//! Forecast records attached to a station, plus the closed sky/wind code
//! enumerations used by the MeteoGalicia feeds.

use chrono::{DateTime, Utc};

/// Sky condition reported by the feeds.
///
/// The feeds encode the sky as a numeric code: `1xx` for daytime states and
/// `2xx` for the same states at night. [`SkyState::from_code`] expects a code
/// already folded into the `1xx` range; day/night presentation is a concern of
/// the rendering layer, not of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyState {
    /// Code 101: clear sky.
    Clear,
    /// Code 102: high clouds.
    HighClouds,
    /// Code 103: clouds and clear intervals.
    CloudAndClear,
    /// Code 104: mostly cloudy.
    MostlyCloudy,
    /// Code 105: cloudy.
    Cloudy,
    /// Code 106: fog.
    Fog,
    /// Codes 107 and 108: shower.
    Shower,
    /// Code 109: snow shower.
    ShowerSnow,
    /// Code 110: dew ("orballo").
    Dew,
    /// Code 111: rain.
    Rain,
    /// Code 112: snow.
    Snow,
    /// Code 113: storm.
    Storm,
    /// Code 114: haze.
    Haze,
    /// Code 115: fog patches.
    FogPatches,
    /// Code 116: medium clouds.
    MediumClouds,
    /// Code 117: light rain.
    LightRain,
    /// Code 118: light shower.
    LightShower,
    /// Code 119: light storm.
    LightStorm,
    /// Code 120: sleet.
    Sleet,
    /// Code 121: hail.
    Hail,
}

impl SkyState {
    /// Maps a day-range feed code (101..=121) to a `SkyState`.
    ///
    /// Returns `None` for codes outside the known table; callers treat that
    /// as "unknown" rather than an error.
    pub fn from_code(code: i32) -> Option<SkyState> {
        match code {
            101 => Some(SkyState::Clear),
            102 => Some(SkyState::HighClouds),
            103 => Some(SkyState::CloudAndClear),
            104 => Some(SkyState::MostlyCloudy),
            105 => Some(SkyState::Cloudy),
            106 => Some(SkyState::Fog),
            107 | 108 => Some(SkyState::Shower),
            109 => Some(SkyState::ShowerSnow),
            110 => Some(SkyState::Dew),
            111 => Some(SkyState::Rain),
            112 => Some(SkyState::Snow),
            113 => Some(SkyState::Storm),
            114 => Some(SkyState::Haze),
            115 => Some(SkyState::FogPatches),
            116 => Some(SkyState::MediumClouds),
            117 => Some(SkyState::LightRain),
            118 => Some(SkyState::LightShower),
            119 => Some(SkyState::LightStorm),
            120 => Some(SkyState::Sleet),
            121 => Some(SkyState::Hail),
            _ => None,
        }
    }
}

/// Wind condition reported by the feeds.
///
/// Encoded as a numeric code starting at 299 (calm), then variable, then
/// eight compass directions at four strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum WindState {
    Calm,
    Variable,
    LightNorth,
    LightNortheast,
    LightEast,
    LightSoutheast,
    LightSouth,
    LightSouthwest,
    LightWest,
    LightNorthwest,
    MildNorth,
    MildNortheast,
    MildEast,
    MildSoutheast,
    MildSouth,
    MildSouthwest,
    MildWest,
    MildNorthwest,
    StrongNorth,
    StrongNortheast,
    StrongEast,
    StrongSoutheast,
    StrongSouth,
    StrongSouthwest,
    StrongWest,
    StrongNorthwest,
    VeryStrongNorth,
    VeryStrongNortheast,
    VeryStrongEast,
    VeryStrongSoutheast,
    VeryStrongSouth,
    VeryStrongSouthwest,
    VeryStrongWest,
    VeryStrongNorthwest,
}

impl WindState {
    const TABLE: [WindState; 34] = [
        WindState::Calm,
        WindState::Variable,
        WindState::LightNorth,
        WindState::LightNortheast,
        WindState::LightEast,
        WindState::LightSoutheast,
        WindState::LightSouth,
        WindState::LightSouthwest,
        WindState::LightWest,
        WindState::LightNorthwest,
        WindState::MildNorth,
        WindState::MildNortheast,
        WindState::MildEast,
        WindState::MildSoutheast,
        WindState::MildSouth,
        WindState::MildSouthwest,
        WindState::MildWest,
        WindState::MildNorthwest,
        WindState::StrongNorth,
        WindState::StrongNortheast,
        WindState::StrongEast,
        WindState::StrongSoutheast,
        WindState::StrongSouth,
        WindState::StrongSouthwest,
        WindState::StrongWest,
        WindState::StrongNorthwest,
        WindState::VeryStrongNorth,
        WindState::VeryStrongNortheast,
        WindState::VeryStrongEast,
        WindState::VeryStrongSoutheast,
        WindState::VeryStrongSouth,
        WindState::VeryStrongSouthwest,
        WindState::VeryStrongWest,
        WindState::VeryStrongNorthwest,
    ];

    /// Maps a feed wind code (299-based) to a `WindState`, or `None` when the
    /// code falls outside the table.
    pub fn from_code(code: i32) -> Option<WindState> {
        let index = code - 299;
        if index < 0 {
            return None;
        }
        Self::TABLE.get(index as usize).copied()
    }
}

/// Short-term forecast: one day, with morning/afternoon/night granularity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortTermPrediction {
    /// Day the forecast is for.
    pub date: Option<DateTime<Utc>>,
    /// When the feed publisher generated this forecast.
    pub creation_date: Option<DateTime<Utc>>,
    pub max_temp: i32,
    pub min_temp: i32,
    pub sky_morning: Option<SkyState>,
    pub sky_afternoon: Option<SkyState>,
    pub sky_night: Option<SkyState>,
    pub wind_morning: Option<WindState>,
    pub wind_afternoon: Option<WindState>,
    pub wind_night: Option<WindState>,
    /// Rain probability in percent.
    pub rain_morning: f32,
    pub rain_afternoon: f32,
    pub rain_night: f32,
    /// Free-form forecaster comment, when the feed carries one.
    pub comment: Option<String>,
}

/// Medium-term forecast: one day, single sky/wind/rain value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediumTermPrediction {
    pub date: Option<DateTime<Utc>>,
    pub creation_date: Option<DateTime<Utc>>,
    pub max_temp: i32,
    pub min_temp: i32,
    pub sky: Option<SkyState>,
    pub wind: Option<WindState>,
    /// Rain probability in percent.
    pub rain_probability: f32,
}

/// A forecast record attached to a [`Station`](crate::Station).
///
/// The two variants come from two independent feeds with different field
/// granularity; a station's prediction list holds the union of its most
/// recent short-term batch and its most recent medium-term batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    ShortTerm(ShortTermPrediction),
    MediumTerm(MediumTermPrediction),
}

impl Prediction {
    /// Day the forecast is for, if the feed carried a parsable one.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        match self {
            Prediction::ShortTerm(p) => p.date,
            Prediction::MediumTerm(p) => p.date,
        }
    }

    /// When the feed publisher generated this forecast.
    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Prediction::ShortTerm(p) => p.creation_date,
            Prediction::MediumTerm(p) => p.creation_date,
        }
    }

    pub fn max_temp(&self) -> i32 {
        match self {
            Prediction::ShortTerm(p) => p.max_temp,
            Prediction::MediumTerm(p) => p.max_temp,
        }
    }

    pub fn min_temp(&self) -> i32 {
        match self {
            Prediction::ShortTerm(p) => p.min_temp,
            Prediction::MediumTerm(p) => p.min_temp,
        }
    }
}
