use crate::model::prediction::{Prediction, ShortTermPrediction};
use crate::parser::{parse_float, parse_sky, parse_wind, RecordBuilder};
use chrono::{DateTime, Utc};

/// Accumulates one short-term record per `<item>`.
///
/// The record is created lazily on the first recognized field, so items
/// without forecast payload (headline-only entries) never produce a record.
#[derive(Debug, Default)]
pub(crate) struct ShortTermBuilder {
    current: Option<ShortTermPrediction>,
}

impl ShortTermBuilder {
    fn record(&mut self) -> &mut ShortTermPrediction {
        self.current.get_or_insert_with(ShortTermPrediction::default)
    }
}

impl RecordBuilder for ShortTermBuilder {
    fn set_date(&mut self, date: Option<DateTime<Utc>>) {
        self.record().date = date;
    }

    fn set_creation_date(&mut self, date: Option<DateTime<Utc>>) {
        self.record().creation_date = date;
    }

    fn set_max_temp(&mut self, value: Option<i32>) {
        let record = self.record();
        if let Some(value) = value {
            record.max_temp = value;
        }
    }

    fn set_min_temp(&mut self, value: Option<i32>) {
        let record = self.record();
        if let Some(value) = value {
            record.min_temp = value;
        }
    }

    fn apply_field(&mut self, field: &str, text: &str) {
        match field {
            "ceoM" => self.record().sky_morning = parse_sky(text),
            "ceoT" => self.record().sky_afternoon = parse_sky(text),
            "ceoN" => self.record().sky_night = parse_sky(text),
            "ventoM" => self.record().wind_morning = parse_wind(text),
            "ventoT" => self.record().wind_afternoon = parse_wind(text),
            "ventoN" => self.record().wind_night = parse_wind(text),
            "pChoivaM" => {
                let record = self.record();
                if let Some(value) = parse_float(text) {
                    record.rain_morning = value;
                }
            }
            "pChoivaT" => {
                let record = self.record();
                if let Some(value) = parse_float(text) {
                    record.rain_afternoon = value;
                }
            }
            "pChoivaN" => {
                let record = self.record();
                if let Some(value) = parse_float(text) {
                    record.rain_night = value;
                }
            }
            "comentario" => {
                let record = self.record();
                let comment = text.trim();
                if !comment.is_empty() {
                    record.comment = Some(comment.to_string());
                }
            }
            _ => {}
        }
    }

    fn take_record(&mut self) -> Option<Prediction> {
        self.current.take().map(Prediction::ShortTerm)
    }
}
