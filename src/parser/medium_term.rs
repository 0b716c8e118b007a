use crate::model::prediction::{MediumTermPrediction, Prediction};
use crate::parser::{parse_float, parse_sky, parse_wind, RecordBuilder};
use chrono::{DateTime, Utc};

/// Accumulates one medium-term record per `<item>`, created lazily on the
/// first recognized field.
#[derive(Debug, Default)]
pub(crate) struct MediumTermBuilder {
    current: Option<MediumTermPrediction>,
}

impl MediumTermBuilder {
    fn record(&mut self) -> &mut MediumTermPrediction {
        self.current.get_or_insert_with(MediumTermPrediction::default)
    }
}

impl RecordBuilder for MediumTermBuilder {
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
            "ceo" => self.record().sky = parse_sky(text),
            "vento" => self.record().wind = parse_wind(text),
            "pChoiva" => {
                let record = self.record();
                if let Some(value) = parse_float(text) {
                    record.rain_probability = value;
                }
            }
            _ => {}
        }
    }

    fn take_record(&mut self) -> Option<Prediction> {
        self.current.take().map(Prediction::MediumTerm)
    }
}
