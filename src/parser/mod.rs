//! Streaming parser for the MeteoGalicia forecast feeds.
//!
//! The feeds are RSS documents whose `<item>` elements carry forecast fields
//! next to ordinary headline fields. Parsing is event-driven and tolerant:
//! unknown elements are skipped, unparsable values are logged and dropped,
//! and an item only yields a record once at least one recognized forecast
//! field appeared in it. The batch is only returned when the document element
//! closes, so a truncated download never yields a partial batch.

mod error;
mod medium_term;
mod short_term;

pub use error::FeedParseError;

use crate::cache::FeedKind;
use crate::model::prediction::{Prediction, SkyState, WindState};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use log::warn;
use medium_term::MediumTermBuilder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use short_term::ShortTermBuilder;

/// Publisher generation timestamps carry no format declaration in the feed.
const CREATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses one feed document into a batch of predictions.
///
/// Items appear in document order. Feed-level fields outside items (channel
/// title and the like) are ignored.
pub fn parse_feed(
    station_id: i32,
    kind: FeedKind,
    bytes: &[u8],
) -> Result<Vec<Prediction>, FeedParseError> {
    match kind {
        FeedKind::ShortTerm => run_parser(station_id, bytes, ShortTermBuilder::default()),
        FeedKind::MediumTerm => run_parser(station_id, bytes, MediumTermBuilder::default()),
    }
}

/// Per-kind record assembly driven by the shared event loop.
///
/// Generic fields (`tMax`, `tMin`, the two dates) go through dedicated
/// setters; everything else lands in [`apply_field`](RecordBuilder::apply_field)
/// keyed by element name. Every setter instantiates the pending record, even
/// when its value could not be parsed, so a record with one bad field still
/// flushes at the end of its item.
trait RecordBuilder {
    fn set_date(&mut self, date: Option<DateTime<Utc>>);
    fn set_creation_date(&mut self, date: Option<DateTime<Utc>>);
    fn set_max_temp(&mut self, value: Option<i32>);
    fn set_min_temp(&mut self, value: Option<i32>);
    fn apply_field(&mut self, field: &str, text: &str);
    fn take_record(&mut self) -> Option<Prediction>;
}

fn run_parser<B: RecordBuilder>(
    station_id: i32,
    bytes: &[u8],
    mut builder: B,
) -> Result<Vec<Prediction>, FeedParseError> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut text = String::new();
    let mut date_format: Option<String> = None;
    let mut predictions = Vec::new();
    let mut document_closed = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| FeedParseError::Xml { station_id, source })?;
        match event {
            Event::Start(start) => {
                if let Some(format) = declared_date_format(&start)
                    .map_err(|source| FeedParseError::Xml { station_id, source })?
                {
                    date_format = Some(format);
                }
                text.clear();
            }
            Event::Empty(start) => {
                if let Some(format) = declared_date_format(&start)
                    .map_err(|source| FeedParseError::Xml { station_id, source })?
                {
                    date_format = Some(format);
                }
                let field = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                close_element(
                    &mut builder,
                    &mut predictions,
                    &mut document_closed,
                    &field,
                    "",
                    date_format.as_deref(),
                );
            }
            Event::Text(t) => {
                let unescaped = t
                    .unescape()
                    .map_err(|source| FeedParseError::Xml { station_id, source })?;
                text.push_str(&unescaped);
            }
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::End(end) => {
                let field = String::from_utf8_lossy(end.local_name().as_ref()).into_owned();
                close_element(
                    &mut builder,
                    &mut predictions,
                    &mut document_closed,
                    &field,
                    &text,
                    date_format.as_deref(),
                );
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !document_closed {
        return Err(FeedParseError::Truncated { station_id });
    }
    Ok(predictions)
}

fn close_element<B: RecordBuilder>(
    builder: &mut B,
    predictions: &mut Vec<Prediction>,
    document_closed: &mut bool,
    field: &str,
    text: &str,
    date_format: Option<&str>,
) {
    match field {
        "item" => {
            if let Some(prediction) = builder.take_record() {
                predictions.push(prediction);
            }
        }
        "rss" => *document_closed = true,
        "dataPredicion" => builder.set_date(parse_declared_date(text, date_format)),
        "dataCreacion" => builder.set_creation_date(parse_creation_date(text)),
        "tMax" => builder.set_max_temp(parse_int(text)),
        "tMin" => builder.set_min_temp(parse_int(text)),
        other => builder.apply_field(other, text),
    }
}

/// Reads the `formato` attribute of a `<dataPredicion>` element, translated
/// to a chrono format string. `None` when the element is something else or
/// carries no declaration.
fn declared_date_format(start: &BytesStart<'_>) -> Result<Option<String>, quick_xml::Error> {
    if start.local_name().as_ref() != b"dataPredicion" {
        return Ok(None);
    }
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"formato" {
            let value = attr.unescape_value()?;
            return Ok(Some(translate_date_pattern(&value)));
        }
    }
    Ok(None)
}

/// Translates the Java-style date patterns the feed declares (`dd/MM/yyyy`
/// and friends) into chrono format strings. Quoted sections become literals,
/// `''` is an escaped quote.
fn translate_date_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                for literal in chars.by_ref() {
                    if literal == '\'' {
                        break;
                    }
                    if literal == '%' {
                        out.push_str("%%");
                    } else {
                        out.push(literal);
                    }
                }
            }
            'y' | 'M' | 'd' | 'H' | 'h' | 'm' | 's' => {
                while chars.peek() == Some(&c) {
                    chars.next();
                }
                out.push_str(match c {
                    'y' => "%Y",
                    'M' => "%m",
                    'd' => "%d",
                    'H' => "%H",
                    'h' => "%I",
                    'm' => "%M",
                    's' => "%S",
                    _ => unreachable!(),
                });
            }
            '%' => out.push_str("%%"),
            other => out.push(other),
        }
    }
    out
}

fn parse_declared_date(text: &str, format: Option<&str>) -> Option<DateTime<Utc>> {
    let format = format?;
    let text = text.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
        return Some(datetime.and_utc());
    }
    // Date-only declarations parse to midnight.
    NaiveDate::parse_from_str(text, format)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_creation_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    match NaiveDateTime::parse_from_str(text, CREATION_DATE_FORMAT) {
        Ok(datetime) => Some(datetime.and_utc()),
        Err(_) => {
            warn!("unparsable creation date in feed: [{text}]");
            None
        }
    }
}

fn parse_int(text: &str) -> Option<i32> {
    match text.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("unparsable integer in feed: [{text}]");
            None
        }
    }
}

fn parse_float(text: &str) -> Option<f32> {
    match text.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("unparsable number in feed: [{text}]");
            None
        }
    }
}

/// Maps a sky code from the feed, folding the `2xx` night range onto the day
/// range first. Day/night presentation is left to the caller.
fn parse_sky(text: &str) -> Option<SkyState> {
    let code: i32 = parse_int(text)?;
    let code = if code > 200 { code - 100 } else { code };
    let state = SkyState::from_code(code);
    if state.is_none() {
        warn!("unknown sky code in feed: {code}");
    }
    state
}

fn parse_wind(text: &str) -> Option<WindState> {
    let code: i32 = parse_int(text)?;
    let state = WindState::from_code(code);
    if state.is_none() {
        warn!("unknown wind code in feed: {code}");
    }
    state
}
