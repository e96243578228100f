//! OTLP/JSON encoding of exported spans.
//!
//! Each batch becomes one `{"resourceSpans": [...]}` document, which is the
//! shape OTLP file receivers expect, one document per line.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

const SCOPE_NAME: &str = "zform";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: ResourceAttributes,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Serialize)]
struct ResourceAttributes {
    attributes: Vec<Attribute>,
}

#[derive(Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<Span>,
}

#[derive(Serialize)]
struct Scope {
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Span {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    events: Vec<Event>,
    links: Vec<Link>,
    status: SpanStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    time_unix_nano: String,
    name: String,
    attributes: Vec<Attribute>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Link {
    trace_id: String,
    span_id: String,
    attributes: Vec<Attribute>,
}

#[derive(Serialize)]
struct SpanStatus {
    code: u8,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Attribute {
    key: String,
    value: AnyValue,
}

/// OTLP `AnyValue`; 64-bit integers travel as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
enum AnyValue {
    BoolValue(bool),
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            Value::String(s) => Self::StringValue(s.to_string()),
            // Arrays are rare in our spans; keep them readable.
            Value::Array(_) => Self::StringValue(value.to_string()),
        }
    }
}

/// Encodes span batches for one resource.
pub struct SpanFormatter {
    resource: Vec<Attribute>,
}

impl SpanFormatter {
    pub fn new(resource: &Resource) -> Self {
        Self {
            resource: resource
                .iter()
                .map(|(key, value)| Attribute {
                    key: key.to_string(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Serializes a batch to a single OTLP/JSON line.
    pub fn format_batch(&self, batch: &[SpanData]) -> serde_json::Result<String> {
        let document = Document {
            resource_spans: vec![ResourceSpans {
                resource: ResourceAttributes {
                    attributes: self.resource.clone(),
                },
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(span).collect(),
                }],
            }],
        };
        serde_json::to_string(&document)
    }
}

fn span(data: &SpanData) -> Span {
    let (code, message) = match &data.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    Span {
        trace_id: format!("{:032x}", data.span_context.trace_id()),
        span_id: format!("{:016x}", data.span_context.span_id()),
        parent_span_id: if data.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", data.parent_span_id)
        },
        name: data.name.to_string(),
        kind: kind_code(&data.span_kind),
        start_time_unix_nano: unix_nanos(data.start_time),
        end_time_unix_nano: unix_nanos(data.end_time),
        attributes: attributes(&data.attributes),
        events: data
            .events
            .iter()
            .map(|e| Event {
                time_unix_nano: unix_nanos(e.timestamp),
                name: e.name.to_string(),
                attributes: attributes(&e.attributes),
            })
            .collect(),
        links: data
            .links
            .iter()
            .map(|l| Link {
                trace_id: format!("{:032x}", l.span_context.trace_id()),
                span_id: format!("{:016x}", l.span_context.span_id()),
                attributes: attributes(&l.attributes),
            })
            .collect(),
        status: SpanStatus { code, message },
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<Attribute> {
    pairs
        .iter()
        .map(|kv| Attribute {
            key: kv.key.to_string(),
            value: (&kv.value).into(),
        })
        .collect()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn unix_nanos(at: SystemTime) -> String {
    at.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("resource_attributes", &self.resource.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn attribute_values_use_otlp_tags() {
        let json = serde_json::to_value(AnyValue::from(&Value::I64(42))).unwrap();
        assert_eq!(json, serde_json::json!({ "intValue": "42" }));

        let json = serde_json::to_value(AnyValue::from(&Value::Bool(true))).unwrap();
        assert_eq!(json, serde_json::json!({ "boolValue": true }));
    }

    #[test]
    fn empty_batch_still_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "zform")]);
        let line = SpanFormatter::new(&resource).format_batch(&[]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let rs = &value["resourceSpans"][0];
        assert!(rs["resource"]["attributes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|a| a["key"] == "service.name" && a["value"]["stringValue"] == "zform"));
        assert_eq!(rs["scopeSpans"][0]["scope"]["name"], "zform");
        assert_eq!(rs["scopeSpans"][0]["spans"], serde_json::json!([]));
    }

    #[test]
    fn timestamps_are_nanosecond_strings() {
        let at = UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(unix_nanos(at), "1500000000");
    }
}
