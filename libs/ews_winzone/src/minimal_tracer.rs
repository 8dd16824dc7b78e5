// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Hand-rolled tracing subscriber for the maintenance tool.
//!
//! Prints events to stdout, filtered by `RUST_LOG` (comma-separated
//! `level` or `target[=level]` entries). Without `RUST_LOG`, warnings and
//! errors still print, so version drift is visible on a bare run.

use std::env;
use std::fmt;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::field::{Field, Visit};
use tracing::{Level, Metadata, Subscriber};
use tracing_core::span;

struct Filter {
    target: Option<String>,
    level: Option<Level>,
}

pub struct MinimalTracer {
    filters: Vec<Filter>,
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

impl MinimalTracer {
    pub fn register() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let mut filters = Vec::new();
        match env::var("RUST_LOG") {
            Ok(value) => {
                for part in value.split(',') {
                    match part.split_once('=') {
                        Some((target, level)) => filters.push(Filter {
                            target: Some(target.to_string()),
                            level: parse_level(level),
                        }),
                        None => match parse_level(part) {
                            Some(level) => filters.push(Filter {
                                target: None,
                                level: Some(level),
                            }),
                            None => filters.push(Filter {
                                target: Some(part.to_string()),
                                level: None,
                            }),
                        },
                    }
                }
            },
            Err(_) => filters.push(Filter {
                target: None,
                level: Some(Level::WARN),
            }),
        }
        tracing::subscriber::set_global_default(MinimalTracer { filters })
    }
}

struct MessageVisitor<'a> {
    text: &'a mut String,
}

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            write!(self.text, "{value:?} ").unwrap();
        } else {
            write!(self.text, "{} = {:?}; ", field.name(), value).unwrap();
        }
    }
}

static AUTO_ID: AtomicU64 = AtomicU64::new(1);

impl Subscriber for MinimalTracer {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.filters.iter().any(|filter| {
            if let Some(target) = &filter.target {
                if !metadata.target().starts_with(target.as_str()) {
                    return false;
                }
            }
            if let Some(level) = filter.level {
                if *metadata.level() > level {
                    return false;
                }
            }
            true
        })
    }

    fn new_span(&self, _attributes: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(AUTO_ID.fetch_add(1, Ordering::Relaxed))
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        let metadata = event.metadata();
        let mut text = String::new();
        event.record(&mut MessageVisitor { text: &mut text });
        println!("{} {}: {}", metadata.level(), metadata.target(), text.trim_end());
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}
