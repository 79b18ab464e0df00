// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transaction names derived from payload type names

use serde::{Deserialize, Serialize};

/// How a payload type name becomes a transaction name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionNaming {
    /// `app::orders::OrderPlaced` becomes `OrderPlaced`
    ///
    /// Same-named types from different modules share a label:
    /// `billing::Created` and `shipping::Created` both become `Created`.
    /// Use [`TransactionNaming::Qualified`] to keep them apart.
    #[default]
    Short,
    /// The full type path, unchanged
    Qualified,
}

impl TransactionNaming {
    pub fn apply(self, type_name: &str) -> String {
        match self {
            TransactionNaming::Short => short_type_name(type_name),
            TransactionNaming::Qualified => type_name.to_string(),
        }
    }
}

/// Strip module paths from every path in a type name.
///
/// `alloc::vec::Vec<app::Order>` becomes `Vec<Order>`.
pub fn short_type_name(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len());
    let mut path = String::new();

    for c in type_name.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            push_last_segment(&mut out, &path);
            path.clear();
            out.push(c);
        }
    }
    push_last_segment(&mut out, &path);

    out
}

fn push_last_segment(out: &mut String, path: &str) {
    if let Some(last) = path.rsplit("::").next() {
        out.push_str(last);
    }
}
