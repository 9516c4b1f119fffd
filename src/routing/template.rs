//! Route template matching
//!
//! Templates are `/`-separated segment lists where a `{name}` segment
//! captures the corresponding path segment under that name. A template
//! matches a path iff segment counts are equal and every literal
//! segment compares equal; there is no prefix or wildcard matching.

use crate::binding::ParamMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern such as `/get/res3/{name}/{age}`.
#[derive(Debug, Clone)]
pub struct RouteTemplate {
    segments: Vec<Segment>,
}

impl RouteTemplate {
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .into_iter()
            .map(|segment| {
                segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .map_or_else(
                        || Segment::Literal(segment.to_string()),
                        |name| Segment::Param(name.to_string()),
                    )
            })
            .collect();
        Self { segments }
    }

    /// Match a request path, capturing named segments.
    pub fn match_path(&self, path: &str) -> Option<ParamMap> {
        let parts = split_segments(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = ParamMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => captured.push(name.clone(), (*part).to_string()),
            }
        }
        Some(captured)
    }
}

/// Split a path into non-empty segments; `/` becomes the empty list.
fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
