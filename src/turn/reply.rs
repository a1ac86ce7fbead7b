//! Parsing grids out of free-form collaborator replies.
//!
//! Text generators tend to wrap their answer: a Markdown code fence, a
//! sentence of preamble, a trailing remark. `parse_reply` drops all of that
//! and reads the first bracketed span that is a JSON array of rows. Prose
//! brackets such as "moved [0, 0]" before or after the grid are skipped.
//!
//! ```
//! use block_shift::turn::parse_reply;
//!
//! let reply = "Here is the new board:\n```json\n[[0, 1], [1, 1]]\n```\nEnjoy!";
//! let grid = parse_reply(reply).unwrap();
//! assert_eq!(grid.marked_count(), 3);
//! ```

use crate::core::{BoardError, Grid};

/// Why a reply could not be turned into a grid.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    /// No `[` ... `]` span in the reply.
    #[error("reply contains no grid")]
    NoGrid,

    /// The bracketed span is not a JSON array of integer rows.
    #[error("reply grid is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The rows do not form a square 0/1 grid.
    #[error("reply grid is malformed: {0}")]
    Shape(#[from] BoardError),
}

/// Extract a grid from a collaborator reply.
///
/// Each `[` is tried in turn as the start of a JSON array of rows, and the
/// first candidate that forms a square 0/1 grid wins. When none does, the
/// first shape error is reported, else the first JSON error. The result is
/// only parsed, not validated against any board rules.
pub fn parse_reply(text: &str) -> Result<Grid, ReplyError> {
    let body = strip_fences(text);
    let start = body.find('[').ok_or(ReplyError::NoGrid)?;
    let end = body.rfind(']').ok_or(ReplyError::NoGrid)?;
    if end < start {
        return Err(ReplyError::NoGrid);
    }

    let mut json_error = None;
    let mut shape_error = None;
    for (i, _) in body.match_indices('[') {
        let mut stream = serde_json::Deserializer::from_str(&body[i..]).into_iter::<Vec<Vec<i64>>>();
        match stream.next() {
            Some(Ok(rows)) => match Grid::from_rows(&rows) {
                Ok(grid) => return Ok(grid),
                Err(err) => {
                    shape_error.get_or_insert(err);
                }
            },
            Some(Err(err)) => {
                json_error.get_or_insert(err);
            }
            None => {}
        }
    }

    match (shape_error, json_error) {
        (Some(err), _) => Err(ReplyError::Shape(err)),
        (None, Some(err)) => Err(ReplyError::Json(err)),
        (None, None) => Err(ReplyError::NoGrid),
    }
}

/// The contents of the first fenced code block, or the whole text.
fn strip_fences(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after_open = &text[open + 3..];
    // Skip the info string (`json`, `python`, ...) up to the end of the line.
    let body_start = after_open.find('\n').map_or(0, |i| i + 1);
    let body = &after_open[body_start..];
    match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    }
}
