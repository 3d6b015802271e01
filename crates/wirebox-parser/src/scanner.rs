//! Recursive-descent scanner for the bracket notation.
//!
//! The [`Scanner`] walks the buffer one character at a time, tracking a
//! [`State`] and a [`Cell`] cursor. Every `[` inside a body recurses into
//! [`Scanner::parse_block`] with a copy of the cursor; the call returns the
//! child together with the cursor it ended on, and the parent keeps
//! whichever position lies further. Cursors are never shared by reference.
//!
//! Row breaks:
//!
//! - a newline inside a body is kept as body text and starts a new row;
//! - `/` starts a new row unless the current row is still empty, then
//!   enters [`State::NewLine`], which absorbs the next newline;
//! - `//` is treated as a single `/`. On a line of its own the absorbed
//!   newline is not taken, which leaves one blank row.
//!
//! The outermost block is never closed by a bracket: a `]` at depth 0 leaves
//! an empty slot in the root's row and scanning continues, so the root ends
//! with the input.
//!
//! Malformed characters fail with [`ScanError::Syntax`]. Running out of
//! input inside a nested block is not an error: the partial tree is
//! returned with [`Termination::Truncated`], unless strict mode is set.

use std::fmt;

use log::{debug, trace};

use wirebox_core::{block::Block, cell::Cell};

use crate::{error::ScanError, line_index::LineIndex};

/// Default limit for [`ScanOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest nesting limit a scan accepts. Higher limits are clamped.
pub const MAX_DEPTH_CEILING: usize = 256;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Before the outermost block.
    Out,
    /// Collecting the body of a block.
    InBody,
    /// Just after a `/` row break.
    NewLine,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Out => write!(f, "before the first block"),
            State::InBody => write!(f, "inside a block body"),
            State::NewLine => write!(f, "after a row break"),
        }
    }
}

/// Options controlling a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    max_depth: usize,
    strict: bool,
}

impl ScanOptions {
    /// Returns the deepest nesting accepted; the outermost block has depth 0.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if truncated and empty input is rejected.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Sets the nesting limit, clamped to [`MAX_DEPTH_CEILING`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        if max_depth > MAX_DEPTH_CEILING {
            debug!(requested = max_depth, ceiling = MAX_DEPTH_CEILING; "Clamping nesting limit");
        }
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    /// Enables or disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

/// One entry of the optional scan trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// The scanner changed state at `offset`.
    Transition { offset: usize, from: State, to: State },
    /// A block was opened by the `[` at `offset`.
    Open { offset: usize, depth: usize, cell: Cell },
    /// A block was closed by the `]` at `offset`.
    Close { offset: usize, depth: usize, cell: Cell },
    /// A `]` at depth 0 left the empty slot `cell` in the root's row.
    EmptySlot { offset: usize, cell: Cell },
}

/// How a call to [`Scanner::parse_block`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The block ended normally: a nested block at its `]`, the outermost
    /// block at the end of input.
    Closed,
    /// The input ended with `open_blocks` nested blocks still open.
    Truncated { open_blocks: usize },
    /// The input contains no block.
    Empty,
}

/// The result of scanning one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned {
    /// The block and its subtree, bodies still raw.
    pub block: Block,
    /// Offset of the closing `]` of a nested block, otherwise the buffer
    /// length.
    pub end_offset: usize,
    /// The cursor the block ended on, handed back to the caller.
    pub cursor: Cell,
    /// How the scan ended.
    pub termination: Termination,
}

/// Stateful scanner over one source buffer.
///
/// # Example
///
/// ```
/// # use wirebox_parser::{Scanner, ScanOptions, Termination};
/// let scanned = Scanner::new("[gray: Frame [white: Body]]", ScanOptions::default())
///     .scan()
///     .unwrap();
///
/// assert_eq!(scanned.termination, Termination::Closed);
/// assert_eq!(scanned.block.children().len(), 1);
/// ```
pub struct Scanner<'s, 't> {
    source: &'s str,
    options: ScanOptions,
    lines: LineIndex,
    trace: Option<&'t mut Vec<ScanEvent>>,
}

impl<'s, 't> Scanner<'s, 't> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'s str, options: ScanOptions) -> Self {
        Self {
            source,
            options,
            lines: LineIndex::new(source),
            trace: None,
        }
    }

    /// Records state transitions and block events into `trace`.
    pub fn with_trace(mut self, trace: &'t mut Vec<ScanEvent>) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Scans the whole buffer from offset 0, rooted at cell `(0, 0)`.
    ///
    /// In strict mode truncated input fails with
    /// [`ScanError::UnterminatedBlock`] and input without any block fails
    /// with [`ScanError::EmptyDocument`].
    pub fn scan(&mut self) -> Result<Scanned, ScanError> {
        let scanned = self.parse_block(0, Cell::default(), State::Out, 0)?;
        debug!(
            end_offset = scanned.end_offset,
            termination:? = scanned.termination;
            "Scan finished"
        );

        if self.options.strict {
            match scanned.termination {
                Termination::Closed => {}
                Termination::Truncated { open_blocks } => {
                    let offset = self.source.len();
                    return Err(ScanError::UnterminatedBlock {
                        offset,
                        line: self.lines.line_of(offset.saturating_sub(1)),
                        open_blocks,
                    });
                }
                Termination::Empty => return Err(ScanError::EmptyDocument),
            }
        }
        Ok(scanned)
    }

    /// Scans one block.
    ///
    /// `start_offset` is the first byte to read, `start_cell` the cell the
    /// block is anchored at and `depth` its nesting level. A nested block
    /// starts in [`State::InBody`] just past its `[`; the outermost block
    /// starts in [`State::Out`] and opens at the first `[`.
    pub fn parse_block(
        &mut self,
        start_offset: usize,
        start_cell: Cell,
        start_state: State,
        depth: usize,
    ) -> Result<Scanned, ScanError> {
        let mut block = Block::new(start_cell, depth);
        let mut state = start_state;
        let mut cursor = start_cell.next_column();
        let mut offset = start_offset;
        let mut opened = start_state != State::Out;
        let mut range_start = start_offset;

        if opened {
            range_start = start_offset.saturating_sub(1);
            self.record_open(range_start, depth, start_cell);
        }

        while let Some(ch) = self.source[offset..].chars().next() {
            match (state, ch) {
                (State::Out, '[') => {
                    opened = true;
                    range_start = offset;
                    self.record_open(offset, depth, start_cell);
                    self.transition(offset, &mut state, State::InBody);
                    offset += 1;
                }
                (State::Out, ch) if is_horizontal_space(ch) => offset += ch.len_utf8(),
                (State::Out, found) => {
                    return Err(ScanError::Syntax {
                        offset,
                        line: self.lines.line_of(offset),
                        state,
                        found,
                    });
                }

                (State::NewLine, '\n') => {
                    self.transition(offset, &mut state, State::InBody);
                    offset += 1;
                }
                (State::NewLine, '/') if self.follows_slash(offset) => {
                    self.transition(offset, &mut state, State::InBody);
                    offset += 1;
                }
                (State::NewLine, '/') => {
                    cursor = break_row(cursor);
                    offset += 1;
                }
                (State::NewLine, ch) if is_horizontal_space(ch) => {
                    block.push_char(ch);
                    offset += ch.len_utf8();
                }
                // Anything else ends the row break and is scanned as body.
                (State::NewLine, _) => self.transition(offset, &mut state, State::InBody),

                (State::InBody, '[') => {
                    if depth + 1 > self.options.max_depth {
                        return Err(ScanError::NestingTooDeep {
                            offset,
                            line: self.lines.line_of(offset),
                            limit: self.options.max_depth,
                        });
                    }

                    let child = self.parse_block(offset + 1, cursor, State::InBody, depth + 1)?;
                    cursor = cursor.next_column().max(child.cursor);
                    block.push_child(child.block);

                    if let Termination::Truncated { open_blocks } = child.termination {
                        block.set_source_range(range_start..self.source.len());
                        let own = usize::from(depth > 0);
                        return Ok(Scanned {
                            block,
                            end_offset: child.end_offset,
                            cursor,
                            termination: Termination::Truncated {
                                open_blocks: open_blocks + own,
                            },
                        });
                    }
                    offset = child.end_offset + 1;
                }
                (State::InBody, ']') if depth > 0 => {
                    block.set_source_range(range_start..offset + 1);
                    self.record_close(offset, depth, start_cell);
                    return Ok(Scanned {
                        block,
                        end_offset: offset,
                        cursor,
                        termination: Termination::Closed,
                    });
                }
                (State::InBody, ']') => {
                    self.record_empty_slot(offset, cursor);
                    cursor = cursor.next_column();
                    offset += 1;
                }
                (State::InBody, '/') => {
                    cursor = break_row(cursor);
                    self.transition(offset, &mut state, State::NewLine);
                    offset += 1;
                }
                (State::InBody, '\n') => {
                    block.push_char('\n');
                    cursor = cursor.next_row();
                    offset += 1;
                }
                (State::InBody, ch) => {
                    block.push_char(ch);
                    offset += ch.len_utf8();
                }
            }
        }

        let end_offset = self.source.len();
        let termination = if !opened {
            Termination::Empty
        } else if depth == 0 {
            block.set_source_range(range_start..end_offset);
            Termination::Closed
        } else {
            block.set_source_range(range_start..end_offset);
            trace!(depth, cell:? = start_cell; "Input ends inside block");
            Termination::Truncated { open_blocks: 1 }
        };

        Ok(Scanned {
            block,
            end_offset,
            cursor,
            termination,
        })
    }

    fn follows_slash(&self, offset: usize) -> bool {
        offset > 0 && self.source.as_bytes()[offset - 1] == b'/'
    }

    fn transition(&mut self, offset: usize, state: &mut State, to: State) {
        let from = *state;
        *state = to;
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(ScanEvent::Transition { offset, from, to });
        }
    }

    fn record_open(&mut self, offset: usize, depth: usize, cell: Cell) {
        trace!(offset, depth, cell:?; "Block opened");
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(ScanEvent::Open {
                offset,
                depth,
                cell,
            });
        }
    }

    fn record_empty_slot(&mut self, offset: usize, cell: Cell) {
        trace!(offset, cell:?; "Empty slot in root");
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(ScanEvent::EmptySlot { offset, cell });
        }
    }

    fn record_close(&mut self, offset: usize, depth: usize, cell: Cell) {
        trace!(offset, depth, cell:?; "Block closed");
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(ScanEvent::Close {
                offset,
                depth,
                cell,
            });
        }
    }
}

/// Moves the cursor to the start of the next row, unless the current row is
/// still empty.
fn break_row(cursor: Cell) -> Cell {
    if cursor.column() > 0 {
        cursor.next_row()
    } else {
        cursor
    }
}

fn is_horizontal_space(ch: char) -> bool {
    ch != '\n' && ch.is_whitespace()
}
