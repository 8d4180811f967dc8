//! Resolver traversal engine
//!
//! Depth-first walk over a payload that registers every format declaration
//! it meets into a [`FormatCache`]. The walk is driven one call at a time:
//! `advance` stops as soon as the requested format is recorded and the next
//! call picks up from the same stack position, so lookups against one large
//! payload share a single pass.

use serde_json::Value;

use super::node::TraversalNode;
use super::stack::ResumableStack;
use crate::cache::FormatCache;
use crate::error::{FormatError, FormatResult};
use crate::payload::FormatId;

/// Outcome of one `advance` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The target format was just recorded; the walk is paused after it
    Yielded(FormatId),
    /// Every node has been visited
    Exhausted,
}

/// Traversal counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStats {
    /// Nodes pushed onto the stack
    pub nodes_visited: u64,
    /// Declarations this walk added to the cache
    pub formats_recorded: u64,
    /// Times the walk paused on a target
    pub targets_yielded: u64,
}

impl TraversalStats {
    fn record_node(&mut self) {
        self.nodes_visited += 1;
    }

    fn record_format(&mut self) {
        self.formats_recorded += 1;
    }

    fn record_yield(&mut self) {
        self.targets_yielded += 1;
    }

    /// Nodes pushed so far
    pub fn nodes(&self) -> u64 {
        self.nodes_visited
    }

    /// Formats recorded so far
    pub fn formats(&self) -> u64 {
        self.formats_recorded
    }

    /// Pauses on a target so far
    pub fn yields(&self) -> u64 {
        self.targets_yielded
    }
}

/// Work decided for the current node
enum Step<'a> {
    Descend(TraversalNode<'a>),
    Pop,
    Yield(FormatId),
    Continue,
}

/// Resumable depth-first walker bound to one payload root
#[derive(Debug)]
pub struct TraversalEngine<'a> {
    stack: ResumableStack<'a>,
    /// Stack cap; `None` walks any nesting
    max_depth: Option<usize>,
    /// Set once a push exceeded `max_depth`; every later call fails the same way
    depth_failure: Option<(usize, usize)>,
    stats: TraversalStats,
}

impl<'a> TraversalEngine<'a> {
    /// Engine over `root` with no depth limit
    #[must_use]
    pub fn new(root: &'a Value) -> Self {
        Self::with_depth_limit(root, None)
    }

    /// Engine over `root` that refuses to nest deeper than `max_depth`
    #[must_use]
    pub fn with_max_depth(root: &'a Value, max_depth: usize) -> Self {
        Self::with_depth_limit(root, Some(max_depth))
    }

    /// Engine over `root` with an optional depth limit
    #[must_use]
    pub fn with_depth_limit(root: &'a Value, max_depth: Option<usize>) -> Self {
        let mut engine = Self {
            stack: ResumableStack::new(),
            max_depth,
            depth_failure: None,
            stats: TraversalStats::default(),
        };

        // The root is walked like the nested data of a synthetic carrier.
        if let Some(node) = TraversalNode::for_value(root) {
            engine.stack.push(node);
            engine.stats.record_node();
        }
        engine
    }

    /// Walk until `target` is recorded or the payload is exhausted.
    ///
    /// With `target == None` the walk never pauses and runs to exhaustion.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::DepthLimitExceeded` when the payload nests deeper
    /// than the configured limit.
    pub fn advance(
        &mut self,
        cache: &mut FormatCache,
        target: Option<FormatId>,
    ) -> FormatResult<Advance> {
        if let Some((depth, limit)) = self.depth_failure {
            return Err(FormatError::depth_limit_exceeded(depth, limit));
        }

        loop {
            let step = match self.stack.current_mut() {
                Some(node) => Self::step(node, cache, target, &mut self.stats),
                None => {
                    tracing::trace!(
                        target: "recfmt::traversal",
                        nodes_visited = self.stats.nodes(),
                        "Traversal exhausted"
                    );
                    return Ok(Advance::Exhausted);
                }
            };

            match step {
                Step::Descend(child) => self.descend(child)?,
                Step::Pop => {
                    self.stack.pop();
                }
                Step::Yield(id) => {
                    tracing::trace!(
                        target: "recfmt::traversal",
                        format_id = id,
                        depth = self.stack.depth(),
                        "Paused on target format"
                    );
                    return Ok(Advance::Yielded(id));
                }
                Step::Continue => {}
            }
        }
    }

    fn step(
        node: &mut TraversalNode<'a>,
        cache: &mut FormatCache,
        target: Option<FormatId>,
        stats: &mut TraversalStats,
    ) -> Step<'a> {
        match node {
            TraversalNode::Array { items } => match items.next() {
                Some(element) => TraversalNode::for_value(element).map_or(Step::Continue, Step::Descend),
                None => Step::Pop,
            },
            TraversalNode::Record {
                carrier,
                declared,
                completed,
            } => {
                if *completed {
                    return Step::Pop;
                }

                if !*declared {
                    *declared = true;
                    if let Some((id, fields)) = carrier.declaration() {
                        if cache.insert_first(id, fields) {
                            stats.record_format();
                            if target == Some(id) {
                                // Left on the stack unpopped; the next call descends into `d`.
                                stats.record_yield();
                                return Step::Yield(id);
                            }
                        }
                    } else if carrier.has_structure() {
                        tracing::trace!(
                            target: "recfmt::traversal",
                            "Structure without integer id or array literal, not recorded"
                        );
                    }
                }

                match carrier.nested().and_then(TraversalNode::for_value) {
                    Some(child) => {
                        *completed = true;
                        Step::Descend(child)
                    }
                    None => Step::Pop,
                }
            }
        }
    }

    fn descend(&mut self, node: TraversalNode<'a>) -> FormatResult<()> {
        let depth = self.stack.depth() + 1;
        if let Some(limit) = self.max_depth.filter(|&limit| depth > limit) {
            tracing::warn!(
                target: "recfmt::traversal",
                depth = depth,
                max_depth = limit,
                "Payload nesting exceeds traversal depth limit"
            );
            self.depth_failure = Some((depth, limit));
            return Err(FormatError::depth_limit_exceeded(depth, limit));
        }

        self.stack.push(node);
        self.stats.record_node();
        Ok(())
    }

    /// Whether every node has been visited
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }

    /// Current nesting depth of the paused walk
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Deepest nesting reached so far
    #[inline]
    pub fn max_depth_reached(&self) -> usize {
        self.stack.max_depth_reached()
    }

    /// Traversal counters
    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }
}

/// Run `engine` to exhaustion, recording every declaration into `cache`
///
/// # Errors
///
/// Propagates depth limit failures from the engine.
pub fn drain(engine: &mut TraversalEngine<'_>, cache: &mut FormatCache) -> FormatResult<()> {
    while let Advance::Yielded(_) = engine.advance(cache, None)? {}
    Ok(())
}
