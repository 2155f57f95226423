//! Panel State
//!
//! Display state derived from props (page window, directory mode, metric
//! cards) and the refresh state machine. Everything here is a pure function
//! of its inputs and is re-evaluated on every render.

use std::cell::Cell;
use std::future::Future;
use std::ops::Range;
use std::rc::Rc;

use leptos::*;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::types::*;

// ============================================================================
// Pagination
// ============================================================================

/// Number of pages needed for `total` rows. Never less than one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into `[1, page_count]`
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Index range of the rows visible on `page`, clamped to `[0, total]`
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let page = clamp_page(page, page_count(total, page_size));
    let start = ((page - 1) * page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Resolved pagination for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub current: usize,
    pub count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageView {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.count)
    }
}

/// Requested page plus the page size.
///
/// `requested` may drift out of range when the list shrinks; every read goes
/// through [`PageState::resolve`], which clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub requested: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            requested: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn resolve(&self, total: usize) -> PageView {
        let count = page_count(total, self.page_size);
        let current = clamp_page(self.requested, count);
        PageView {
            current,
            count,
            has_previous: current > 1,
            has_next: current < count,
        }
    }

    pub fn bounds(&self, total: usize) -> Range<usize> {
        page_bounds(total, self.requested, self.page_size)
    }

    /// Pull `requested` back into range for `total` rows. Returns true if it moved.
    pub fn clamp_to(&mut self, total: usize) -> bool {
        let current = self.resolve(total).current;
        let moved = current != self.requested;
        self.requested = current;
        moved
    }

    /// Step back one page. Returns false when already on the first page.
    pub fn previous(&mut self, total: usize) -> bool {
        self.clamp_to(total);
        if self.requested <= 1 {
            return false;
        }
        self.requested -= 1;
        true
    }

    /// Step forward one page. Returns false when already on the last page.
    pub fn next(&mut self, total: usize) -> bool {
        self.clamp_to(total);
        if self.requested >= page_count(total, self.page_size) {
            return false;
        }
        self.requested += 1;
        true
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// Directory
// ============================================================================

/// Which of the three directory views to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Loading,
    Empty,
    Populated { total: usize },
}

impl DirectoryState {
    /// Loading wins over everything; a missing list counts as empty.
    pub fn derive(users: Option<&[UserRecord]>, is_loading: bool) -> Self {
        if is_loading {
            return Self::Loading;
        }
        match users.map(<[UserRecord]>::len).unwrap_or(0) {
            0 => Self::Empty,
            total => Self::Populated { total },
        }
    }

    pub fn count_label(&self) -> Option<String> {
        match self {
            Self::Populated { total } => Some(format!("{} users", total)),
            _ => None,
        }
    }

    pub fn loaded_label(&self) -> Option<String> {
        match self {
            Self::Populated { total } => Some(format!("{} users loaded", total)),
            _ => None,
        }
    }
}

// ============================================================================
// Metrics
// ============================================================================

/// Shown in a metric card when its value is unknown
pub const METRIC_PLACEHOLDER: &str = "—";

/// Metric card kinds, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    TotalUsers,
    Pending,
    InProgress,
    DueThisWeek,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        Self::TotalUsers,
        Self::Pending,
        Self::InProgress,
        Self::DueThisWeek,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::TotalUsers => "Total Users",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::DueThisWeek => "Due This Week",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::TotalUsers => "teal",
            Self::Pending => "warning",
            Self::InProgress => "info",
            Self::DueThisWeek => "terracotta",
        }
    }

    fn value(&self, stats: &StatsSummary) -> Option<u64> {
        match self {
            Self::TotalUsers => stats.total,
            Self::Pending => stats.pending,
            Self::InProgress => stats.in_progress,
            Self::DueThisWeek => stats.due_this_week,
        }
    }
}

/// One rendered metric card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub kind: MetricKind,
    pub value: String,
}

impl MetricCard {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// The four metric cards for `stats`, with placeholders for unknown values
pub fn metric_cards(stats: Option<&StatsSummary>) -> [MetricCard; 4] {
    MetricKind::ALL.map(|kind| MetricCard {
        kind,
        value: stats
            .and_then(|s| kind.value(s))
            .map(|v| v.to_string())
            .unwrap_or_else(|| METRIC_PLACEHOLDER.to_string()),
    })
}

// ============================================================================
// Refresh
// ============================================================================

/// Storage for the "refresh in flight" bit
pub trait PendingFlag: Clone + 'static {
    fn is_set(&self) -> bool;
    fn store(&self, value: bool);
}

impl PendingFlag for Rc<Cell<bool>> {
    fn is_set(&self) -> bool {
        self.get()
    }

    fn store(&self, value: bool) {
        self.set(value);
    }
}

impl PendingFlag for RwSignal<bool> {
    fn is_set(&self) -> bool {
        self.try_get_untracked().unwrap_or(false)
    }

    // The owning component may be gone by the time a refresh settles.
    fn store(&self, value: bool) {
        let _ = self.try_set(value);
    }
}

/// Idle/Pending state machine guarding the refresh action
#[derive(Debug, Clone)]
pub struct RefreshGate<F: PendingFlag> {
    flag: F,
}

impl<F: PendingFlag> RefreshGate<F> {
    pub fn new(flag: F) -> Self {
        flag.store(false);
        Self { flag }
    }

    pub fn is_pending(&self) -> bool {
        self.flag.is_set()
    }

    /// Idle -> Pending. Returns `None` if a refresh is already in flight.
    pub fn begin(&self) -> Option<RefreshGuard<F>> {
        if self.flag.is_set() {
            return None;
        }
        self.flag.store(true);
        Some(RefreshGuard {
            flag: self.flag.clone(),
        })
    }

    /// Enter Pending synchronously, invoke `op`, and return a future that
    /// resolves to its output and then drops back to Idle.
    pub fn start<Op, Fut>(&self, op: Op) -> Option<impl Future<Output = Fut::Output>>
    where
        Op: FnOnce() -> Fut,
        Fut: Future,
    {
        let guard = self.begin()?;
        let operation = op();
        Some(async move {
            let output = operation.await;
            drop(guard);
            output
        })
    }
}

impl Default for RefreshGate<Rc<Cell<bool>>> {
    fn default() -> Self {
        Self::new(Rc::new(Cell::new(false)))
    }
}

/// Returns the gate to Idle when dropped
#[derive(Debug)]
pub struct RefreshGuard<F: PendingFlag> {
    flag: F,
}

impl<F: PendingFlag> Drop for RefreshGuard<F> {
    fn drop(&mut self) {
        self.flag.store(false);
    }
}
