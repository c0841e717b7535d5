//! Derived statistics over the block registry.
//!
//! A [`MemorySummary`] is computed in a single pass and cached by the
//! controller after every committed transition. The renderer only formats it.

use std::fmt::Write as _;

use super::block::{Block, MIN_BLOCK_SIZE_KB};

/// Number of histogram buckets.
pub const HISTOGRAM_BUCKETS: usize = 10;

/// Width of a histogram bucket in KB.
pub const BUCKET_WIDTH_KB: u32 = 10;

/// Counts of allocated blocks per 10 KB size range.
///
/// Bucket `i` covers `[10 + 10*i, 19 + 10*i]` KB. Sizes below the first
/// bucket clamp into it, sizes of 100 KB and above land in the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeHistogram {
    counts: [usize; HISTOGRAM_BUCKETS],
}

impl SizeHistogram {
    /// Bucket index for a size in KB.
    pub fn bucket_for(size_kb: u32) -> usize {
        let bucket = size_kb.saturating_sub(MIN_BLOCK_SIZE_KB) / BUCKET_WIDTH_KB;
        (bucket as usize).min(HISTOGRAM_BUCKETS - 1)
    }

    /// Inclusive `(lower, upper)` KB bounds of a bucket.
    pub fn bucket_range(bucket: usize) -> (u32, u32) {
        let lower = MIN_BLOCK_SIZE_KB + bucket as u32 * BUCKET_WIDTH_KB;
        (lower, lower + BUCKET_WIDTH_KB - 1)
    }

    pub fn record(&mut self, size_kb: u32) {
        self.counts[Self::bucket_for(size_kb)] += 1;
    }

    pub fn count(&self, bucket: usize) -> usize {
        self.counts[bucket]
    }

    pub fn counts(&self) -> &[usize; HISTOGRAM_BUCKETS] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Snapshot of pool statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemorySummary {
    pub total_blocks: usize,
    pub allocated_count: usize,
    pub freed_count: usize,
    pub available_count: usize,
    /// Sum of sizes over allocated blocks, in KB.
    pub total_size_kb: u32,
    /// `None` when nothing is allocated.
    pub max_size_kb: Option<u32>,
    /// `None` when nothing is allocated.
    pub min_size_kb: Option<u32>,
    /// Integer average, `None` when nothing is allocated.
    pub average_size_kb: Option<u32>,
    pub histogram: SizeHistogram,
}

impl MemorySummary {
    /// Compute the summary in one pass over `blocks`.
    pub fn compute<'a, I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = &'a Block>,
    {
        let mut summary = Self::default();

        for block in blocks {
            summary.total_blocks += 1;
            if block.is_allocated() {
                let size = block.size_kb();
                summary.allocated_count += 1;
                summary.total_size_kb += size;
                summary.max_size_kb = Some(summary.max_size_kb.map_or(size, |m| m.max(size)));
                summary.min_size_kb = Some(summary.min_size_kb.map_or(size, |m| m.min(size)));
                summary.histogram.record(size);
            } else if block.is_freed() {
                summary.freed_count += 1;
            }
        }

        summary.available_count = summary.total_blocks - summary.allocated_count;
        if summary.allocated_count > 0 {
            summary.average_size_kb = Some(summary.total_size_kb / summary.allocated_count as u32);
        }

        summary
    }

    /// Render the "SYSTEM STATUS" / "MEMORY DISTRIBUTION" report.
    ///
    /// `bar` is repeated once per block in each histogram bucket.
    pub fn report(&self, bar: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "SYSTEM STATUS");
        let _ = writeln!(out);
        let _ = writeln!(out, "Total Blocks: {}", self.total_blocks);
        let _ = writeln!(out, "Allocated: {}", self.allocated_count);
        let _ = writeln!(out, "Freed: {}", self.freed_count);
        let _ = writeln!(out, "Available: {}", self.available_count);
        let _ = writeln!(out, "Total Memory: {} KB", self.total_size_kb);
        let _ = writeln!(out, "Max Block: {} KB", format_optional(self.max_size_kb));
        let _ = writeln!(out, "Min Block: {} KB", format_optional(self.min_size_kb));
        let _ = writeln!(out, "Avg Block: {} KB", format_optional(self.average_size_kb));
        let _ = writeln!(out);
        let _ = writeln!(out, "MEMORY DISTRIBUTION");
        for bucket in 0..HISTOGRAM_BUCKETS {
            let _ = writeln!(
                out,
                "{}: {}",
                bucket_label(bucket),
                bar.repeat(self.histogram.count(bucket))
            );
        }
        out
    }
}

/// Label such as `"10-19 KB"` for a histogram bucket.
pub fn bucket_label(bucket: usize) -> String {
    let (lower, upper) = SizeHistogram::bucket_range(bucket);
    format!("{}-{} KB", lower, upper)
}

/// Format an optional statistic, using `N/A` when undefined.
pub fn format_optional(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}
