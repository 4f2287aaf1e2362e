//! Bucket sort over range-partitioned buckets.

use algoscope_engine::Tracer;

use crate::insertion;
use crate::Sorter;

/// Partitions the value range into `⌈√n⌉` equal-width buckets, writes the
/// buckets back in order, then insertion-sorts each bucket's segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketSort;

impl BucketSort {
    /// Number of buckets used for `n` elements.
    pub fn bucket_count(n: usize) -> usize {
        (n as f64).sqrt().ceil().max(1.0) as usize
    }
}

impl Sorter<i64> for BucketSort {
    fn name(&self) -> &'static str {
        "bucket sort"
    }

    fn sort(&self, tracer: &mut Tracer<Vec<i64>>) {
        let n = tracer.len();
        let (Some(&min), Some(&max)) = (tracer.model().iter().min(), tracer.model().iter().max())
        else {
            return;
        };
        if n < 2 {
            return;
        }

        let count = Self::bucket_count(n);
        let span = i128::from(max) - i128::from(min) + 1;
        let bucket_of =
            |value: i64| ((i128::from(value) - i128::from(min)) * count as i128 / span) as usize;

        tracer.pass(format!("Distribute into {count} buckets"));
        let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); count];
        for i in 0..n {
            let value = *tracer.get(i);
            let bucket = bucket_of(value);
            buckets[bucket].push(value);
            tracer.boundary(vec![i], format!("Place {value} into bucket {bucket}"));
        }

        let mut segments = Vec::with_capacity(count);
        let mut k = 0;
        for bucket in buckets {
            let start = k;
            for value in bucket {
                tracer.write(k, value);
                k += 1;
            }
            segments.push(start..k);
        }

        for (index, segment) in segments.into_iter().enumerate() {
            if segment.len() > 1 {
                tracer.pass(format!("Insertion sort bucket {index}"));
                insertion::sort_range(tracer, segment.start, segment.end);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace_with;

    #[test]
    fn bucket_counts() {
        assert_eq!(BucketSort::bucket_count(1), 1);
        assert_eq!(BucketSort::bucket_count(9), 3);
        assert_eq!(BucketSort::bucket_count(10), 4);
    }

    #[test]
    fn sorts() {
        let timeline = trace_with(&BucketSort, &[29, 25, 3, 49, 9, 37, 21, 43]);
        assert_eq!(timeline.result, vec![3, 9, 21, 25, 29, 37, 43, 49]);
    }

    #[test]
    fn handles_equal_values_and_negatives() {
        assert_eq!(trace_with(&BucketSort, &[4, 4, 4]).result, vec![4, 4, 4]);
        assert_eq!(
            trace_with(&BucketSort, &[3, -8, 0, -1]).result,
            vec![-8, -1, 0, 3]
        );
    }
}
