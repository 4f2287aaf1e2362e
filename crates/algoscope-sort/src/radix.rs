//! LSD radix sort with decimal digit buckets.

use algoscope_engine::Tracer;

use crate::Sorter;

/// Distributes by each decimal digit (least significant first) into buckets
/// 0–9 and collects them back in order.
///
/// Negative inputs are handled by offsetting every key by the minimum, so
/// the digits sorted on are those of `value - min`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixSort;

const RADIX: u64 = 10;

fn key(value: i64, min: i64) -> u64 {
    (i128::from(value) - i128::from(min)) as u64
}

impl Sorter<i64> for RadixSort {
    fn name(&self) -> &'static str {
        "radix sort"
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
        if min < 0 {
            tracer.boundary(Vec::new(), format!("Offset keys by {min} to make them non-negative"));
        }
        let max_key = key(max, min);

        let mut place: u64 = 1;
        loop {
            tracer.pass(format!("Digit place {place}"));

            let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); RADIX as usize];
            for i in 0..n {
                let value = *tracer.get(i);
                let digit = (key(value, min) / place % RADIX) as usize;
                buckets[digit].push(value);
                tracer.boundary(vec![i], format!("Place {value} into bucket {digit}"));
            }

            for (i, value) in buckets.into_iter().flatten().enumerate() {
                tracer.write(i, value);
            }

            match place.checked_mul(RADIX) {
                Some(next) if max_key / next > 0 => place = next,
                _ => break,
            }
        }
    }
}
