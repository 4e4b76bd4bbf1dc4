use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interval_map::IntervalMap;

use crate::Lfsr;

/// Where, relative to each stored `[4v, 4v + 2)` interval, a lookup key
/// lands.
#[derive(Debug, Clone, Copy)]
enum Probe {
    LowerBound,
    Interior,
    UpperBound,
    Gap,
}

impl Probe {
    fn offset(self) -> u32 {
        match self {
            Self::LowerBound => 0,
            Self::Interior => 1,
            Self::UpperBound => 2,
            Self::Gap => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::LowerBound => "lower_bound",
            Self::Interior => "interior",
            Self::UpperBound => "upper_bound",
            Self::Gap => "gap",
        }
    }

    /// Only the closed lower bound and the interior lie within an interval.
    fn hits(self) -> bool {
        matches!(self, Self::LowerBound | Self::Interior)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("contains_key");

    for n_values in [1_000, 10_000] {
        let map = build_map(n_values);

        for probe in [Probe::LowerBound, Probe::Interior, Probe::UpperBound, Probe::Gap] {
            bench_probe(&mut g, &map, n_values, probe);
        }
    }
}

fn build_map(n_values: usize) -> IntervalMap<u32, usize> {
    let mut rand = Lfsr::default();
    let mut map = IntervalMap::new();

    for i in 0..n_values {
        map.insert(rand.next_interval(), i)
            .expect("generated intervals never overlap");
    }

    map
}

/// Look up one key per stored interval, each placed according to `probe`.
fn bench_probe<M>(
    g: &mut BenchmarkGroup<'_, M>,
    map: &IntervalMap<u32, usize>,
    n_values: usize,
    probe: Probe,
) where
    M: Measurement,
{
    g.throughput(Throughput::Elements(n_values as _)); // Lookups per second
    g.bench_function(BenchmarkId::new(probe.name(), n_values), |b| {
        b.iter_batched(
            // Replaying the LFSR from the start revisits every stored
            // interval in insertion order.
            Lfsr::default,
            |mut rand| {
                for _ in 0..n_values {
                    let key = rand.next_key_at(probe.offset());
                    assert_eq!(map.contains_key(&key), probe.hits());
                }
            },
            BatchSize::SmallInput,
        )
    });
}
