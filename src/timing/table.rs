use std::collections::BTreeMap;

/// Lookup from operator position to a duration in nanoseconds.
pub trait Timings {
    fn op_duration_ns(&self, op_index: usize) -> Option<u64>;
}

impl<F> Timings for F
where
    F: Fn(usize) -> Option<u64>,
{
    fn op_duration_ns(&self, op_index: usize) -> Option<u64> {
        self(op_index)
    }
}

/// Historical samples, indexed by operator position.
const BUNDLED_SAMPLES_NS: [u64; 66] = [
    1325706, 799440, 1263204, 257175, 936527, 2387987, 241757, 260674, 239340, 416096, 422262,
    101753, 1302205, 255840, 256091, 238423, 388095, 727271, 371094, 72168, 1496044, 145171, 205172,
    159504, 244174, 668436, 84169, 1276538, 145671, 222340, 178588, 283175, 335177, 267424, 58919,
    808940, 83086, 138254, 81336, 138670, 390011, 57585, 3122175, 81586, 160588, 80085, 153421,
    502681, 61502, 1581796, 93753, 207673, 93669, 156505, 663186, 59502, 1563713, 93503, 202422,
    94170, 152255, 135504, 3697191, 240590, 294509, 347594,
];

/// Sparse op-index -> nanoseconds table. The default table is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingTable {
    samples: BTreeMap<usize, u64>,
}

impl TimingTable {
    pub fn new(samples: BTreeMap<usize, u64>) -> Self {
        Self { samples }
    }

    /// The samples shipped with the tool.
    pub fn bundled() -> Self {
        Self::from_iter(BUNDLED_SAMPLES_NS)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Dense sequence: the i-th value belongs to operator i.
impl FromIterator<u64> for TimingTable {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().enumerate().collect(),
        }
    }
}

impl Timings for TimingTable {
    fn op_duration_ns(&self, op_index: usize) -> Option<u64> {
        self.samples.get(&op_index).copied()
    }
}
