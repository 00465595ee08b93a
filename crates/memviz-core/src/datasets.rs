//! Authored, illustrative datasets. None of these numbers are measured.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::VizError;
use crate::record::{ColorTag, Dataset, Record};

/// A level of the memory hierarchy as shown in the hierarchy panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemoryLevel {
    pub name: &'static str,
    /// Typical size, as prose.
    pub size: &'static str,
    /// Typical access time, as prose.
    pub speed: &'static str,
    /// Relative cost per byte.
    pub cost: &'static str,
    /// Representative access time in cycles.
    pub access_cycles: f64,
    /// Representative capacity in KB.
    pub capacity_kb: f64,
    pub color: ColorTag,
}

/// Registers through SSD, fastest first.
pub const MEMORY_LEVELS: [MemoryLevel; 6] = [
    MemoryLevel {
        name: "CPU Registers",
        size: "~1KB",
        speed: "1 cycle",
        cost: "Very High",
        access_cycles: 1.0,
        capacity_kb: 1.0,
        color: ColorTag::Red,
    },
    MemoryLevel {
        name: "L1 Cache",
        size: "32-64KB",
        speed: "1-2 cycles",
        cost: "High",
        access_cycles: 2.0,
        capacity_kb: 64.0,
        color: ColorTag::Orange,
    },
    MemoryLevel {
        name: "L2 Cache",
        size: "256KB-1MB",
        speed: "3-10 cycles",
        cost: "High",
        access_cycles: 7.0,
        capacity_kb: 1000.0,
        color: ColorTag::Yellow,
    },
    MemoryLevel {
        name: "L3 Cache",
        size: "8-32MB",
        speed: "10-20 cycles",
        cost: "Medium",
        access_cycles: 15.0,
        capacity_kb: 32_000.0,
        color: ColorTag::Green,
    },
    MemoryLevel {
        name: "Main Memory (RAM)",
        size: "8-64GB",
        speed: "100-300 cycles",
        cost: "Medium",
        access_cycles: 200.0,
        capacity_kb: 64_000_000.0,
        color: ColorTag::Blue,
    },
    MemoryLevel {
        name: "SSD Storage",
        size: "256GB-4TB",
        speed: "10,000+ cycles",
        cost: "Low",
        access_cycles: 10_000.0,
        capacity_kb: 4_000_000_000.0,
        color: ColorTag::Purple,
    },
];

fn level_description(level: &MemoryLevel) -> String {
    format!("{}, {}, cost {}", level.size, level.speed, level.cost)
}

fn cycle_unit(cycles: f64) -> &'static str {
    if (cycles - 1.0).abs() < f64::EPSILON {
        "cycle"
    } else {
        "cycles"
    }
}

/// Access time per hierarchy level, in cycles.
#[must_use]
pub fn hierarchy_access() -> Dataset {
    Dataset::new(
        MEMORY_LEVELS
            .iter()
            .map(|l| Record::new(l.name, l.access_cycles, cycle_unit(l.access_cycles), level_description(l), l.color))
            .collect(),
    )
}

/// Capacity per hierarchy level, in KB.
#[must_use]
pub fn hierarchy_capacity() -> Dataset {
    Dataset::new(
        MEMORY_LEVELS
            .iter()
            .map(|l| Record::new(l.name, l.capacity_kb, "KB", level_description(l), l.color))
            .collect(),
    )
}

/// Access latency per component, in cycles.
#[must_use]
pub fn latency() -> Dataset {
    let rows: [(&str, f64, &str, &str, ColorTag); 6] = [
        ("CPU Register", 1.0, "cycle", "Immediate access to CPU registers", ColorTag::Red),
        ("L1 Cache", 4.0, "cycles", "First level cache on CPU", ColorTag::Orange),
        ("L2 Cache", 12.0, "cycles", "Second level cache", ColorTag::Yellow),
        ("L3 Cache", 38.0, "cycles", "Shared cache between cores", ColorTag::Green),
        ("Main Memory", 200.0, "cycles", "System RAM access", ColorTag::Blue),
        ("SSD", 50_000.0, "cycles", "Solid state drive access", ColorTag::Purple),
    ];
    Dataset::new(
        rows.into_iter()
            .map(|(label, value, unit, description, color)| Record::new(label, value, unit, description, color))
            .collect(),
    )
}

/// Address-space share of each process segment, low addresses first.
#[must_use]
pub fn process_layout() -> Dataset {
    let rows: [(&str, f64, &str, ColorTag); 6] = [
        ("Stack", 8.0, "Local variables, function calls", ColorTag::Red),
        ("Free Space", 45.0, "Available memory", ColorTag::Gray),
        ("Heap", 25.0, "Dynamic allocation", ColorTag::Blue),
        ("BSS", 8.0, "Uninitialized globals", ColorTag::Yellow),
        ("Data", 7.0, "Initialized globals", ColorTag::Green),
        ("Text", 7.0, "Program code", ColorTag::Purple),
    ];
    Dataset::new(
        rows.into_iter()
            .map(|(label, value, description, color)| {
                Record::new(label, value, "% of address space", description, color)
            })
            .collect(),
    )
}

/// Access pattern whose cache behaviour the cache panel illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScenario {
    #[default]
    Sequential,
    Random,
    Strided,
}

impl CacheScenario {
    /// All scenarios in display order.
    pub const ALL: [Self; 3] = [Self::Sequential, Self::Random, Self::Strided];

    /// Button title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential Access",
            Self::Random => "Random Access",
            Self::Strided => "Strided Access",
        }
    }

    /// One-line explanation.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Sequential => "Accessing array elements in order",
            Self::Random => "Accessing memory locations randomly",
            Self::Strided => "Accessing every Nth element",
        }
    }

    /// Hit and miss percentages; they sum to 100.
    #[must_use]
    pub fn hits_misses(self) -> (f64, f64) {
        match self {
            Self::Sequential => (85.0, 15.0),
            Self::Random => (45.0, 55.0),
            Self::Strided => (25.0, 75.0),
        }
    }

    /// Hit/miss dataset for this scenario.
    #[must_use]
    pub fn dataset(self) -> Dataset {
        let (hits, misses) = self.hits_misses();
        Dataset::new(vec![
            Record::new("Cache Hits", hits, "%", "Data found in cache (~1-10 cycles)", ColorTag::Green),
            Record::new(
                "Cache Misses",
                misses,
                "%",
                "Data fetched from RAM (~100-300 cycles)",
                ColorTag::Red,
            ),
        ])
    }

    /// Next scenario, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Sequential => Self::Random,
            Self::Random => Self::Strided,
            Self::Strided => Self::Sequential,
        }
    }

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Sequential => 0,
            Self::Random => 1,
            Self::Strided => 2,
        }
    }
}

impl fmt::Display for CacheScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for CacheScenario {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "random" | "rand" => Ok(Self::Random),
            "strided" | "stride" => Ok(Self::Strided),
            _ => Err(VizError::UnknownScenario(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_is_ordered_fastest_first() {
        let access = hierarchy_access().values();
        assert!(access.windows(2).all(|w| w[0] < w[1]));
        let capacity = hierarchy_capacity().values();
        assert!(capacity.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_cycle_reads_singular() {
        let access = hierarchy_access();
        assert_eq!(access.get(0).unwrap().value_text(), "1 cycle");
        assert_eq!(access.get(1).unwrap().value_text(), "2 cycles");
        assert_eq!(latency().get(0).unwrap().value_text(), "1 cycle");
    }

    #[test]
    fn latency_matches_authored_table() {
        assert_eq!(latency().values(), vec![1.0, 4.0, 12.0, 38.0, 200.0, 50_000.0]);
    }

    #[test]
    fn layout_sums_to_hundred() {
        let ds = process_layout();
        assert_eq!(ds.values(), vec![8.0, 45.0, 25.0, 8.0, 7.0, 7.0]);
        assert!((ds.sum() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scenarios_sum_to_hundred() {
        for scenario in CacheScenario::ALL {
            let (hits, misses) = scenario.hits_misses();
            assert!((hits + misses - 100.0).abs() < f64::EPSILON);
            assert_eq!(scenario.dataset().len(), 2);
        }
    }

    #[test]
    fn scenario_cycle_and_parse() {
        assert_eq!(CacheScenario::Strided.next(), CacheScenario::Sequential);
        assert_eq!("random".parse::<CacheScenario>().unwrap(), CacheScenario::Random);
        assert!("zigzag".parse::<CacheScenario>().is_err());
        for (i, s) in CacheScenario::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn descriptions_mention_size_and_cost() {
        let ds = hierarchy_access();
        let l1 = ds.get(1).unwrap();
        assert!(l1.description.contains("32-64KB"));
        assert!(l1.description.contains("High"));
    }
}
