// Integration tests for the sorting step procedures

use algotty::dataset::{generate_array, ArrayElement, Dataset, ElementStatus};
use algotty::engine::{EngineError, StepEngine};
use algotty::registry::AlgorithmId;
use algotty::snapshot::StructureView;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn array_of(values: &[i32]) -> Dataset {
    Dataset::Array(values.iter().map(|&v| ArrayElement::new(v)).collect())
}

fn values(dataset: &Dataset) -> Vec<i32> {
    match dataset {
        Dataset::Array(elements) => elements.iter().map(|e| e.value).collect(),
        _ => panic!("expected an array dataset"),
    }
}

#[test]
fn bubble_sort_known_input() {
    let mut dataset = array_of(&[5, 3, 1, 4, 2]);
    let trace = StepEngine::execute(AlgorithmId::Bubble, &mut dataset).expect("bubble sort failed");

    assert_eq!(values(&dataset), vec![1, 2, 3, 4, 5]);

    // n(n-1)/2 adjacent comparisons, one swap per inversion.
    let metrics = trace.final_metrics();
    assert_eq!(metrics.comparisons, 10);
    assert_eq!(metrics.swaps, 7);

    if let Dataset::Array(elements) = &dataset {
        assert!(elements.iter().all(|e| e.status == ElementStatus::Sorted));
    }
}

#[test]
fn all_sorts_produce_sorted_permutations() {
    let algorithms = [
        AlgorithmId::Bubble,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Insertion,
        AlgorithmId::Selection,
    ];

    for (i, &algorithm) in algorithms.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(42 + i as u64);
        let elements = generate_array(25, &mut rng).expect("generation failed");
        let mut expected: Vec<i32> = elements.iter().map(|e| e.value).collect();
        expected.sort_unstable();

        let mut dataset = Dataset::Array(elements);
        StepEngine::execute(algorithm, &mut dataset).expect("sort failed");

        assert_eq!(values(&dataset), expected, "wrong result for {}", algorithm);
        if let Dataset::Array(elements) = &dataset {
            assert!(
                elements.iter().all(|e| e.status == ElementStatus::Sorted),
                "{} left unsorted statuses",
                algorithm
            );
        }
    }
}

#[test]
fn counters_never_decrease_within_a_trace() {
    let mut rng = StdRng::seed_from_u64(7);
    let elements = generate_array(15, &mut rng).expect("generation failed");
    let mut dataset = Dataset::Array(elements);
    let trace = StepEngine::execute(AlgorithmId::Quick, &mut dataset).expect("quick sort failed");

    assert!(!trace.is_empty());
    let mut previous = (0u64, 0u64);
    for snapshot in trace.snapshots() {
        let current = (snapshot.metrics.comparisons, snapshot.metrics.swaps);
        assert!(current.0 >= previous.0, "comparisons went backwards");
        assert!(current.1 >= previous.1, "swaps went backwards");
        previous = current;
    }
}

#[test]
fn snapshots_own_their_data() {
    let mut dataset = array_of(&[9, 8, 7, 6, 5]);
    let trace =
        StepEngine::execute(AlgorithmId::Insertion, &mut dataset).expect("insertion sort failed");

    // Every snapshot reflects its own step, not the terminal state.
    let first = trace.get(0).expect("empty trace");
    if let StructureView::Array(elements) = &first.structure {
        let snapshot_values: Vec<i32> = elements.iter().map(|e| e.value).collect();
        assert_ne!(snapshot_values, values(&dataset));
    } else {
        panic!("expected an array snapshot");
    }
}

#[test]
fn generator_rejects_out_of_range_sizes() {
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(
        generate_array(4, &mut rng),
        Err(EngineError::InvalidArraySize { size: 4 })
    );
    assert_eq!(
        generate_array(101, &mut rng),
        Err(EngineError::InvalidArraySize { size: 101 })
    );

    for size in [5, 20, 100] {
        let elements = generate_array(size, &mut rng).expect("in-range size rejected");
        assert_eq!(elements.len(), size);
        assert!(elements.iter().all(|e| (1..=100).contains(&e.value)));
        assert!(elements.iter().all(|e| e.status == ElementStatus::Default));
    }
}

#[test]
fn seeded_generation_is_deterministic() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    let first = generate_array(30, &mut a).expect("generation failed");
    let second = generate_array(30, &mut b).expect("generation failed");
    assert_eq!(first, second);
}
